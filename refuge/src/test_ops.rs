//! test doubles for the external collaborators.
use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use refuge_core::{
    capture::{CaptureError, CapturedPhoto, EvidenceCapture},
    http::{HttpClient, HttpError},
    model::{Coordinate, IncidentReport, Route, RouteStep, Shelter},
    remote::{IncidentStore, RemoteStoreError, ShelterSource},
    routing::{RouteProvider, RoutingError},
    storage::{KeyValueStore, StorageError},
};
use uom::si::{f64::Length, length::meter};

/// three coordinates and two steps from (12.90, 77.60) to (12.95, 77.65).
pub fn sample_route() -> Route {
    Route::new(
        vec![
            Coordinate::new(12.90, 77.60),
            Coordinate::new(12.93, 77.62),
            Coordinate::new(12.95, 77.65),
        ],
        vec![
            RouteStep::new(
                String::from("depart"),
                String::from("road"),
                Length::new::<meter>(4210.0),
            ),
            RouteStep::new(
                String::from("turn left"),
                String::from("MG Road"),
                Length::new::<meter>(57.0),
            ),
        ],
    )
}

/// a distinguishable route with the requested shape.
pub fn route_with(n_coordinates: usize, n_steps: usize) -> Route {
    let coordinates = (0..n_coordinates)
        .map(|i| Coordinate::new(12.9 + i as f64 * 0.01, 77.6))
        .collect();
    let steps = (0..n_steps)
        .map(|i| {
            RouteStep::new(
                String::from("continue"),
                format!("street {i}"),
                Length::new::<meter>(10.0 * (i + 1) as f64),
            )
        })
        .collect();
    Route::new(coordinates, steps)
}

pub fn shelters() -> Vec<Shelter> {
    vec![
        Shelter::new("S1", "Community Hall", 12.95, 77.65),
        Shelter::new("S2", "Government School", 12.91, 77.61),
        Shelter::new("S3", "Stadium", 13.10, 77.80),
    ]
}

/// a store that can be read but rejects every write.
#[derive(Default)]
pub struct FailingWrites;

impl KeyValueStore for FailingWrites {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteError {
            path: PathBuf::from(key),
            message: String::from("disk full"),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(vec![])
    }
}

/// answers route requests in order from a script.
pub struct ScriptedRoutes {
    responses: Mutex<VecDeque<Result<Route, RoutingError>>>,
    requests: Mutex<Vec<(Coordinate, Coordinate)>>,
}

impl ScriptedRoutes {
    pub fn new(responses: Vec<Result<Route, RoutingError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<(Coordinate, Coordinate)> {
        self.requests
            .lock()
            .expect("test invariant failed: lock poisoned")
            .clone()
    }
}

impl RouteProvider for ScriptedRoutes {
    fn fetch_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<Route, RoutingError> {
        self.requests
            .lock()
            .expect("test invariant failed: lock poisoned")
            .push((*origin, *destination));
        self.responses
            .lock()
            .expect("test invariant failed: lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(RoutingError::FetchFailed(String::from("script exhausted"))))
    }
}

pub struct StaticShelters {
    result: Result<Vec<Shelter>, RemoteStoreError>,
    calls: AtomicUsize,
}

impl StaticShelters {
    pub fn ok(shelters: Vec<Shelter>) -> Self {
        Self {
            result: Ok(shelters),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(RemoteStoreError::RequestFailed(String::from(
                "network unreachable",
            ))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ShelterSource for StaticShelters {
    fn fetch_shelters(&self) -> Result<Vec<Shelter>, RemoteStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[derive(Default)]
pub struct RecordingIncidents {
    pub reject: bool,
    submitted: Mutex<Vec<IncidentReport>>,
}

impl RecordingIncidents {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    pub fn submitted(&self) -> Vec<IncidentReport> {
        self.submitted
            .lock()
            .expect("test invariant failed: lock poisoned")
            .clone()
    }
}

impl IncidentStore for RecordingIncidents {
    fn submit_report(&self, report: &IncidentReport) -> Result<(), RemoteStoreError> {
        if self.reject {
            return Err(RemoteStoreError::RequestFailed(String::from(
                "network unreachable",
            )));
        }
        self.submitted
            .lock()
            .expect("test invariant failed: lock poisoned")
            .push(report.clone());
        Ok(())
    }
}

pub struct FixedCapture(pub Result<CapturedPhoto, CaptureError>);

impl EvidenceCapture for FixedCapture {
    fn capture(&self) -> Result<CapturedPhoto, CaptureError> {
        self.0.clone()
    }
}

/// the OSRM body for [`sample_route`]: `[lon, lat]` geometry, unrounded step
/// distances, an unnamed first road.
pub const SAMPLE_OSRM_BODY: &str = r#"{
  "code": "Ok",
  "routes": [{
    "geometry": {
      "type": "LineString",
      "coordinates": [[77.60, 12.90], [77.62, 12.93], [77.65, 12.95]]
    },
    "legs": [{
      "steps": [
        {"maneuver": {"type": "depart"}, "name": "", "distance": 4210.4},
        {"maneuver": {"type": "turn", "modifier": "left"}, "name": "MG Road", "distance": 56.7}
      ]
    }]
  }]
}"#;

/// answers every GET with the same body and counts the requests.
pub struct CannedHttp {
    body: String,
    gets: AtomicUsize,
}

impl CannedHttp {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            gets: AtomicUsize::new(0),
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

impl HttpClient for CannedHttp {
    fn get(&self, _url: &str, _headers: &[(&str, &str)]) -> Result<Vec<u8>, HttpError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone().into_bytes())
    }

    fn post_json(
        &self,
        url: &str,
        _headers: &[(&str, &str)],
        _body: &serde_json::Value,
    ) -> Result<Vec<u8>, HttpError> {
        Err(HttpError::TransportError {
            url: url.to_string(),
            message: String::from("not supported"),
        })
    }
}
