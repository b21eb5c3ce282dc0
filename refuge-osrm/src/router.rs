use std::sync::Arc;

use refuge_core::{
    http::{HttpClient, HttpError},
    model::{Coordinate, Route},
    routing::{RouteProvider, RoutingError},
};

use crate::{into_route, OsrmConfig, OsrmError, OsrmResponse};

/// requests routes from an OSRM server.
pub struct OsrmRouter {
    config: OsrmConfig,
    client: Arc<dyn HttpClient>,
}

impl OsrmRouter {
    pub fn new(config: OsrmConfig, client: Arc<dyn HttpClient>) -> Result<Self, OsrmError> {
        config.validate()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    pub fn route(&self, origin: &Coordinate, destination: &Coordinate) -> Result<Route, OsrmError> {
        let url = self.config.route_url(origin, destination);
        log::debug!("requesting route {origin} -> {destination} from {url}");
        let body = match self.client.get(&url, &[]) {
            Ok(body) => body,
            // OSRM answers 400 with a JSON body when no route exists (NoRoute, NoSegment)
            Err(HttpError::StatusError { body, status, .. }) if status == 400 => {
                match serde_json::from_str::<OsrmResponse>(&body) {
                    Ok(response) => return into_route(response),
                    Err(_) => {
                        return Err(OsrmError::DeserializeError(format!(
                            "status {status} with unreadable body: {body}"
                        )))
                    }
                }
            }
            Err(e) => return Err(OsrmError::Http(e)),
        };
        let response: OsrmResponse = serde_json::from_slice(&body)
            .map_err(|e| OsrmError::DeserializeError(format!("from '{url}': {e}")))?;
        into_route(response)
    }
}

impl RouteProvider for OsrmRouter {
    fn fetch_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<Route, RoutingError> {
        self.route(origin, destination).map_err(RoutingError::from)
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use refuge_core::{
        http::{HttpClient, HttpError},
        model::Coordinate,
        routing::{RouteProvider, RoutingError},
    };

    use super::OsrmRouter;
    use crate::OsrmConfig;

    /// replays one canned response and records requested URLs.
    struct CannedClient {
        response: Result<String, (u16, String)>,
        requested: Mutex<Vec<String>>,
    }

    impl CannedClient {
        fn ok(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                requested: Mutex::new(vec![]),
            }
        }

        fn status(status: u16, body: &str) -> Self {
            Self {
                response: Err((status, body.to_string())),
                requested: Mutex::new(vec![]),
            }
        }
    }

    impl HttpClient for CannedClient {
        fn get(&self, url: &str, _headers: &[(&str, &str)]) -> Result<Vec<u8>, HttpError> {
            self.requested
                .lock()
                .expect("test invariant failed: lock poisoned")
                .push(url.to_string());
            match &self.response {
                Ok(body) => Ok(body.clone().into_bytes()),
                Err((status, body)) => Err(HttpError::StatusError {
                    url: url.to_string(),
                    status: *status,
                    body: body.clone(),
                }),
            }
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

    fn router(client: Arc<CannedClient>) -> OsrmRouter {
        OsrmRouter::new(OsrmConfig::default(), client)
            .expect("test invariant failed: default config is valid")
    }

    #[test]
    fn test_fetch_route() {
        let client = Arc::new(CannedClient::ok(
            r#"{"code":"Ok","routes":[{"geometry":{"type":"LineString","coordinates":[[77.6,12.9],[77.65,12.95]]},"legs":[{"steps":[{"maneuver":{"type":"arrive"},"name":"Gate","distance":0.4}]}]}]}"#,
        ));
        let route = router(client.clone())
            .fetch_route(&Coordinate::new(12.9, 77.6), &Coordinate::new(12.95, 77.65))
            .expect("should route");
        assert_eq!(route.coordinates.len(), 2);
        assert_eq!(route.steps[0].distance_label(), "0m");
        let requested = client.requested.lock().expect("lock").clone();
        assert_eq!(
            requested,
            vec![String::from(
                "http://router.project-osrm.org/route/v1/driving/77.6,12.9;77.65,12.95?overview=full&geometries=geojson&steps=true"
            )]
        );
    }

    #[test]
    fn test_no_route_status() {
        let client = Arc::new(CannedClient::status(
            400,
            r#"{"code":"NoRoute","message":"Impossible route between points"}"#,
        ));
        let result = router(client)
            .fetch_route(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 1.0));
        assert!(matches!(result, Err(RoutingError::NoRouteFound(_))));
    }

    #[test]
    fn test_server_error_is_fetch_failure() {
        let client = Arc::new(CannedClient::status(503, "unavailable"));
        let result = router(client)
            .fetch_route(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 1.0));
        assert!(matches!(result, Err(RoutingError::FetchFailed(_))));
    }

    #[test]
    fn test_garbage_body_is_fetch_failure() {
        let client = Arc::new(CannedClient::ok("<html>rate limited</html>"));
        let result = router(client)
            .fetch_route(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 1.0));
        assert!(matches!(result, Err(RoutingError::FetchFailed(_))));
    }
}
