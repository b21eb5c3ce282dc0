use geo::{Haversine, Length as GeoLength, LineString};
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

use super::Coordinate;

/// a single turn-by-turn instruction along a [`Route`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteStep {
    /// maneuver type followed by its modifier when present, e.g. "turn left".
    pub instruction: String,
    /// road name the maneuver leads onto.
    pub name: String,
    /// step distance, rounded to the nearest meter.
    pub distance: Length,
}

impl RouteStep {
    pub fn new(instruction: String, name: String, distance: Length) -> Self {
        Self {
            instruction,
            name,
            distance,
        }
    }

    /// distance label with unit suffix, e.g. "120m".
    pub fn distance_label(&self) -> String {
        format!("{}m", self.distance.get::<meter>().round() as i64)
    }

    /// the banner text shown while navigating, e.g. "turn left onto Main Street".
    pub fn banner(&self) -> String {
        format!("{} onto {}", self.instruction, self.name)
    }
}

/// path polyline plus turn-by-turn steps from an origin to a shelter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Route {
    pub coordinates: Vec<Coordinate>,
    pub steps: Vec<RouteStep>,
}

impl Route {
    pub fn new(coordinates: Vec<Coordinate>, steps: Vec<RouteStep>) -> Self {
        Self { coordinates, steps }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn first_step(&self) -> Option<&RouteStep> {
        self.steps.first()
    }

    /// sum of the (rounded) step distances.
    pub fn total_distance(&self) -> Length {
        self.steps
            .iter()
            .fold(Length::new::<meter>(0.0), |acc, s| acc + s.distance)
    }

    /// path as a longitude-first geometry.
    pub fn to_line_string(&self) -> LineString<f64> {
        self.coordinates
            .iter()
            .map(|c| c.lon_lat())
            .collect::<Vec<_>>()
            .into()
    }

    /// great-circle length of the path polyline.
    pub fn path_length(&self) -> Length {
        let meters = Haversine.length(&self.to_line_string());
        Length::new::<meter>(meters)
    }
}
