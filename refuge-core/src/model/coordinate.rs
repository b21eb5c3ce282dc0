use std::{fmt::Display, str::FromStr};

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// a WGS84 position in decimal degrees, stored latitude-first.
///
/// routing services and GeoJSON geometries order their pairs as `[lon, lat]`,
/// so conversions from those sources should go through [`Coordinate::from_lon_lat`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// builds a coordinate from a longitude-first pair.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// the `(longitude, latitude)` pair expected by most web routing APIs.
    pub fn lon_lat(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// great-circle distance between two coordinates.
    pub fn haversine_distance(&self, other: &Coordinate) -> Length {
        let meters = Haversine.distance(self.to_point(), other.to_point());
        Length::new::<uom::si::length::meter>(meters)
    }

    /// confirms the coordinate lies within the valid range of degrees.
    pub fn validate(&self) -> Result<(), String> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!(
                "latitude '{}' must be a number in range [-90, 90]",
                self.latitude
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!(
                "longitude '{}' must be a number in range [-180, 180]",
                self.longitude
            ));
        }
        Ok(())
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        value.to_point()
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// parses `"lat,lon"` strings such as those passed on the command line.
impl FromStr for Coordinate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(',').map(str::trim).collect::<Vec<_>>();
        match parts.as_slice() {
            [lat, lon] => {
                let latitude = lat
                    .parse::<f64>()
                    .map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
                let longitude = lon
                    .parse::<f64>()
                    .map_err(|e| format!("invalid longitude '{lon}': {e}"))?;
                let coord = Coordinate::new(latitude, longitude);
                coord.validate()?;
                Ok(coord)
            }
            _ => Err(format!(
                "expected coordinate in the format 'lat,lon', found '{s}'"
            )),
        }
    }
}
