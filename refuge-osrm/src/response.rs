use serde::{Deserialize, Serialize};

/// the subset of an OSRM route response that navigation consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmRoute {
    /// requested with `geometries=geojson`, so a GeoJSON LineString of `[lon, lat]` positions.
    pub geometry: Option<geojson::Geometry>,
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmStep {
    pub maneuver: OsrmManeuver,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmManeuver {
    #[serde(rename = "type")]
    pub maneuver_type: String,
    #[serde(default)]
    pub modifier: Option<String>,
}

impl OsrmResponse {
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}
