use refuge_core::model::Coordinate;
use serde::{Deserialize, Serialize};

use crate::OsrmError;

pub const DEFAULT_BASE_URL: &str = "http://router.project-osrm.org";
pub const DEFAULT_PROFILE: &str = "driving";

/// where and how routes are requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OsrmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

fn default_profile() -> String {
    String::from(DEFAULT_PROFILE)
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            profile: default_profile(),
        }
    }
}

impl OsrmConfig {
    pub fn validate(&self) -> Result<(), OsrmError> {
        if self.base_url.trim().is_empty() {
            return Err(OsrmError::InvalidConfiguration(String::from(
                "routing base_url must not be empty",
            )));
        }
        if self.profile.trim().is_empty() || self.profile.contains('/') {
            return Err(OsrmError::InvalidConfiguration(format!(
                "invalid routing profile '{}'",
                self.profile
            )));
        }
        Ok(())
    }

    /// route request for full overview geometry as GeoJSON plus step annotations.
    pub fn route_url(&self, origin: &Coordinate, destination: &Coordinate) -> String {
        let (start_lon, start_lat) = origin.lon_lat();
        let (end_lon, end_lat) = destination.lon_lat();
        format!(
            "{}/route/v1/{}/{start_lon},{start_lat};{end_lon},{end_lat}?overview=full&geometries=geojson&steps=true",
            self.base_url.trim_end_matches('/'),
            self.profile
        )
    }
}
