use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

use super::Coordinate;

/// identifier of a shelter in the remote directory. the directory may hand
/// out integer or text ids, both are held as text.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ShelterId(String);

impl ShelterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShelterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ShelterId {
    fn from(value: &str) -> Self {
        ShelterId::new(value)
    }
}

impl<'de> Deserialize<'de> for ShelterId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }
        let id = match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Signed(i) => i.to_string(),
            RawId::Unsigned(u) => u.to_string(),
        };
        Ok(ShelterId(id))
    }
}

/// a designated safe location. rows from the remote directory may carry
/// additional columns which are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Shelter {
    pub id: ShelterId,
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Shelter {
    pub fn new(id: impl Into<String>, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: ShelterId::new(id),
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl Display for Shelter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} {}", self.id, self.name, self.coordinate())
    }
}
