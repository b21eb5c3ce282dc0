use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IncidentCategory {
    #[default]
    General,
    Flood,
    Fire,
    Landslide,
    Medical,
    #[serde(rename = "Blocked Road")]
    BlockedRoad,
    #[serde(rename = "SOS")]
    Sos,
}

impl Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IncidentCategory::General => "General",
            IncidentCategory::Flood => "Flood",
            IncidentCategory::Fire => "Fire",
            IncidentCategory::Landslide => "Landslide",
            IncidentCategory::Medical => "Medical",
            IncidentCategory::BlockedRoad => "Blocked Road",
            IncidentCategory::Sos => "SOS",
        };
        write!(f, "{s}")
    }
}

impl FromStr for IncidentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "general" => Ok(IncidentCategory::General),
            "flood" => Ok(IncidentCategory::Flood),
            "fire" => Ok(IncidentCategory::Fire),
            "landslide" => Ok(IncidentCategory::Landslide),
            "medical" => Ok(IncidentCategory::Medical),
            "blocked road" => Ok(IncidentCategory::BlockedRoad),
            "sos" => Ok(IncidentCategory::Sos),
            _ => Err(format!(
                "unknown incident category '{s}', expected one of: general, flood, fire, landslide, medical, blocked-road, sos"
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReportStatus {
    #[default]
    Pending,
    Acknowledged,
    Resolved,
}

/// a row submitted to the remote incident store. field names follow the
/// `reports` table columns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IncidentReport {
    pub user_email: String,
    #[serde(rename = "type")]
    pub category: IncidentCategory,
    pub details: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_url: Option<String>,
    #[serde(default)]
    pub status: ReportStatus,
}
