use std::fmt::Display;

use crate::{
    directory::DirectoryError, emergency::EmergencyError, navigation::NavigationError,
    packet::PacketError,
};

/// a titled message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Alert::new("Error", message)
    }

    pub fn sos_sent() -> Self {
        Alert::new(
            "🚨 SOS SENT",
            "Emergency beacon broadcasted successfully to Rescue Teams.",
        )
    }

    pub fn report_submitted() -> Self {
        Alert::new("Success", "Report submitted. Check status in Profile")
    }

    pub fn packet_downloaded() -> Self {
        Alert::new("Success", "Safety Packet & Critical Maps Downloaded!")
    }
}

impl Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl From<&NavigationError> for Alert {
    fn from(value: &NavigationError) -> Self {
        match value {
            NavigationError::PermissionDenied => Alert::error("Permission denied"),
            NavigationError::NoOfflineRoute(_) => Alert::new(
                "Offline",
                "No saved route to this location. Please go online to cache it.",
            ),
            NavigationError::NoRouteFound(_) => Alert::error("No route found."),
            NavigationError::RouteFetchFailed(_) => Alert::error("Could not fetch route."),
            NavigationError::LocationUnavailable(_) => {
                Alert::error("Could not determine your location.")
            }
            NavigationError::PersistenceWriteFailed(_) => {
                Alert::error("Could not save the route for offline use.")
            }
            NavigationError::NoShelterSelected => Alert::error("Select a shelter first."),
        }
    }
}

impl From<&EmergencyError> for Alert {
    fn from(value: &EmergencyError) -> Self {
        match value {
            EmergencyError::PermissionDenied(what) if what == "camera" => Alert::new(
                "Permission Required",
                "Camera access is needed to add evidence.",
            ),
            EmergencyError::PermissionDenied(_) => Alert::error("Permission denied"),
            EmergencyError::MissingDetails => Alert::new(
                "Missing Details",
                "Please describe the situation briefly.",
            ),
            EmergencyError::NotAuthenticated => {
                Alert::error("You must be logged in to submit a report.")
            }
            EmergencyError::LocationUnavailable(msg) | EmergencyError::CaptureFailed(msg) => {
                Alert::error(msg.clone())
            }
            EmergencyError::SubmissionFailed(e) => Alert::error(e.to_string()),
        }
    }
}

impl From<&DirectoryError> for Alert {
    fn from(value: &DirectoryError) -> Self {
        Alert::error(value.to_string())
    }
}

impl From<&PacketError> for Alert {
    fn from(value: &PacketError) -> Self {
        match value {
            PacketError::Offline => Alert::new(
                "Offline",
                "Connect to the internet to download the safety packet.",
            ),
            PacketError::Directory(e) => Alert::from(e),
            PacketError::Storage(e) => Alert::error(e.to_string()),
        }
    }
}

/// any error from the SOS path is reported under its own title.
pub fn sos_failure(error: &EmergencyError) -> Alert {
    match error {
        EmergencyError::PermissionDenied(_) => Alert::error("Permission denied"),
        other => Alert::new("SOS Error", other.to_string()),
    }
}
