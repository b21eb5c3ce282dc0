use refuge_core::{capture::CaptureError, location::LocationError, remote::RemoteStoreError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EmergencyError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("current location unavailable: {0}")]
    LocationUnavailable(String),
    #[error("report details are required")]
    MissingDetails,
    #[error("you must be logged in to submit a report")]
    NotAuthenticated,
    #[error("failed to capture image: {0}")]
    CaptureFailed(String),
    #[error("submission failed: {0}")]
    SubmissionFailed(#[from] RemoteStoreError),
}

impl From<LocationError> for EmergencyError {
    fn from(value: LocationError) -> Self {
        match value {
            LocationError::PermissionDenied => {
                EmergencyError::PermissionDenied(String::from("location"))
            }
            LocationError::Unavailable(msg) => EmergencyError::LocationUnavailable(msg),
        }
    }
}

impl From<CaptureError> for EmergencyError {
    fn from(value: CaptureError) -> Self {
        match value {
            CaptureError::PermissionDenied => {
                EmergencyError::PermissionDenied(String::from("camera"))
            }
            CaptureError::CaptureFailed(msg) => EmergencyError::CaptureFailed(msg),
        }
    }
}
