use refuge_core::{http::HttpError, remote::RemoteStoreError};

#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("invalid backend configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("failed to deserialize '{table}' rows: {message}")]
    DeserializeError { table: String, message: String },
}

impl From<BackendError> for RemoteStoreError {
    fn from(value: BackendError) -> Self {
        match value {
            BackendError::Http(HttpError::StatusError { status, body, .. }) => {
                RemoteStoreError::Rejected(format!("status {status}: {body}"))
            }
            BackendError::DeserializeError { .. } => {
                RemoteStoreError::InvalidResponse(value.to_string())
            }
            other => RemoteStoreError::RequestFailed(other.to_string()),
        }
    }
}
