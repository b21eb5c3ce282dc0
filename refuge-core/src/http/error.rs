#[derive(thiserror::Error, Debug)]
pub enum HttpError {
    #[error("failure building http client: {0}")]
    BuildError(String),
    #[error("request to '{url}' failed: {message}")]
    TransportError { url: String, message: String },
    #[error("request to '{url}' returned status {status}: {body}")]
    StatusError {
        url: String,
        status: u16,
        body: String,
    },
    #[error("failure reading response body from '{url}': {message}")]
    BodyError { url: String, message: String },
}
