use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("failure decoding value stored at '{key}': {message}")]
    DecodeError { key: String, message: String },
    #[error("failure encoding value for '{key}': {message}")]
    EncodeError { key: String, message: String },
    #[error("{0}")]
    InternalError(String),
}
