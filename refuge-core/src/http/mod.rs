//! HTTP client seam shared by the remote collaborators.
mod client;
mod error;

pub use client::{HttpClient, ReqwestClient};
pub use error::HttpError;
