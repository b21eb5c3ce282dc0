//! client for the hosted data backend, which exposes the `shelters` and
//! `reports` tables over a PostgREST-style HTTP interface.
mod client;
mod config;
mod error;

pub use client::RestBackend;
pub use config::BackendConfig;
pub use error::BackendError;
