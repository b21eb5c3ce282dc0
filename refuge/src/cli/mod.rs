mod refuge_app;
mod services;

pub use refuge_app::{RefugeApp, RefugeOperation};
pub use services::{Backend, Services};
