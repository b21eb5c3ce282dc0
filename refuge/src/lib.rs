pub mod app;
pub mod cli;
pub mod config;
pub mod directory;
pub mod emergency;
pub mod error;
pub mod manual;
pub mod navigation;
pub mod packet;

#[cfg(test)]
pub(crate) mod test_ops;
