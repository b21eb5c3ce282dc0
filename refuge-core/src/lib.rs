pub mod capture;
pub mod http;
pub mod location;
pub mod model;
pub mod remote;
pub mod routing;
pub mod storage;
