mod error;
mod navigator;
mod route_cache;
mod route_resolver;
mod session;

pub use error::NavigationError;
pub use navigator::Navigator;
pub use route_cache::RouteCache;
pub use route_resolver::RouteResolver;
pub use session::{NavigationSession, RouteTicket};
