use std::sync::Arc;

use refuge_core::{
    model::{Connectivity, Coordinate, Route, Shelter},
    routing::RouteProvider,
};

use super::{NavigationError, RouteCache};

/// produces a route to a shelter, from the routing service while online and
/// from the [`RouteCache`] while offline.
pub struct RouteResolver {
    provider: Arc<dyn RouteProvider>,
    cache: RouteCache,
}

impl RouteResolver {
    pub fn new(provider: Arc<dyn RouteProvider>, cache: RouteCache) -> Self {
        Self { provider, cache }
    }

    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }

    /// resolves a route from `origin` to `destination`.
    ///
    /// offline, the route cached for `destination.id` is returned unchanged,
    /// failing with [`NavigationError::NoOfflineRoute`] when none exists.
    /// online, the routing service is queried and a successful result is
    /// written through to the cache, replacing any previous entry, before it
    /// is returned. a failed cache write is logged and does not fail the call.
    pub fn resolve_route(
        &self,
        origin: &Coordinate,
        destination: &Shelter,
        connectivity: Connectivity,
    ) -> Result<Route, NavigationError> {
        if connectivity.is_offline() {
            return match self.cache.get(&destination.id) {
                Some(route) => {
                    log::debug!("using cached route to shelter '{}'", destination.id);
                    Ok(route)
                }
                None => {
                    log::debug!("no cached route to shelter '{}'", destination.id);
                    Err(NavigationError::NoOfflineRoute(destination.id.clone()))
                }
            };
        }

        log::info!(
            "fetching route to shelter '{}' from {origin}",
            destination.id
        );
        let route = self
            .provider
            .fetch_route(origin, &destination.coordinate())?;
        if route.is_empty() {
            return Err(NavigationError::NoRouteFound(format!(
                "route to shelter '{}' has no path",
                destination.id
            )));
        }
        if let Err(e) = self.cache.put(&destination.id, &route) {
            log::warn!("route to shelter '{}' not cached: {e}", destination.id);
        }
        Ok(route)
    }
}
