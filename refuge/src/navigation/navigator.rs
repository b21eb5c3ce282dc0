use std::sync::Arc;

use refuge_core::{
    location::LocationProvider,
    model::{Connectivity, Route, Shelter},
};

use super::{NavigationError, NavigationSession, RouteResolver};

/// runs the "get directions" flow: locate the device, resolve a route to the
/// selected shelter and hand it to the session.
pub struct Navigator {
    location: Arc<dyn LocationProvider>,
    resolver: RouteResolver,
    session: NavigationSession,
}

impl Navigator {
    pub fn new(location: Arc<dyn LocationProvider>, resolver: RouteResolver) -> Self {
        Self {
            location,
            resolver,
            session: NavigationSession::new(),
        }
    }

    pub fn session(&self) -> &NavigationSession {
        &self.session
    }

    pub fn resolver(&self) -> &RouteResolver {
        &self.resolver
    }

    pub fn select(&mut self, shelter: Shelter) {
        self.session.select(shelter);
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// navigates to the selected shelter.
    pub fn navigate(&mut self, connectivity: Connectivity) -> Result<&Route, NavigationError> {
        let ticket = self.session.begin()?;
        let destination = self
            .session
            .selected()
            .cloned()
            .ok_or(NavigationError::NoShelterSelected)?;
        let result = self
            .location
            .current_position()
            .map_err(NavigationError::from)
            .and_then(|origin| {
                self.resolver
                    .resolve_route(&origin, &destination, connectivity)
            });
        self.session.complete(&ticket, result)?;
        self.session
            .route()
            .ok_or(NavigationError::NoShelterSelected)
    }
}
