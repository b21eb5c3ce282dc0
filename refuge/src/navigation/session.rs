use refuge_core::model::{Route, RouteStep, Shelter, ShelterId};

use super::NavigationError;

/// identifies one route request made by a [`NavigationSession`]. a ticket goes
/// stale when the session is cancelled or a newer request begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTicket {
    generation: u64,
    destination: ShelterId,
}

impl RouteTicket {
    pub fn destination(&self) -> &ShelterId {
        &self.destination
    }
}

/// in-memory navigation state of the map: the selected shelter, whether a
/// route is being followed, and the route itself.
#[derive(Debug, Default)]
pub struct NavigationSession {
    selected: Option<Shelter>,
    route: Option<Route>,
    navigating: bool,
    generation: u64,
}

impl NavigationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, shelter: Shelter) {
        self.selected = Some(shelter);
    }

    /// drops the selection unless a route is being followed.
    pub fn clear_selection(&mut self) {
        if !self.navigating {
            self.selected = None;
        }
    }

    pub fn selected(&self) -> Option<&Shelter> {
        self.selected.as_ref()
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// starts navigating to the selected shelter. any earlier ticket goes stale.
    pub fn begin(&mut self) -> Result<RouteTicket, NavigationError> {
        let shelter = self
            .selected
            .as_ref()
            .ok_or(NavigationError::NoShelterSelected)?;
        self.generation += 1;
        self.navigating = true;
        self.route = None;
        Ok(RouteTicket {
            generation: self.generation,
            destination: shelter.id.clone(),
        })
    }

    /// applies the result of a route request.
    ///
    /// returns `Ok(true)` when the route was applied and `Ok(false)` when the
    /// ticket is stale and the result was discarded. a failed request on a
    /// current ticket stops navigation and returns the error.
    pub fn complete(
        &mut self,
        ticket: &RouteTicket,
        result: Result<Route, NavigationError>,
    ) -> Result<bool, NavigationError> {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding late route result for shelter '{}'",
                ticket.destination
            );
            return Ok(false);
        }
        match result {
            Ok(route) => {
                self.route = Some(route);
                Ok(true)
            }
            Err(e) => {
                self.navigating = false;
                self.route = None;
                Err(e)
            }
        }
    }

    /// stops navigating and clears the route and selection. an in-flight
    /// request is not interrupted, its result is discarded on completion.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.navigating = false;
        self.route = None;
        self.selected = None;
    }

    pub fn is_current(&self, ticket: &RouteTicket) -> bool {
        self.navigating && ticket.generation == self.generation
    }

    /// the upcoming maneuver while navigating.
    pub fn next_step(&self) -> Option<&RouteStep> {
        if !self.navigating {
            return None;
        }
        self.route.as_ref().and_then(Route::first_step)
    }

    /// banner text for the upcoming maneuver, e.g. "turn left onto MG Road".
    pub fn banner(&self) -> Option<String> {
        self.next_step().map(RouteStep::banner)
    }
}
