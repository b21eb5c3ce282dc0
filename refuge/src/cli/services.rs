use std::sync::Arc;

use refuge_backend::RestBackend;
use refuge_core::{
    http::{HttpClient, ReqwestClient},
    model::{Connectivity, IncidentReport, Shelter},
    remote::{IncidentStore, RemoteStoreError, ShelterSource},
    storage::{FileKeyValueStore, KeyValueStore},
};
use refuge_osrm::OsrmRouter;

use crate::{
    config::RefugeConfig,
    directory::ShelterDirectory,
    error::RefugeError,
    manual::ManualLibrary,
    navigation::{RouteCache, RouteResolver},
    packet::SafetyPacket,
};

/// wires the configured collaborators together for one command.
pub struct Services {
    config: RefugeConfig,
    connectivity: Connectivity,
    store: Arc<dyn KeyValueStore>,
}

impl Services {
    pub fn new(config: RefugeConfig, connectivity: Connectivity) -> Result<Self, RefugeError> {
        let store = FileKeyValueStore::new(&config.storage.directory)?;
        log::debug!("using storage directory {}", store.directory().display());
        Ok(Self {
            config,
            connectivity,
            store: Arc::new(store),
        })
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    fn http(&self) -> Result<Arc<dyn HttpClient>, RefugeError> {
        Ok(Arc::new(ReqwestClient::new()?))
    }

    /// the hosted backend. while offline with no backend configured, a
    /// disconnected stand-in is returned so cached data stays reachable.
    pub fn backend(&self) -> Result<Arc<Backend>, RefugeError> {
        if self.connectivity.is_offline() && self.config.backend.url.is_none() {
            return Ok(Arc::new(Backend::Disconnected));
        }
        let backend = RestBackend::new(self.config.backend.clone(), self.http()?)?;
        Ok(Arc::new(Backend::Rest(backend)))
    }

    pub fn directory(&self) -> Result<ShelterDirectory, RefugeError> {
        Ok(ShelterDirectory::new(self.backend()?, self.store()))
    }

    pub fn route_cache(&self) -> RouteCache {
        RouteCache::new(self.store())
    }

    pub fn resolver(&self) -> Result<RouteResolver, RefugeError> {
        let router = OsrmRouter::new(self.config.routing.clone(), self.http()?)?;
        Ok(RouteResolver::new(Arc::new(router), self.route_cache()))
    }

    pub fn manual(&self) -> ManualLibrary {
        ManualLibrary::new(self.store())
    }

    pub fn packet(&self) -> Result<SafetyPacket, RefugeError> {
        Ok(SafetyPacket::new(
            self.directory()?,
            self.manual(),
            self.route_cache(),
            self.store(),
        ))
    }
}

pub enum Backend {
    Rest(RestBackend),
    Disconnected,
}

fn disconnected() -> RemoteStoreError {
    RemoteStoreError::RequestFailed(String::from("no backend configured"))
}

impl ShelterSource for Backend {
    fn fetch_shelters(&self) -> Result<Vec<Shelter>, RemoteStoreError> {
        match self {
            Backend::Rest(rest) => rest.fetch_shelters(),
            Backend::Disconnected => Err(disconnected()),
        }
    }
}

impl IncidentStore for Backend {
    fn submit_report(&self, report: &IncidentReport) -> Result<(), RemoteStoreError> {
        match self {
            Backend::Rest(rest) => rest.submit_report(report),
            Backend::Disconnected => Err(disconnected()),
        }
    }
}
