use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use itertools::Itertools;
use refuge_core::{
    capture::PhotoFile,
    location::StaticLocation,
    model::{Connectivity, Coordinate, IncidentCategory, ShelterId, StaticIdentity},
};
use serde::{Deserialize, Serialize};
use uom::si::length::kilometer;

use super::Services;
use crate::{
    app::{Alert, AppScreen, Dispatcher, ShortcutItem, Shortcuts, SOS_SHORTCUT_ID},
    config::RefugeConfig,
    directory::{find, nearest},
    emergency::{IncidentDraft, IncidentReporter, SosBroadcaster},
    error::RefugeError,
    navigation::Navigator,
};

/// Offline-aware shelter finder: navigate to shelters, broadcast SOS and
/// report incidents
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RefugeApp {
    /// TOML configuration file. values may be overridden with REFUGE_*
    /// environment variables.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// behave as if the device had no network connection.
    #[arg(long, global = true)]
    pub offline: bool,

    /// email of the signed-in user. omit to act anonymously.
    #[arg(long, global = true)]
    pub user_email: Option<String>,

    #[command(subcommand)]
    pub op: RefugeOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum RefugeOperation {
    /// refresh and list the shelter directory
    Shelters {
        /// list shelters by distance from this position (format: lat,lon)
        #[arg(short, long, allow_hyphen_values(true))]
        near: Option<Coordinate>,

        /// maximum number of shelters to list
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// get directions to a shelter
    Route {
        #[arg(short, long)]
        shelter_id: String,

        /// current position (format: lat,lon)
        #[arg(short, long, allow_hyphen_values(true))]
        position: Coordinate,
    },
    /// broadcast an SOS with the current position
    Sos {
        /// current position (format: lat,lon)
        #[arg(short, long, allow_hyphen_values(true))]
        position: Coordinate,

        /// simulate a refused location permission
        #[arg(long)]
        deny_location: bool,
    },
    /// submit an incident report. requires --user-email
    Report {
        #[arg(long, default_value = "general")]
        category: IncidentCategory,

        #[arg(short, long)]
        details: String,

        /// current position (format: lat,lon)
        #[arg(short, long, allow_hyphen_values(true))]
        position: Coordinate,

        /// photo to attach as evidence
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// download the shelter list and safety manual for offline use
    Packet,
    /// print the safety manual
    Manual,
}

impl RefugeApp {
    pub fn run(&self) -> Result<(), RefugeError> {
        let config = RefugeConfig::load(self.config.as_deref())?;
        let connectivity = Connectivity::from(!self.offline);
        let services = Services::new(config, connectivity)?;
        let identity = StaticIdentity::from(self.user_email.clone());
        self.op.run(&services, identity)
    }
}

impl RefugeOperation {
    pub fn run(&self, services: &Services, identity: StaticIdentity) -> Result<(), RefugeError> {
        match self {
            RefugeOperation::Shelters { near, limit } => {
                let shelters = services.directory()?.refresh(services.connectivity())?;
                if shelters.is_empty() {
                    println!("no shelters available ({})", services.connectivity());
                    return Ok(());
                }
                match near {
                    Some(origin) => {
                        for (shelter, distance) in nearest(&shelters, origin, *limit) {
                            println!("{shelter} {:.2} km", distance.get::<kilometer>());
                        }
                    }
                    None => {
                        shelters
                            .iter()
                            .take(*limit)
                            .for_each(|shelter| println!("{shelter}"));
                    }
                }
                Ok(())
            }
            RefugeOperation::Route {
                shelter_id,
                position,
            } => {
                let shelters = services.directory()?.refresh(services.connectivity())?;
                let shelter = find(&shelters, &ShelterId::new(shelter_id.as_str()))
                    .cloned()
                    .ok_or_else(|| {
                        RefugeError::InvalidUserInput(format!("unknown shelter '{shelter_id}'"))
                    })?;
                let mut navigator = Navigator::new(
                    Arc::new(StaticLocation::granted(*position)),
                    services.resolver()?,
                );
                navigator.select(shelter);
                let route = navigator.navigate(services.connectivity())?.clone();
                if let Some(banner) = navigator.session().banner() {
                    println!("{banner}");
                }
                let steps = route
                    .steps
                    .iter()
                    .map(|step| format!("  {} ({})", step.banner(), step.distance_label()))
                    .join("\n");
                println!("{steps}");
                println!(
                    "{} points, {:.2} km",
                    route.coordinates.len(),
                    route.total_distance().get::<kilometer>()
                );
                Ok(())
            }
            RefugeOperation::Sos {
                position,
                deny_location,
            } => {
                let location = if *deny_location {
                    StaticLocation::denied()
                } else {
                    StaticLocation::granted(*position)
                };
                let sos = SosBroadcaster::new(
                    Arc::new(location),
                    Arc::new(identity),
                    services.backend()?,
                );
                let mut dispatcher = Dispatcher::with_screen(sos, AppScreen::Login);
                let shortcuts = Shortcuts::new();
                shortcuts.set_items(vec![ShortcutItem::sos()]);
                let subscription = shortcuts.subscribe();
                shortcuts.trigger(SOS_SHORTCUT_ID);
                let alerts = dispatcher.run_shortcuts(&subscription);
                log::debug!("screen after SOS: {:?}", dispatcher.screen());
                expect_success(alerts, Alert::sos_sent())
            }
            RefugeOperation::Report {
                category,
                details,
                position,
                photo,
            } => {
                let reporter = IncidentReporter::new(
                    Arc::new(StaticLocation::granted(*position)),
                    Arc::new(identity),
                    services.backend()?,
                );
                let mut draft = IncidentDraft::new(*category, details.as_str());
                if let Some(path) = photo {
                    reporter.attach_photo(&mut draft, &PhotoFile::new(path))?;
                }
                reporter.submit(&draft)?;
                println!("{}", Alert::report_submitted());
                Ok(())
            }
            RefugeOperation::Packet => {
                let summary = services.packet()?.download(services.connectivity())?;
                println!("{}", Alert::packet_downloaded());
                println!(
                    "{} shelters, {} with cached routes, downloaded at {}",
                    summary.shelter_count, summary.routes_cached, summary.downloaded_at
                );
                Ok(())
            }
            RefugeOperation::Manual => {
                let manual = services.manual().load();
                println!("Emergency contacts");
                for contact in manual.contacts.iter() {
                    println!("  {}: {}", contact.name, contact.number);
                }
                for guide in manual.guides.iter() {
                    println!("\n{}\n{}", guide.title, guide.content);
                }
                Ok(())
            }
        }
    }
}

/// prints `expected` when it is the only alert raised, otherwise fails with
/// the first alert that is not.
fn expect_success(alerts: Vec<Alert>, expected: Alert) -> Result<(), RefugeError> {
    match alerts.into_iter().find(|a| a != &expected) {
        Some(failure) => Err(RefugeError::Alerted(failure)),
        None => {
            println!("{expected}");
            Ok(())
        }
    }
}
