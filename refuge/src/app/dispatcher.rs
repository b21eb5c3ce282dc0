use super::{
    alert::{sos_failure, Alert},
    shortcuts::{QuickAction, Subscription},
    state::{transition, AppEvent, AppScreen, Tab},
};
use crate::emergency::SosBroadcaster;

/// something the user asked for, from a button or a quick action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SendSos,
    FinishOnboarding,
    LogIn,
    LogOut,
    SelectTab(Tab),
}

/// owns the current screen and runs actions against it. quick actions and
/// in-app buttons both end up in [`Dispatcher::dispatch`].
pub struct Dispatcher {
    screen: AppScreen,
    sos: SosBroadcaster,
}

impl Dispatcher {
    pub fn new(sos: SosBroadcaster) -> Self {
        Self {
            screen: AppScreen::default(),
            sos,
        }
    }

    pub fn with_screen(sos: SosBroadcaster, screen: AppScreen) -> Self {
        Self { screen, sos }
    }

    pub fn screen(&self) -> AppScreen {
        self.screen
    }

    /// runs `action`, returning the alert to show, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Alert> {
        let event = match action {
            Action::SendSos => return Some(self.send_sos()),
            Action::FinishOnboarding => AppEvent::OnboardingFinished,
            Action::LogIn => AppEvent::LoggedIn,
            Action::LogOut => AppEvent::LoggedOut,
            Action::SelectTab(tab) => AppEvent::TabSelected(tab),
        };
        self.apply(event);
        None
    }

    pub fn handle_shortcut(&mut self, action: &QuickAction) -> Option<Alert> {
        if action.is_sos() {
            self.dispatch(Action::SendSos)
        } else {
            log::debug!("no handler for quick action '{}'", action.id);
            None
        }
    }

    /// handles every quick action waiting on `subscription`.
    pub fn run_shortcuts(&mut self, subscription: &Subscription) -> Vec<Alert> {
        subscription
            .drain()
            .iter()
            .filter_map(|action| self.handle_shortcut(action))
            .collect()
    }

    fn send_sos(&mut self) -> Alert {
        match self.sos.send_sos() {
            Ok(receipt) => {
                self.apply(AppEvent::SosSent {
                    authenticated: receipt.authenticated,
                });
                Alert::sos_sent()
            }
            Err(e) => {
                log::error!("SOS failed: {e}");
                sos_failure(&e)
            }
        }
    }

    fn apply(&mut self, event: AppEvent) {
        let next = transition(self.screen, event);
        if next != self.screen {
            log::debug!("screen {:?} -> {:?}", self.screen, next);
        }
        self.screen = next;
    }
}
