use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Map,
    Manual,
    Report,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Map, Tab::Manual, Tab::Report, Tab::Profile];
}

impl Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tab::Home => "home",
            Tab::Map => "map",
            Tab::Manual => "manual",
            Tab::Report => "report",
            Tab::Profile => "profile",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}

/// which part of the app is showing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppScreen {
    #[default]
    Onboarding,
    Login,
    Dashboard(Tab),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    OnboardingFinished,
    LoggedIn,
    LoggedOut,
    TabSelected(Tab),
    SosSent { authenticated: bool },
}

impl AppScreen {
    pub fn is_dashboard(&self) -> bool {
        matches!(self, AppScreen::Dashboard(_))
    }

    pub fn tab(&self) -> Option<Tab> {
        match self {
            AppScreen::Dashboard(tab) => Some(*tab),
            _ => None,
        }
    }
}

/// the screen that follows `screen` once `event` happens. events that do not
/// apply to the current screen leave it unchanged.
pub fn transition(screen: AppScreen, event: AppEvent) -> AppScreen {
    use AppEvent as E;
    use AppScreen as S;
    match (screen, event) {
        (S::Onboarding, E::OnboardingFinished) => S::Login,
        (S::Login, E::LoggedIn) => S::Dashboard(Tab::Home),
        (S::Dashboard(_), E::LoggedOut) => S::Login,
        (S::Dashboard(_), E::TabSelected(tab)) => S::Dashboard(tab),
        // a signed-in sender is taken to the home tab from anywhere
        (_, E::SosSent { authenticated }) if authenticated => S::Dashboard(Tab::Home),
        (current, _) => current,
    }
}

#[cfg(test)]
mod test {
    use super::{transition, AppEvent, AppScreen, Tab};

    #[test]
    fn test_startup_flow() {
        let screen = AppScreen::default();
        assert_eq!(screen, AppScreen::Onboarding);
        let screen = transition(screen, AppEvent::OnboardingFinished);
        assert_eq!(screen, AppScreen::Login);
        let screen = transition(screen, AppEvent::LoggedIn);
        assert_eq!(screen, AppScreen::Dashboard(Tab::Home));
        let screen = transition(screen, AppEvent::TabSelected(Tab::Map));
        assert_eq!(screen.tab(), Some(Tab::Map));
        assert_eq!(transition(screen, AppEvent::LoggedOut), AppScreen::Login);
    }

    #[test]
    fn test_inapplicable_events_ignored() {
        assert_eq!(
            transition(AppScreen::Login, AppEvent::TabSelected(Tab::Report)),
            AppScreen::Login
        );
        assert_eq!(
            transition(AppScreen::Onboarding, AppEvent::LoggedIn),
            AppScreen::Onboarding
        );
        assert_eq!(
            transition(AppScreen::Login, AppEvent::OnboardingFinished),
            AppScreen::Login
        );
    }

    #[test]
    fn test_sos_moves_signed_in_user_home() {
        let sent = |authenticated| AppEvent::SosSent { authenticated };
        assert_eq!(
            transition(AppScreen::Login, sent(true)),
            AppScreen::Dashboard(Tab::Home)
        );
        assert_eq!(
            transition(AppScreen::Dashboard(Tab::Profile), sent(true)),
            AppScreen::Dashboard(Tab::Home)
        );
        assert_eq!(transition(AppScreen::Login, sent(false)), AppScreen::Login);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("Manual".parse::<Tab>(), Ok(Tab::Manual));
        assert!("settings".parse::<Tab>().is_err());
    }
}
