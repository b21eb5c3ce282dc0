mod alert;
mod dispatcher;
mod shortcuts;
mod state;

pub use alert::{sos_failure, Alert};
pub use dispatcher::{Action, Dispatcher};
pub use shortcuts::{QuickAction, ShortcutItem, Shortcuts, Subscription, SOS_SHORTCUT_ID};
pub use state::{transition, AppEvent, AppScreen, Tab};
