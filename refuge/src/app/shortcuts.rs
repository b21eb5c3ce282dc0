//! home screen quick actions. the platform registers the advertised items
//! and reports presses; listeners receive them through a [`Subscription`].
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        mpsc, Arc, Mutex,
    },
};

pub const SOS_SHORTCUT_ID: &str = "sos_trigger";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
}

impl ShortcutItem {
    pub fn sos() -> Self {
        Self {
            id: String::from(SOS_SHORTCUT_ID),
            title: String::from("🚨 SEND SOS"),
            subtitle: String::from("Emergency Broadcast"),
            icon: String::from("compose"),
        }
    }
}

/// a pressed quick action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub id: String,
}

impl QuickAction {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn is_sos(&self) -> bool {
        self.id == SOS_SHORTCUT_ID
    }
}

type Listeners = Arc<Mutex<HashMap<u64, mpsc::Sender<QuickAction>>>>;

/// the quick action event source.
#[derive(Clone, Default)]
pub struct Shortcuts {
    items: Arc<Mutex<Vec<ShortcutItem>>>,
    listeners: Listeners,
    next_id: Arc<AtomicU64>,
}

impl Shortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    /// replaces the advertised items.
    pub fn set_items(&self, items: Vec<ShortcutItem>) {
        match self.items.lock() {
            Ok(mut guard) => *guard = items,
            Err(e) => log::error!("shortcut items lock poisoned: {e}"),
        }
    }

    pub fn items(&self) -> Vec<ShortcutItem> {
        self.items.lock().map(|g| g.clone()).unwrap_or_default()
    }

    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        match self.listeners.lock() {
            Ok(mut guard) => {
                guard.insert(id, tx);
            }
            Err(e) => log::error!("shortcut listeners lock poisoned: {e}"),
        }
        Subscription {
            id,
            receiver: rx,
            listeners: self.listeners.clone(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|g| g.len()).unwrap_or_default()
    }

    /// delivers a press of `id` to every live subscription, returning how many
    /// received it. presses of unknown items are dropped.
    pub fn trigger(&self, id: &str) -> usize {
        if !self.items().iter().any(|item| item.id == id) {
            log::warn!("ignoring press of unregistered shortcut '{id}'");
            return 0;
        }
        let Ok(guard) = self.listeners.lock() else {
            log::error!("shortcut listeners lock poisoned");
            return 0;
        };
        guard
            .values()
            .filter(|tx| tx.send(QuickAction::new(id)).is_ok())
            .count()
    }
}

/// a live listener. dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    receiver: mpsc::Receiver<QuickAction>,
    listeners: Listeners,
}

impl Subscription {
    pub fn try_next(&self) -> Option<QuickAction> {
        self.receiver.try_recv().ok()
    }

    /// every press received so far.
    pub fn drain(&self) -> Vec<QuickAction> {
        self.receiver.try_iter().collect()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.listeners.lock() {
            guard.remove(&self.id);
        }
    }
}
