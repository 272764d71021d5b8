//! Application Context
//!
//! The grocery session and configuration, provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::LocalStorageStore;
use crate::config::AppConfig;
use crate::controller::ListController;
use crate::storage::{KeyValueStore, MemoryStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The single list controller for this page session
    pub session: RwSignal<ListController>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(session: RwSignal<ListController>, config: AppConfig) -> Self {
        Self {
            session,
            config: StoredValue::new(config),
        }
    }

    /// Run a cart mutation; subscribers are only notified when it changed
    pub fn mutate(&self, f: impl FnOnce(&mut ListController) -> bool) {
        let mut changed = false;
        self.session.maybe_update(|s| {
            changed = f(s);
            changed
        });
        if changed {
            log::debug!("[context] Cart now holds {} items", self.session.with_untracked(|s| s.total_in_cart()));
        }
    }

    /// Record the current cart as purchased
    pub fn checkout(&self) -> usize {
        let store = open_store();
        let mut recorded = 0;
        self.session.update(|s| recorded = s.checkout(store.as_ref()));
        recorded
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Browser localStorage, or a throwaway in-memory store when it is blocked
pub fn open_store() -> Box<dyn KeyValueStore> {
    match LocalStorageStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("[storage] Falling back to in-memory storage: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}
