//! Currency preference service
//!
//! Holds the active currency and keeps it persisted through a debounced
//! write: a burst of changes persists only the final value, and a window
//! that closes with no net change since the last persisted value writes
//! nothing. Changes applied before the initial load completes are kept
//! in memory but never persisted (the load gate), so loading can never
//! race a save.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, error};

use super::debounce::Debouncer;
use crate::error::LedgerResult;
use crate::models::{Currency, CurrencyInfo};
use crate::storage::PreferenceStore;

/// Delay before a currency change is written out
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Manages the active currency and its persistence
pub struct PreferenceService<S: PreferenceStore + 'static> {
    store: Arc<S>,
    profile: String,
    current: CurrencyInfo,
    loaded: bool,
    last_persisted: Arc<Mutex<Option<CurrencyInfo>>>,
    debouncer: Debouncer<CurrencyInfo>,
}

impl<S: PreferenceStore + 'static> PreferenceService<S> {
    /// Create a service with the standard debounce delay
    pub fn new(store: Arc<S>, profile: impl Into<String>) -> Self {
        Self::with_debounce(store, profile, SAVE_DEBOUNCE)
    }

    /// Create a service with a custom debounce delay (shorter in tests)
    pub fn with_debounce(store: Arc<S>, profile: impl Into<String>, delay: Duration) -> Self {
        let profile = profile.into();
        let last_persisted = Arc::new(Mutex::new(None));
        let debouncer = spawn_saver(
            Arc::clone(&store),
            profile.clone(),
            Arc::clone(&last_persisted),
            delay,
        );

        Self {
            store,
            profile,
            current: CurrencyInfo::default(),
            loaded: false,
            last_persisted,
            debouncer,
        }
    }

    /// Load the stored preference, defaulting to USD when none exists
    ///
    /// Completing the load opens the gate: only changes made after this
    /// point are persisted.
    pub fn load(&mut self) -> LedgerResult<()> {
        let stored = self.store.load_preference(&self.profile)?;
        if let Some(info) = stored {
            self.current = info;
        }
        *self
            .last_persisted
            .lock()
            .expect("preference mutex poisoned") = stored;
        self.loaded = true;
        Ok(())
    }

    /// The active currency policy
    pub fn current(&self) -> CurrencyInfo {
        self.current
    }

    /// Whether the initial load has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replace the active currency wholesale
    ///
    /// Schedules a debounced persistence write unless the initial load
    /// has not completed yet.
    pub fn set_currency(&mut self, currency: Currency) {
        let info = currency.info();
        self.current = info;

        if !self.loaded {
            debug!("currency changed before initial load, not persisting");
            return;
        }

        self.debouncer.submit(info);
    }

    /// Persist any pending change now instead of waiting out the window
    pub fn flush(&mut self) {
        let replacement = spawn_saver(
            Arc::clone(&self.store),
            self.profile.clone(),
            Arc::clone(&self.last_persisted),
            SAVE_DEBOUNCE,
        );
        // dropping the old debouncer joins its worker, flushing the
        // pending value through the sink
        self.debouncer = replacement;
    }
}

fn spawn_saver<S: PreferenceStore + 'static>(
    store: Arc<S>,
    profile: String,
    last_persisted: Arc<Mutex<Option<CurrencyInfo>>>,
    delay: Duration,
) -> Debouncer<CurrencyInfo> {
    Debouncer::new(delay, move |info: CurrencyInfo| {
        let mut last = last_persisted.lock().expect("preference mutex poisoned");
        if *last == Some(info) {
            debug!("currency unchanged since last save, skipping write");
            return;
        }
        match store.save_preference(info, &profile) {
            Ok(()) => *last = Some(info),
            Err(e) => error!("failed to save currency preference: {}", e),
        }
    })
}
