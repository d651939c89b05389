//! Cancellable deferred writes
//!
//! Coalesces rapid repeated change events into a single delayed action
//! reflecting only the latest value. Each submission restarts the delay
//! window; when a window closes quietly, the sink receives the last
//! value submitted. Dropping the debouncer flushes any pending value
//! before returning.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Debounces values onto a sink callback on a worker thread
pub struct Debouncer<T: Send + 'static> {
    tx: Option<mpsc::Sender<T>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn a debouncer invoking `sink` with the latest value once no
    /// newer value has arrived for `delay`
    pub fn new<F>(delay: Duration, mut sink: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<T>();

        let handle = thread::spawn(move || {
            while let Ok(first) = rx.recv() {
                let mut latest = first;
                loop {
                    match rx.recv_timeout(delay) {
                        Ok(newer) => latest = newer,
                        Err(RecvTimeoutError::Timeout) => {
                            sink(latest);
                            break;
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            // flush the pending value on shutdown
                            sink(latest);
                            return;
                        }
                    }
                }
            }
        });

        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    /// Submit a value, cancelling any previously scheduled delivery
    pub fn submit(&self, value: T) {
        if let Some(tx) = &self.tx {
            // the worker only exits after the channel closes
            let _ = tx.send(value);
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // closing the channel wakes the worker, which flushes and exits
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
