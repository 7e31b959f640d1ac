//! Browser driver for the simulator update results
//!
//! Each simulator component owns one [`Ticker`]. It starts and stops a
//! repeating interval exactly as the state machine asks and clears it when
//! the component unmounts.

use std::time::Duration;

use leptos::prelude::*;
use restsec_app::{RunId, UpdateAction, UpdateResult};

#[derive(Clone, Copy)]
pub struct Ticker {
    handle: StoredValue<Option<IntervalHandle>>,
}

impl Ticker {
    /// Create a ticker scoped to the current component.
    pub fn new() -> Self {
        let ticker = Self {
            handle: StoredValue::new(None),
        };
        on_cleanup(move || ticker.stop());
        ticker
    }

    /// Perform the driver side of `result`. `on_tick` feeds one tick to the
    /// state machine and returns what it asked for.
    pub fn apply<F>(self, result: UpdateResult, on_tick: F)
    where
        F: Fn(RunId) -> UpdateResult + 'static,
    {
        match result.action {
            Some(UpdateAction::StartTicker { run, every_ms }) => {
                self.stop();
                let interval = set_interval_with_handle(
                    move || {
                        if let Some(UpdateAction::StopTicker) = on_tick(run).action {
                            self.stop();
                        }
                    },
                    Duration::from_millis(every_ms),
                );
                match interval {
                    Ok(handle) => {
                        self.handle.try_set_value(Some(handle));
                    }
                    Err(e) => log::warn!("Failed to start ticker for {run}: {e:?}"),
                }
            }
            Some(UpdateAction::StopTicker) => self.stop(),
            None => {}
        }
    }

    pub fn stop(self) {
        self.handle.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

/// Milliseconds on the page's monotonic clock.
pub fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() as u64)
        .unwrap_or(0)
}
