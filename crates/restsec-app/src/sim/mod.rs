//! Simulator state machines - TEA update functions for each widget
//!
//! Organized into submodules:
//! - `reveal`: Shared step-by-step reveal run
//! - `scanner`: Validation scanner
//! - `stepper`: Middleware chain stepper
//! - `sequence`: Authentication sequence player
//! - `rate_limit`: Packet flood and rate limiter
//! - `authz`: Authorization decision lookup
//!
//! Timers never touch state directly. A driver (website component or the
//! headless runner) owns one ticker per widget, starts and stops it as the
//! returned [`UpdateAction`] says, and feeds `Tick { run }` messages back.

pub mod authz;
pub mod rate_limit;
pub mod reveal;
pub mod scanner;
pub mod sequence;
pub mod stepper;

#[cfg(test)]
mod tests;

use serde::Serialize;

/// Identifies one timed run of a widget. Ticks carrying an older id are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RunId(u64);

impl RunId {
    /// The id that follows this one.
    pub fn next(self) -> RunId {
        RunId(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// Actions the driver should perform after update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Start a repeating ticker delivering `Tick { run }` every `every_ms`
    StartTicker { run: RunId, every_ms: u64 },

    /// Stop the widget's ticker, if any
    StopTicker,
}

/// Result of processing a message
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional action for the driver to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
        }
    }

    pub fn start(run: RunId, every_ms: u64) -> Self {
        Self::action(UpdateAction::StartTicker { run, every_ms })
    }

    pub fn stop() -> Self {
        Self::action(UpdateAction::StopTicker)
    }
}
