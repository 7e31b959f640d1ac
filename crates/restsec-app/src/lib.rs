//! # restsec-app - Simulator State for the REST API Security Guide
//!
//! Each interactive widget is a plain state machine. Messages go in through
//! `update`, and the returned [`sim::UpdateResult`] tells the driver whether
//! to start or stop that widget's ticker. The website and the headless
//! runner are both drivers; neither holds simulation logic of its own.
//!
//! ## Public API
//!
//! - [`sim`]: rate limiter, validation scanner, middleware stepper,
//!   authentication sequence player, authorization decisions
//! - [`clipboard`]: copy with fallback and the acknowledgment window
//! - [`config`]: timing settings, optionally loaded from `restsec.toml`

pub mod clipboard;
pub mod config;
pub mod sim;

pub use clipboard::{
    copy_with_fallback, finish_copy, require_api, AckTicket, ClipboardBackend, CopyAck, CopyPath,
};
pub use config::{load_settings, SimSettings};
pub use sim::authz::{AuthzMessage, AuthzSimulator, Decision, Verdict};
pub use sim::rate_limit::{GuardStatus, LaneState, Mode, Packet, RateLimitMessage, RateLimiter, Totals};
pub use sim::scanner::{ScannerMessage, ValidationScanner};
pub use sim::sequence::{HopGeometry, SequenceMessage, SequencePlayer};
pub use sim::stepper::{MiddlewareStepper, StageStatus, StepperMessage};
pub use sim::{RunId, UpdateAction, UpdateResult};
