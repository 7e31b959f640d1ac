//! REST Security Guide - headless driver
//!
//! Plays the guide's simulators on tokio timers and prints what the page
//! would show as NDJSON. The simulators themselves live in `restsec-app`.

// Module declarations
pub mod headless;

// Re-export main entry points
pub use headless::runner::{
    check_tables, evaluate_authz, play_authn, play_middleware, play_rate_limit, play_validation,
    print_content, print_sample, write_settings, RateLimitOptions, RunEnd,
};
pub use headless::{EventSink, HeadlessEvent, StdoutSink, Widget};
