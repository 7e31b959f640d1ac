//! # restsec-core - Content and Scenario Tables
//!
//! Foundation crate for the REST API security guide. Holds the immutable
//! display content, the scripted scenario tables every simulator reads,
//! the permission matrix, the code-sample tokenizer and the shared error type.
//!
//! Nothing here is mutable at runtime: simulators in `restsec-app` own all
//! state and only index into these tables.
//!
//! ## Public API
//!
//! ### Content (`content`, `samples`)
//! - [`content::SITE`] - Every text block of the page, in page order
//! - [`samples::CODE_TABS`] - ASP.NET Core sample files per topic
//!
//! ### Scenario Tables
//! - [`validation::VALIDATION_CASES`] - Payloads and rule checks for the scanner
//! - [`sequence::AUTH_SCENARIOS`] - Actor hops for the authentication player
//! - [`pipeline::STAGES`] - The six middleware stages
//! - [`traffic::LANES`] - Simulated clients for the rate limiter
//! - [`PermissionMatrix`] - Role × endpoint grants, checked for totality
//!
//! ### Text (`text`, `highlight`)
//! - [`text::clean`] - Strip `[cite: N]` markers
//! - [`highlight::highlight_line`] - Tokenize one C# or JSON line
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use restsec_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod highlight;
#[cfg(feature = "logging")]
pub mod logging;
pub mod permissions;
pub mod pipeline;
pub mod ring_buffer;
pub mod samples;
pub mod scenario;
pub mod sequence;
pub mod tables;
pub mod text;
pub mod tone;
pub mod traffic;
pub mod validation;

/// Prelude for common imports used throughout all restsec crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use highlight::{highlight_line, Lang, Token, TokenKind};
pub use permissions::{Endpoint, PermissionMatrix, Role};
pub use pipeline::{Stage, STAGES};
pub use ring_buffer::RingBuffer;
pub use scenario::ScenarioCase;
pub use sequence::{Actor, Hop, AUTH_SCENARIOS};
pub use tables::{check_all, TableReport};
pub use tone::{Glyph, Tone};
pub use traffic::{Lane, LANES};
pub use validation::{Outcome, RuleCheck, ValidationCase, VALIDATION_CASES};
