//! Error types shared by every restsec crate

use thiserror::Error;

use crate::permissions::{Endpoint, Role};

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Table Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Permission matrix has no entry for {role} on {endpoint}")]
    MatrixIncomplete { role: Role, endpoint: Endpoint },

    #[error("Permission matrix declares {role} on {endpoint} more than once")]
    MatrixDuplicate { role: Role, endpoint: Endpoint },

    #[error("Unknown {kind}: {id}")]
    UnknownScenario { kind: &'static str, id: String },

    #[error("Inconsistent table: {message}")]
    Table { message: String },

    // ─────────────────────────────────────────────────────────────
    // Clipboard Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Clipboard error: {message}")]
    Clipboard { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn unknown(kind: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownScenario {
            kind,
            id: id.into(),
        }
    }

    pub fn table(message: impl Into<String>) -> Self {
        Self::Table {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Clipboard { .. } | Error::UnknownScenario { .. } | Error::Config { .. }
        )
    }

    /// Check if this error should stop the program
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MatrixIncomplete { .. }
                | Error::MatrixDuplicate { .. }
                | Error::Table { .. }
                | Error::ConfigInvalid { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unknown("validation case", "csrf");
        assert_eq!(err.to_string(), "Unknown validation case: csrf");

        let err = Error::MatrixIncomplete {
            role: Role::Guest,
            endpoint: Endpoint::Billing,
        };
        assert_eq!(
            err.to_string(),
            "Permission matrix has no entry for Guest on /api/billing"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::MatrixDuplicate {
            role: Role::Admin,
            endpoint: Endpoint::Users,
        }
        .is_fatal());
        assert!(Error::table("flow arrows").is_fatal());
        assert!(!Error::clipboard("denied").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::clipboard("denied").is_recoverable());
        assert!(Error::unknown("role", "root").is_recoverable());
        assert!(!Error::config_invalid("tick_ms").is_recoverable());
    }

    #[test]
    fn test_context_keeps_error_variant() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "nope",
        ));
        let err = res.context("reading settings").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
