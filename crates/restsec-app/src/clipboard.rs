//! Copy-to-clipboard with a legacy fallback, plus the "Copied!" acknowledgment

use restsec_core::{Error, Result};
use serde::Serialize;
use tracing::debug;

use crate::config::ClipboardSettings;

/// Which path ended up writing the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyPath {
    Clipboard,
    Legacy,
}

/// Platform clipboard access.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardBackend {
    /// Whether the asynchronous clipboard API exists at all
    fn has_api(&self) -> bool;

    /// Asynchronous clipboard API, resolved by the caller
    fn write_text(&self, text: &str) -> Result<()>;

    /// Hidden-textarea `execCommand("copy")` path
    fn legacy_copy(&self, text: &str) -> Result<()>;
}

/// Copy `text`, falling back to the legacy path when the primary one fails.
pub fn copy_with_fallback<B: ClipboardBackend + ?Sized>(backend: &B, text: &str) -> Result<CopyPath> {
    let primary = require_api(backend.has_api()).and_then(|()| backend.write_text(text));
    finish_copy(primary, || backend.legacy_copy(text))
}

/// Gate for the primary path. A missing API must never be called, so
/// callers check first and route the error into [`finish_copy`].
pub fn require_api(available: bool) -> Result<()> {
    if available {
        Ok(())
    } else {
        Err(Error::clipboard("Clipboard API unavailable"))
    }
}

/// Resolve a copy whose primary attempt has already completed.
///
/// Callers that await the clipboard promise themselves pass its outcome here.
pub fn finish_copy(
    primary: Result<()>,
    fallback: impl FnOnce() -> Result<()>,
) -> Result<CopyPath> {
    let primary_err = match primary {
        Ok(()) => return Ok(CopyPath::Clipboard),
        Err(e) => e,
    };
    debug!("Clipboard write failed, trying legacy copy: {}", primary_err);

    match fallback() {
        Ok(()) => Ok(CopyPath::Legacy),
        Err(e) => {
            debug!("Legacy copy failed: {}", e);
            Err(Error::clipboard(format!("{primary_err}; fallback: {e}")))
        }
    }
}

/// Proof of one acknowledgment; only the latest ticket can clear the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckTicket {
    pub generation: u64,
    pub expires_at: u64,
}

#[derive(Debug, Clone)]
pub struct CopyAck {
    hold_ms: u64,
    generation: u64,
    copied: bool,
    expires_at: u64,
}

impl CopyAck {
    pub fn new(settings: &ClipboardSettings) -> Self {
        Self {
            hold_ms: settings.ack_ms,
            generation: 0,
            copied: false,
            expires_at: 0,
        }
    }

    pub fn hold_ms(&self) -> u64 {
        self.hold_ms
    }

    /// Mark a successful copy at `now`. A copy inside the hold window
    /// restarts it.
    pub fn acknowledge(&mut self, now: u64) -> AckTicket {
        self.generation += 1;
        self.copied = true;
        self.expires_at = now + self.hold_ms;
        AckTicket {
            generation: self.generation,
            expires_at: self.expires_at,
        }
    }

    /// Clear the flag if `ticket` is still current. Returns whether it cleared.
    pub fn expire(&mut self, ticket: AckTicket) -> bool {
        if ticket.generation != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn is_copied_at(&self, now: u64) -> bool {
        self.copied && now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_primary_path_skips_fallback() {
        let mut backend = MockClipboardBackend::new();
        backend.expect_has_api().return_const(true);
        backend
            .expect_write_text()
            .with(eq("let x = 1;"))
            .times(1)
            .returning(|_| Ok(()));
        backend.expect_legacy_copy().never();

        let path = copy_with_fallback(&backend, "let x = 1;").unwrap();
        assert_eq!(path, CopyPath::Clipboard);
    }

    #[test]
    fn test_falls_back_to_legacy() {
        let mut backend = MockClipboardBackend::new();
        backend.expect_has_api().return_const(true);
        backend
            .expect_write_text()
            .returning(|_| Err(Error::clipboard("permission denied")));
        backend
            .expect_legacy_copy()
            .with(eq("code"))
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(copy_with_fallback(&backend, "code").unwrap(), CopyPath::Legacy);
    }

    #[test]
    fn test_both_paths_failing_is_a_clipboard_error() {
        let mut backend = MockClipboardBackend::new();
        backend.expect_has_api().return_const(true);
        backend
            .expect_write_text()
            .returning(|_| Err(Error::clipboard("denied")));
        backend
            .expect_legacy_copy()
            .returning(|_| Err(Error::clipboard("execCommand unsupported")));

        let err = copy_with_fallback(&backend, "code").unwrap_err();
        assert!(matches!(err, Error::Clipboard { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_missing_api_goes_straight_to_legacy() {
        let mut backend = MockClipboardBackend::new();
        backend.expect_has_api().return_const(false);
        backend.expect_write_text().never();
        backend
            .expect_legacy_copy()
            .with(eq("code"))
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(copy_with_fallback(&backend, "code").unwrap(), CopyPath::Legacy);
    }

    #[test]
    fn test_require_api() {
        assert!(require_api(true).is_ok());

        let err = require_api(false).unwrap_err();
        assert!(matches!(err, Error::Clipboard { .. }));
        assert!(err.is_recoverable());

        let path = finish_copy(require_api(false), || Ok(())).unwrap();
        assert_eq!(path, CopyPath::Legacy);
    }

    #[test]
    fn test_finish_copy_with_resolved_primary() {
        let path = finish_copy(Ok(()), || panic!("fallback must not run")).unwrap();
        assert_eq!(path, CopyPath::Clipboard);
    }

    #[test]
    fn test_ack_holds_for_window() {
        let mut ack = CopyAck::new(&ClipboardSettings::default());
        assert!(!ack.is_copied());

        ack.acknowledge(1000);
        assert!(ack.is_copied_at(1000));
        assert!(ack.is_copied_at(2999));
        assert!(!ack.is_copied_at(3000));
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let mut ack = CopyAck::new(&ClipboardSettings::default());
        let first = ack.acknowledge(0);
        let second = ack.acknowledge(1500);

        assert!(!ack.expire(first));
        assert!(ack.is_copied());
        assert!(ack.is_copied_at(3000));

        assert!(ack.expire(second));
        assert!(!ack.is_copied());
        assert!(!ack.expire(second));
    }
}
