//! Step-by-step reveal driven by a single repeating ticker
//!
//! Shared by the validation scanner and the sequence player: both show a
//! scripted list one entry per tick and finish with a verdict.

use tracing::{debug, trace};

use super::{RunId, UpdateResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Running { run: RunId, revealed: usize },
    Done { revealed: usize },
}

#[derive(Debug, Clone)]
pub struct RevealRun {
    state: RevealState,
    last_run: RunId,
    every_ms: u64,
}

impl RevealRun {
    pub fn new(every_ms: u64) -> Self {
        Self {
            state: RevealState::Idle,
            last_run: RunId::default(),
            every_ms,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn every_ms(&self) -> u64 {
        self.every_ms
    }

    /// Number of entries currently visible.
    pub fn revealed(&self) -> usize {
        match self.state {
            RevealState::Idle => 0,
            RevealState::Running { revealed, .. } | RevealState::Done { revealed } => revealed,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RevealState::Running { .. })
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, RevealState::Done { .. })
    }

    pub fn current_run(&self) -> Option<RunId> {
        match self.state {
            RevealState::Running { run, .. } => Some(run),
            _ => None,
        }
    }

    /// Begin revealing `len` entries. Ignored while a run is active.
    pub fn start(&mut self, len: usize) -> UpdateResult {
        if self.is_running() {
            trace!("Reveal already running, ignoring start");
            return UpdateResult::none();
        }

        self.last_run = self.last_run.next();
        if len == 0 {
            self.state = RevealState::Done { revealed: 0 };
            return UpdateResult::none();
        }

        let run = self.last_run;
        self.state = RevealState::Running { run, revealed: 0 };
        debug!("Reveal {} started ({} entries)", run, len);
        UpdateResult::start(run, self.every_ms)
    }

    /// Reveal the next entry if `run` is the active run.
    pub fn tick(&mut self, run: RunId, len: usize) -> UpdateResult {
        match self.state {
            RevealState::Running {
                run: current,
                revealed,
            } if current == run => {
                let revealed = (revealed + 1).min(len);
                if revealed >= len {
                    self.state = RevealState::Done { revealed };
                    debug!("Reveal {} finished", run);
                    UpdateResult::stop()
                } else {
                    self.state = RevealState::Running { run, revealed };
                    UpdateResult::none()
                }
            }
            _ => {
                trace!("Dropping stale tick for {}", run);
                UpdateResult::none()
            }
        }
    }

    /// Abandon any run and hide everything.
    pub fn cancel(&mut self) -> UpdateResult {
        let was_running = self.is_running();
        self.last_run = self.last_run.next();
        self.state = RevealState::Idle;

        if was_running {
            UpdateResult::stop()
        } else {
            UpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::UpdateAction;

    fn started(reveal: &mut RevealRun, len: usize) -> RunId {
        match reveal.start(len).action {
            Some(UpdateAction::StartTicker { run, every_ms }) => {
                assert_eq!(every_ms, reveal.every_ms());
                run
            }
            other => panic!("expected StartTicker, got {:?}", other),
        }
    }

    #[test]
    fn test_reveals_in_order_then_stops() {
        let mut reveal = RevealRun::new(700);
        let run = started(&mut reveal, 3);

        assert_eq!(reveal.tick(run, 3), UpdateResult::none());
        assert_eq!(reveal.revealed(), 1);
        assert_eq!(reveal.tick(run, 3), UpdateResult::none());
        assert_eq!(reveal.tick(run, 3), UpdateResult::stop());
        assert_eq!(reveal.state(), RevealState::Done { revealed: 3 });
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut reveal = RevealRun::new(700);
        let run = started(&mut reveal, 3);
        reveal.tick(run, 3);

        assert_eq!(reveal.start(3), UpdateResult::none());
        assert_eq!(reveal.current_run(), Some(run));
        assert_eq!(reveal.revealed(), 1);
    }

    #[test]
    fn test_cancel_invalidates_pending_ticks() {
        let mut reveal = RevealRun::new(700);
        let old = started(&mut reveal, 3);
        reveal.tick(old, 3);

        assert_eq!(reveal.cancel(), UpdateResult::stop());
        assert_eq!(reveal.revealed(), 0);

        let new = started(&mut reveal, 3);
        assert_ne!(old, new);
        reveal.tick(old, 3);
        assert_eq!(reveal.revealed(), 0);
        reveal.tick(new, 3);
        assert_eq!(reveal.revealed(), 1);
    }

    #[test]
    fn test_restart_after_done() {
        let mut reveal = RevealRun::new(700);
        let run = started(&mut reveal, 1);
        reveal.tick(run, 1);
        assert!(reveal.is_done());

        let again = started(&mut reveal, 1);
        assert_eq!(reveal.revealed(), 0);
        assert!(again > run);
    }

    #[test]
    fn test_empty_script_finishes_immediately() {
        let mut reveal = RevealRun::new(700);
        assert_eq!(reveal.start(0), UpdateResult::none());
        assert!(reveal.is_done());
    }

    #[test]
    fn test_cancel_when_idle_has_no_action() {
        let mut reveal = RevealRun::new(700);
        assert_eq!(reveal.cancel(), UpdateResult::none());
    }
}
