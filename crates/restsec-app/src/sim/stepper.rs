//! Middleware chain stepper: walks one request through the six stages

use restsec_core::pipeline::{Stage, STAGES};
use tracing::{debug, trace};

use super::{RunId, UpdateResult};
use crate::config::StepperSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperMessage {
    Fire,
    Tick { run: RunId },
    /// Show a stage's description while no request is in flight
    Inspect(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Pending,
    Active,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperState {
    Idle,
    /// `active` is `None` before the first tick
    Running { run: RunId, active: Option<usize> },
    Done,
}

#[derive(Debug, Clone)]
pub struct MiddlewareStepper {
    state: StepperState,
    last_run: RunId,
    inspected: Option<usize>,
    every_ms: u64,
}

impl MiddlewareStepper {
    pub fn new(settings: &StepperSettings) -> Self {
        Self {
            state: StepperState::Idle,
            last_run: RunId::default(),
            inspected: None,
            every_ms: settings.advance_ms,
        }
    }

    pub fn state(&self) -> StepperState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, StepperState::Running { .. })
    }

    pub fn current_run(&self) -> Option<RunId> {
        match self.state {
            StepperState::Running { run, .. } => Some(run),
            _ => None,
        }
    }

    pub fn stage_status(&self, index: usize) -> StageStatus {
        match self.state {
            StepperState::Idle => StageStatus::Pending,
            StepperState::Done => StageStatus::Done,
            StepperState::Running { active: None, .. } => StageStatus::Pending,
            StepperState::Running {
                active: Some(active),
                ..
            } => match index.cmp(&active) {
                std::cmp::Ordering::Less => StageStatus::Done,
                std::cmp::Ordering::Equal => StageStatus::Active,
                std::cmp::Ordering::Greater => StageStatus::Pending,
            },
        }
    }

    /// `(k, 6)` for the "Step k / 6" label, once a stage has been reached.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state {
            StepperState::Running {
                active: Some(active),
                ..
            } => Some((active + 1, STAGES.len())),
            StepperState::Done => Some((STAGES.len(), STAGES.len())),
            _ => None,
        }
    }

    /// Stage whose description is surfaced: the active one while running,
    /// otherwise the inspected one (the last stage after a finished run).
    pub fn detail_stage(&self) -> Option<usize> {
        match self.state {
            StepperState::Running { active, .. } => active,
            StepperState::Done => self.inspected.or(Some(STAGES.len() - 1)),
            StepperState::Idle => self.inspected,
        }
    }

    pub fn detail(&self) -> Option<&'static Stage> {
        self.detail_stage().and_then(|i| STAGES.get(i))
    }

    pub fn update(&mut self, msg: StepperMessage) -> UpdateResult {
        match msg {
            StepperMessage::Fire => {
                if self.is_running() {
                    trace!("Request already in flight, ignoring fire");
                    return UpdateResult::none();
                }
                self.last_run = self.last_run.next();
                self.inspected = None;
                self.state = StepperState::Running {
                    run: self.last_run,
                    active: None,
                };
                debug!("Stepper {} fired", self.last_run);
                UpdateResult::start(self.last_run, self.every_ms)
            }

            StepperMessage::Tick { run } => match self.state {
                StepperState::Running {
                    run: current,
                    active,
                } if current == run => {
                    let next = active.map_or(0, |i| i + 1);
                    if next < STAGES.len() {
                        self.state = StepperState::Running {
                            run,
                            active: Some(next),
                        };
                        UpdateResult::none()
                    } else {
                        self.state = StepperState::Done;
                        debug!("Stepper {} reached the handler", run);
                        UpdateResult::stop()
                    }
                }
                _ => {
                    trace!("Dropping stale stepper tick for {}", run);
                    UpdateResult::none()
                }
            },

            StepperMessage::Inspect(index) => {
                if !self.is_running() && index < STAGES.len() {
                    self.inspected = Some(index);
                }
                UpdateResult::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::UpdateAction;

    fn fire(stepper: &mut MiddlewareStepper) -> RunId {
        match stepper.update(StepperMessage::Fire).action {
            Some(UpdateAction::StartTicker { run, every_ms }) => {
                assert_eq!(every_ms, 700);
                run
            }
            other => panic!("expected StartTicker, got {:?}", other),
        }
    }

    fn statuses(stepper: &MiddlewareStepper) -> Vec<StageStatus> {
        (0..STAGES.len()).map(|i| stepper.stage_status(i)).collect()
    }

    #[test]
    fn test_one_fire_walks_all_six_stages_in_order() {
        let mut stepper = MiddlewareStepper::new(&StepperSettings::default());
        let run = fire(&mut stepper);
        assert_eq!(stepper.progress(), None);

        for k in 0..STAGES.len() {
            assert_eq!(stepper.update(StepperMessage::Tick { run }), UpdateResult::none());
            assert_eq!(stepper.progress(), Some((k + 1, 6)));
            assert_eq!(stepper.stage_status(k), StageStatus::Active);
            assert!((0..k).all(|i| stepper.stage_status(i) == StageStatus::Done));
            assert!((k + 1..6).all(|i| stepper.stage_status(i) == StageStatus::Pending));
            assert_eq!(stepper.detail().map(|s| s.label), Some(STAGES[k].label));
        }

        assert_eq!(stepper.update(StepperMessage::Tick { run }), UpdateResult::stop());
        assert_eq!(statuses(&stepper), vec![StageStatus::Done; 6]);
        assert_eq!(stepper.detail().map(|s| s.label), Some("Handler"));
    }

    #[test]
    fn test_fire_while_running_is_ignored() {
        let mut stepper = MiddlewareStepper::new(&StepperSettings::default());
        let run = fire(&mut stepper);
        stepper.update(StepperMessage::Tick { run });

        assert_eq!(stepper.update(StepperMessage::Fire), UpdateResult::none());
        assert_eq!(stepper.current_run(), Some(run));
        assert_eq!(stepper.progress(), Some((1, 6)));
    }

    #[test]
    fn test_inspect_only_when_idle_or_done() {
        let mut stepper = MiddlewareStepper::new(&StepperSettings::default());
        stepper.update(StepperMessage::Inspect(2));
        assert_eq!(stepper.detail_stage(), Some(2));

        let run = fire(&mut stepper);
        assert_eq!(stepper.detail_stage(), None);
        stepper.update(StepperMessage::Tick { run });
        stepper.update(StepperMessage::Inspect(4));
        assert_eq!(stepper.detail_stage(), Some(0));

        for _ in 0..6 {
            stepper.update(StepperMessage::Tick { run });
        }
        stepper.update(StepperMessage::Inspect(1));
        assert_eq!(stepper.detail_stage(), Some(1));

        stepper.update(StepperMessage::Inspect(99));
        assert_eq!(stepper.detail_stage(), Some(1));
    }

    #[test]
    fn test_refire_after_done_restarts_from_first_stage() {
        let mut stepper = MiddlewareStepper::new(&StepperSettings::default());
        let first = fire(&mut stepper);
        for _ in 0..7 {
            stepper.update(StepperMessage::Tick { run: first });
        }
        assert_eq!(stepper.state(), StepperState::Done);

        let second = fire(&mut stepper);
        stepper.update(StepperMessage::Tick { run: first });
        assert_eq!(stepper.progress(), None);
        stepper.update(StepperMessage::Tick { run: second });
        assert_eq!(stepper.progress(), Some((1, 6)));
        assert_eq!(statuses(&stepper)[0], StageStatus::Active);
    }
}
