//! Validation scanner: reveals each rule check of the selected payload

use restsec_core::validation::{RuleCheck, ValidationCase, VALIDATION_CASES};
use tracing::debug;

use super::reveal::RevealRun;
use super::{RunId, UpdateResult};
use crate::config::ScannerSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerMessage {
    /// Pick a payload by position in the case table
    Select(usize),
    Run,
    Tick { run: RunId },
}

#[derive(Debug, Clone)]
pub struct ValidationScanner {
    selected: usize,
    reveal: RevealRun,
}

impl ValidationScanner {
    pub fn new(settings: &ScannerSettings) -> Self {
        Self {
            selected: 0,
            reveal: RevealRun::new(settings.reveal_ms),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn case(&self) -> &'static ValidationCase {
        &VALIDATION_CASES[self.selected]
    }

    pub fn is_scanning(&self) -> bool {
        self.reveal.is_running()
    }

    pub fn is_done(&self) -> bool {
        self.reveal.is_done()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.reveal.current_run()
    }

    /// Rules revealed so far, in order.
    pub fn revealed_rules(&self) -> &'static [RuleCheck] {
        self.case().scenario.revealed(self.reveal.revealed())
    }

    /// Response line, shown once every rule is revealed.
    pub fn verdict(&self) -> Option<&'static str> {
        self.is_done().then(|| self.case().scenario.result)
    }

    pub fn update(&mut self, msg: ScannerMessage) -> UpdateResult {
        match msg {
            ScannerMessage::Select(index) => {
                debug_assert!(
                    index < VALIDATION_CASES.len(),
                    "validation case index {index} out of range"
                );
                if index >= VALIDATION_CASES.len() {
                    return UpdateResult::none();
                }
                self.selected = index;
                debug!("Scanner selected '{}'", self.case().id());
                self.reveal.cancel()
            }
            ScannerMessage::Run => self.reveal.start(self.case().rules().len()),
            ScannerMessage::Tick { run } => self.reveal.tick(run, self.case().rules().len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::UpdateAction;

    fn run_id(result: UpdateResult) -> RunId {
        match result.action {
            Some(UpdateAction::StartTicker { run, .. }) => run,
            other => panic!("expected StartTicker, got {:?}", other),
        }
    }

    #[test]
    fn test_every_case_completes_with_its_verdict() {
        for (i, case) in VALIDATION_CASES.iter().enumerate() {
            let mut scanner = ValidationScanner::new(&ScannerSettings::default());
            scanner.update(ScannerMessage::Select(i));
            let run = run_id(scanner.update(ScannerMessage::Run));

            let mut last = UpdateResult::none();
            for _ in 0..case.rules().len() {
                assert_eq!(scanner.verdict(), None);
                last = scanner.update(ScannerMessage::Tick { run });
            }

            assert_eq!(last, UpdateResult::stop());
            assert_eq!(scanner.revealed_rules().len(), case.rules().len());
            assert_eq!(scanner.verdict(), Some(case.scenario.result));
        }
    }

    #[test]
    fn test_run_uses_configured_interval() {
        let mut scanner = ValidationScanner::new(&ScannerSettings { reveal_ms: 250 });
        let result = scanner.update(ScannerMessage::Run);
        assert!(matches!(
            result.action,
            Some(UpdateAction::StartTicker { every_ms: 250, .. })
        ));
    }

    #[test]
    fn test_select_mid_scan_resets() {
        let mut scanner = ValidationScanner::new(&ScannerSettings::default());
        let run = run_id(scanner.update(ScannerMessage::Run));
        scanner.update(ScannerMessage::Tick { run });
        assert_eq!(scanner.revealed_rules().len(), 1);

        let result = scanner.update(ScannerMessage::Select(2));
        assert_eq!(result, UpdateResult::stop());
        assert!(scanner.revealed_rules().is_empty());
        assert_eq!(scanner.case().id(), "xss");

        // Tick from the abandoned run changes nothing
        scanner.update(ScannerMessage::Tick { run });
        assert!(scanner.revealed_rules().is_empty());
    }

    #[test]
    fn test_rules_are_revealed_as_a_prefix() {
        let mut scanner = ValidationScanner::new(&ScannerSettings::default());
        scanner.update(ScannerMessage::Select(3));
        let run = run_id(scanner.update(ScannerMessage::Run));
        scanner.update(ScannerMessage::Tick { run });
        scanner.update(ScannerMessage::Tick { run });

        let rules = scanner.revealed_rules();
        assert_eq!(rules, &scanner.case().rules()[..2]);
    }
}
