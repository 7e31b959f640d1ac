//! Driver-level tests: every simulator run through the same fake ticker

use super::rate_limit::{Mode, RateLimitMessage, RateLimiter};
use super::scanner::{ScannerMessage, ValidationScanner};
use super::sequence::{SequenceMessage, SequencePlayer};
use super::stepper::{MiddlewareStepper, StepperMessage};
use super::*;
use crate::config::SimSettings;

/// Holds at most one ticker, the way a widget component does.
#[derive(Debug, Default)]
struct FakeTicker {
    active: Option<(RunId, u64)>,
    starts: usize,
    stops: usize,
}

impl FakeTicker {
    fn apply(&mut self, result: UpdateResult) {
        match result.action {
            Some(UpdateAction::StartTicker { run, every_ms }) => {
                self.active = Some((run, every_ms));
                self.starts += 1;
            }
            Some(UpdateAction::StopTicker) => {
                self.active = None;
                self.stops += 1;
            }
            None => {}
        }
    }

    fn run(&self) -> Option<RunId> {
        self.active.map(|(run, _)| run)
    }
}

#[test]
fn test_scanner_ticker_lifecycle() {
    let settings = SimSettings::default();
    let mut scanner = ValidationScanner::new(&settings.scanner);
    let mut ticker = FakeTicker::default();

    ticker.apply(scanner.update(ScannerMessage::Run));
    assert_eq!(ticker.active.map(|(_, ms)| ms), Some(700));

    let mut ticks = 0;
    while let Some(run) = ticker.run() {
        ticker.apply(scanner.update(ScannerMessage::Tick { run }));
        ticks += 1;
    }

    assert_eq!(ticks, scanner.case().rules().len());
    assert_eq!((ticker.starts, ticker.stops), (1, 1));
    assert!(scanner.verdict().is_some());
}

#[test]
fn test_stepper_ticker_lifecycle() {
    let settings = SimSettings::default();
    let mut stepper = MiddlewareStepper::new(&settings.stepper);
    let mut ticker = FakeTicker::default();

    ticker.apply(stepper.update(StepperMessage::Fire));
    let mut ticks = 0;
    while let Some(run) = ticker.run() {
        ticker.apply(stepper.update(StepperMessage::Tick { run }));
        ticks += 1;
    }

    // Six stage ticks, then one that lands on the handler
    assert_eq!(ticks, 7);
    assert_eq!(stepper.progress(), Some((6, 6)));
}

#[test]
fn test_sequence_select_mid_play_stops_ticker() {
    let settings = SimSettings::default();
    let mut player = SequencePlayer::new(&settings.sequence);
    let mut ticker = FakeTicker::default();

    ticker.apply(player.update(SequenceMessage::Play));
    let old = ticker.run().unwrap();
    ticker.apply(player.update(SequenceMessage::Tick { run: old }));

    ticker.apply(player.update(SequenceMessage::Select(2)));
    assert_eq!(ticker.active, None);

    ticker.apply(player.update(SequenceMessage::Play));
    let new = ticker.run().unwrap();
    assert_ne!(old, new);

    // A late tick from the cancelled run is dropped
    ticker.apply(player.update(SequenceMessage::Tick { run: old }));
    assert!(player.revealed_hops().is_empty());
    assert_eq!(ticker.run(), Some(new));
}

#[test]
fn test_every_scenario_plays_to_its_outcome() {
    let settings = SimSettings::default();
    for index in 0..restsec_core::AUTH_SCENARIOS.len() {
        let mut player = SequencePlayer::new(&settings.sequence);
        let mut ticker = FakeTicker::default();
        ticker.apply(player.update(SequenceMessage::Select(index)));
        ticker.apply(player.update(SequenceMessage::Play));
        while let Some(run) = ticker.run() {
            ticker.apply(player.update(SequenceMessage::Tick { run }));
        }
        assert_eq!(player.revealed_hops().len(), player.scenario().len());
        assert_eq!(player.outcome(), Some(player.scenario().result));
    }
}

#[test]
fn test_rate_limiter_under_driver() {
    let settings = SimSettings::default();
    let mut limiter = RateLimiter::new(&settings.rate_limit, 42);
    let mut ticker = FakeTicker::default();

    ticker.apply(limiter.update(RateLimitMessage::Start { now: 0 }));
    let (run, every_ms) = ticker.active.unwrap();
    ticker.apply(limiter.update(RateLimitMessage::SetMode {
        mode: Mode::Attack,
        now: 0,
    }));
    assert_eq!(ticker.run(), Some(run));

    let mut now = 0;
    while now < 4000 {
        now += every_ms;
        ticker.apply(limiter.update(RateLimitMessage::Tick { run, now }));
        assert!(limiter.in_flight() <= limiter.threshold());
        assert!(limiter.packet_count() <= settings.rate_limit.max_packets);
    }
    assert!(limiter.totals().blocked > 0);

    ticker.apply(limiter.update(RateLimitMessage::Stop));
    assert_eq!(ticker.active, None);
}

#[test]
fn test_same_seed_same_lanes() {
    let settings = SimSettings::default();
    let lanes = |seed| {
        let mut limiter = RateLimiter::new(&settings.rate_limit, seed);
        let run = match limiter.update(RateLimitMessage::Start { now: 0 }).action {
            Some(UpdateAction::StartTicker { run, .. }) => run,
            _ => unreachable!(),
        };
        limiter.update(RateLimitMessage::SetMode {
            mode: Mode::Attack,
            now: 0,
        });
        limiter.update(RateLimitMessage::Tick { run, now: 2000 });
        limiter.packets().map(|p| p.lane).collect::<Vec<_>>()
    };
    assert_eq!(lanes(9), lanes(9));
}
