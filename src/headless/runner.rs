//! Headless mode runner - drives the simulators without a browser
//!
//! Each `play_*` function owns one ticker, started and stopped exactly as
//! the state machine's [`UpdateResult`] says, and reports progress to an
//! [`EventSink`]. `shutdown` resolves on Ctrl+C in the binary.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use restsec_app::config::{init_settings_file, SimSettings};
use restsec_app::sim::rate_limit::{Mode, RateLimitMessage, RateLimiter};
use restsec_app::sim::scanner::{ScannerMessage, ValidationScanner};
use restsec_app::sim::sequence::{SequenceMessage, SequencePlayer};
use restsec_app::sim::stepper::{MiddlewareStepper, StepperMessage};
use restsec_app::{AuthzMessage, AuthzSimulator, RunId, UpdateAction, UpdateResult};
use restsec_core::permissions::{Endpoint, Role};
use restsec_core::prelude::*;
use restsec_core::{highlight_line, samples, text, AUTH_SCENARIOS, STAGES, VALIDATION_CASES};

use super::{EventSink, HeadlessEvent, Widget};

/// Options for `restsec play rate-limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitOptions {
    pub mode: Mode,
    pub duration_ms: u64,
    pub seed: u64,
}

impl Default for RateLimitOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            duration_ms: 5000,
            seed: 0,
        }
    }
}

/// How a driven run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    Completed,
    Interrupted,
}

/// One repeating ticker per widget.
struct Ticker {
    widget: Widget,
    active: Option<(RunId, Interval)>,
}

enum Step {
    Tick(RunId),
    Idle,
    Shutdown,
}

impl Ticker {
    fn new(widget: Widget) -> Self {
        Self {
            widget,
            active: None,
        }
    }

    /// Perform the driver side of an update result.
    fn apply(&mut self, result: UpdateResult, sink: &mut impl EventSink) {
        match result.action {
            Some(UpdateAction::StartTicker { run, every_ms }) => {
                let period = Duration::from_millis(every_ms.max(1));
                let mut interval = interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.active = Some((run, interval));
                sink.send(HeadlessEvent::run_started(self.widget, run.get(), every_ms));
            }
            Some(UpdateAction::StopTicker) => self.stop(sink),
            None => {}
        }
    }

    fn stop(&mut self, sink: &mut impl EventSink) {
        if let Some((run, _)) = self.active.take() {
            sink.send(HeadlessEvent::run_finished(self.widget, run.get()));
        }
    }

    /// Wait for the next tick; `None` when no ticker is running.
    async fn next(&mut self) -> Option<RunId> {
        match &mut self.active {
            Some((run, interval)) => {
                interval.tick().await;
                Some(*run)
            }
            None => None,
        }
    }
}

/// Feed ticks to `on_tick` until the run stops itself or `shutdown` fires.
async fn drive<S, F>(
    ticker: &mut Ticker,
    sink: &mut S,
    shutdown: impl Future<Output = ()>,
    mut on_tick: F,
) -> RunEnd
where
    S: EventSink,
    F: FnMut(RunId, &mut S) -> UpdateResult,
{
    tokio::pin!(shutdown);

    loop {
        let step = tokio::select! {
            run = ticker.next() => run.map_or(Step::Idle, Step::Tick),
            _ = &mut shutdown => Step::Shutdown,
        };

        match step {
            Step::Tick(run) => {
                let result = on_tick(run, sink);
                ticker.apply(result, sink);
            }
            Step::Idle => return RunEnd::Completed,
            Step::Shutdown => {
                info!("Shutdown requested, stopping {:?} run", ticker.widget);
                ticker.stop(sink);
                return RunEnd::Interrupted;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Simulators
// ─────────────────────────────────────────────────────────────────

/// Run the packet flood for `duration_ms` and report every request.
pub async fn play_rate_limit(
    settings: &SimSettings,
    options: RateLimitOptions,
    sink: &mut impl EventSink,
    shutdown: impl Future<Output = ()>,
) -> Result<RunEnd> {
    let mut limiter = RateLimiter::new(&settings.rate_limit, options.seed);
    let mut ticker = Ticker::new(Widget::RateLimit);
    let started = Instant::now();

    ticker.apply(limiter.update(RateLimitMessage::Start { now: 0 }), sink);
    if options.mode != limiter.mode() {
        limiter.update(RateLimitMessage::SetMode {
            mode: options.mode,
            now: 0,
        });
    }
    sink.send(HeadlessEvent::mode_changed(limiter.mode(), limiter.threshold(), 0));

    let duration_ms = options.duration_ms;
    let end = drive(&mut ticker, sink, shutdown, |run, sink| {
        let now = started.elapsed().as_millis() as u64;
        limiter.update(RateLimitMessage::Tick { run, now });
        for packet in limiter.spawned() {
            sink.send(HeadlessEvent::packet(
                packet,
                limiter.in_flight(),
                limiter.guard_status(),
            ));
        }
        if now >= duration_ms {
            limiter.update(RateLimitMessage::Stop)
        } else {
            UpdateResult::none()
        }
    })
    .await;

    let totals = limiter.totals();
    sink.send(HeadlessEvent::rate_limit_summary(
        limiter.mode(),
        totals.passed,
        totals.blocked,
        limiter.in_flight(),
        limiter.packet_count(),
    ));
    Ok(end)
}

/// Scan one payload and report each rule as it is revealed.
pub async fn play_validation(
    settings: &SimSettings,
    case_id: &str,
    sink: &mut impl EventSink,
    shutdown: impl Future<Output = ()>,
) -> Result<RunEnd> {
    let index = VALIDATION_CASES
        .iter()
        .position(|c| c.id() == case_id)
        .ok_or_else(|| Error::unknown("validation case", case_id))?;

    let mut scanner = ValidationScanner::new(&settings.scanner);
    let mut ticker = Ticker::new(Widget::Validation);
    scanner.update(ScannerMessage::Select(index));
    ticker.apply(scanner.update(ScannerMessage::Run), sink);

    let end = drive(&mut ticker, sink, shutdown, |run, sink| {
        let before = scanner.revealed_rules().len();
        let result = scanner.update(ScannerMessage::Tick { run });
        for (i, check) in scanner.revealed_rules().iter().enumerate().skip(before) {
            sink.send(HeadlessEvent::rule_revealed(case_id, i, check));
        }
        result
    })
    .await;

    if let Some(result) = scanner.verdict() {
        sink.send(HeadlessEvent::verdict(Widget::Validation, case_id, result));
    }
    Ok(end)
}

/// Walk one request through the middleware chain.
pub async fn play_middleware(
    settings: &SimSettings,
    sink: &mut impl EventSink,
    shutdown: impl Future<Output = ()>,
) -> Result<RunEnd> {
    let mut stepper = MiddlewareStepper::new(&settings.stepper);
    let mut ticker = Ticker::new(Widget::Middleware);
    ticker.apply(stepper.update(StepperMessage::Fire), sink);

    let end = drive(&mut ticker, sink, shutdown, |run, sink| {
        let before = stepper.progress();
        let result = stepper.update(StepperMessage::Tick { run });
        if stepper.is_running() && stepper.progress() != before {
            if let (Some((step, total)), Some(stage)) = (stepper.progress(), stepper.detail()) {
                sink.send(HeadlessEvent::stage_active(step, total, stage.label, stage.detail));
            }
        }
        result
    })
    .await;

    if end == RunEnd::Completed {
        let last = &STAGES[STAGES.len() - 1];
        sink.send(HeadlessEvent::verdict(Widget::Middleware, "request", last.detail));
    }
    Ok(end)
}

/// Play one authentication scenario hop by hop.
pub async fn play_authn(
    settings: &SimSettings,
    scenario_id: &str,
    sink: &mut impl EventSink,
    shutdown: impl Future<Output = ()>,
) -> Result<RunEnd> {
    let index = AUTH_SCENARIOS
        .iter()
        .position(|s| s.id == scenario_id)
        .ok_or_else(|| Error::unknown("auth scenario", scenario_id))?;

    let mut player = SequencePlayer::new(&settings.sequence);
    let mut ticker = Ticker::new(Widget::Authn);
    player.update(SequenceMessage::Select(index));
    ticker.apply(player.update(SequenceMessage::Play), sink);

    let end = drive(&mut ticker, sink, shutdown, |run, sink| {
        let before = player.revealed_hops().len();
        let result = player.update(SequenceMessage::Tick { run });
        for (i, hop) in player.revealed_hops().iter().enumerate().skip(before) {
            sink.send(HeadlessEvent::hop_revealed(scenario_id, i, hop));
        }
        result
    })
    .await;

    if let Some(result) = player.outcome() {
        sink.send(HeadlessEvent::verdict(Widget::Authn, scenario_id, result));
    }
    Ok(end)
}

// ─────────────────────────────────────────────────────────────────
// One-shot commands
// ─────────────────────────────────────────────────────────────────

/// Evaluate the permission matrix. A missing role or endpoint means all of them.
pub fn evaluate_authz(
    role: Option<&str>,
    endpoint: Option<&str>,
    sink: &mut impl EventSink,
) -> Result<()> {
    let roles = match role {
        Some(r) => vec![r.parse::<Role>()?],
        None => Role::ALL.to_vec(),
    };
    let endpoints = match endpoint {
        Some(e) => vec![e.parse::<Endpoint>()?],
        None => Endpoint::ALL.to_vec(),
    };

    let mut sim = AuthzSimulator::default();
    for role in &roles {
        sim.update(AuthzMessage::SelectRole(*role));
        for endpoint in &endpoints {
            sim.update(AuthzMessage::SelectEndpoint(*endpoint));
            sink.send(HeadlessEvent::authz_decision(&sim.decision()));
        }
    }
    Ok(())
}

/// Emit the content store with citation markers removed.
pub fn print_content(sink: &mut impl EventSink) -> Result<()> {
    let mut site = serde_json::to_value(restsec_core::content::SITE)?;
    text::clean_json(&mut site);
    sink.send(HeadlessEvent::content(site));
    Ok(())
}

/// Run every table check; stops at the first inconsistent table.
pub fn check_tables(sink: &mut impl EventSink) -> Result<()> {
    let reports = restsec_core::check_all()?;
    debug!("{} tables checked", reports.len());
    for report in &reports {
        sink.send(HeadlessEvent::table_checked(report));
    }
    Ok(())
}

/// Emit every line of a code tab, tokenized.
pub fn print_sample(tab_id: &str, sink: &mut impl EventSink) -> Result<()> {
    let tab = samples::find(tab_id)?;
    for file in tab.files {
        for (n, line) in file.lines().enumerate() {
            let tokens = highlight_line(line, file.lang);
            sink.send(HeadlessEvent::sample_line(
                tab.id,
                file.filename,
                file.lang,
                n + 1,
                &tokens,
            ));
        }
    }
    Ok(())
}

/// Write a default `restsec.toml` into `dir`.
pub fn write_settings(dir: &Path, sink: &mut impl EventSink) -> Result<()> {
    let path = init_settings_file(dir)?;
    sink.send(HeadlessEvent::settings_written(&path));
    Ok(())
}
