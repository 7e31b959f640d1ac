//! Headless mode - NDJSON event output for the simulators
//!
//! Every simulator on the site can be played from the command line. The
//! runner drives the same state machines the website uses, on tokio timers,
//! and reports what a viewer would see as structured events on stdout.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"run_started","widget":"validation","run":1,"every_ms":700,"timestamp":1704700001000}
//! {"event":"rule_revealed","case_id":"xss","index":0,"rule":"JSON Schema","detail":"comment: string ✓","passed":true,"timestamp":1704700001700}
//! {"event":"verdict","widget":"validation","id":"xss","result":"400 Bad Request — XSS payload detected in request body","timestamp":1704700003100}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use restsec_app::{Decision, GuardStatus, Mode, Packet};
use restsec_core::sequence::Hop;
use restsec_core::validation::RuleCheck;
use restsec_core::{Lang, TableReport, Token};

/// Which simulator an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Widget {
    RateLimit,
    Validation,
    Middleware,
    Authn,
}

/// One highlighted span of a sample line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: String,
    pub text: String,
}

impl From<&Token<'_>> for Span {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: format!("{:?}", token.kind).to_lowercase(),
            text: token.text.to_string(),
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A widget's ticker started
    RunStarted {
        widget: Widget,
        run: u64,
        every_ms: u64,
        timestamp: i64,
    },

    /// A widget's ticker stopped
    RunFinished {
        widget: Widget,
        run: u64,
        timestamp: i64,
    },

    /// Rate limiter switched traffic mode
    ModeChanged {
        mode: Mode,
        threshold: u32,
        at_ms: u64,
        timestamp: i64,
    },

    /// A request reached the rate limiter
    Packet {
        id: u64,
        lane: String,
        request: String,
        blocked: bool,
        in_flight: u32,
        guard: GuardStatus,
        at_ms: u64,
        timestamp: i64,
    },

    /// Final rate-limiter counters
    RateLimitSummary {
        mode: Mode,
        passed: u64,
        blocked: u64,
        in_flight: u32,
        on_screen: usize,
        timestamp: i64,
    },

    /// One validation rule revealed
    RuleRevealed {
        case_id: String,
        index: usize,
        rule: String,
        detail: String,
        passed: bool,
        timestamp: i64,
    },

    /// One middleware stage became active
    StageActive {
        step: usize,
        total: usize,
        label: String,
        detail: String,
        timestamp: i64,
    },

    /// One authentication hop revealed
    HopRevealed {
        scenario_id: String,
        index: usize,
        from: String,
        to: String,
        label: String,
        payload: String,
        timestamp: i64,
    },

    /// Outcome line of a finished run
    Verdict {
        widget: Widget,
        id: String,
        result: String,
        timestamp: i64,
    },

    /// Authorization decision for one role and endpoint
    AuthzDecision {
        role: String,
        endpoint: String,
        verdict: String,
        status_code: u16,
        status_line: String,
        explanation: String,
        timestamp: i64,
    },

    /// The cleaned content store
    Content {
        site: serde_json::Value,
        timestamp: i64,
    },

    /// A table passed its consistency check
    TableChecked {
        table: String,
        rows: usize,
        timestamp: i64,
    },

    /// One highlighted line of a code sample
    SampleLine {
        tab: String,
        file: String,
        lang: String,
        line: usize,
        spans: Vec<Span>,
        timestamp: i64,
    },

    /// A default settings file was written
    SettingsWritten { path: String, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

/// Destination for headless events
pub trait EventSink {
    fn send(&mut self, event: HeadlessEvent);
}

/// Writes each event to stdout as one JSON line
#[derive(Debug, Default)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn send(&mut self, event: HeadlessEvent) {
        event.emit();
    }
}

impl EventSink for Vec<HeadlessEvent> {
    fn send(&mut self, event: HeadlessEvent) {
        self.push(event);
    }
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        // Serialize to JSON
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn run_started(widget: Widget, run: u64, every_ms: u64) -> Self {
        Self::RunStarted {
            widget,
            run,
            every_ms,
            timestamp: Self::now(),
        }
    }

    pub fn run_finished(widget: Widget, run: u64) -> Self {
        Self::RunFinished {
            widget,
            run,
            timestamp: Self::now(),
        }
    }

    pub fn mode_changed(mode: Mode, threshold: u32, at_ms: u64) -> Self {
        Self::ModeChanged {
            mode,
            threshold,
            at_ms,
            timestamp: Self::now(),
        }
    }

    pub fn packet(packet: &Packet, in_flight: u32, guard: GuardStatus) -> Self {
        let lane = packet.lane_info();
        Self::Packet {
            id: packet.id,
            lane: lane.label.to_string(),
            request: lane.packet_label.to_string(),
            blocked: packet.blocked,
            in_flight,
            guard,
            at_ms: packet.spawned_at,
            timestamp: Self::now(),
        }
    }

    pub fn rate_limit_summary(
        mode: Mode,
        passed: u64,
        blocked: u64,
        in_flight: u32,
        on_screen: usize,
    ) -> Self {
        Self::RateLimitSummary {
            mode,
            passed,
            blocked,
            in_flight,
            on_screen,
            timestamp: Self::now(),
        }
    }

    pub fn rule_revealed(case_id: &str, index: usize, check: &RuleCheck) -> Self {
        Self::RuleRevealed {
            case_id: case_id.to_string(),
            index,
            rule: check.rule.to_string(),
            detail: check.detail.to_string(),
            passed: check.outcome.is_pass(),
            timestamp: Self::now(),
        }
    }

    pub fn stage_active(step: usize, total: usize, label: &str, detail: &str) -> Self {
        Self::StageActive {
            step,
            total,
            label: label.to_string(),
            detail: detail.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn hop_revealed(scenario_id: &str, index: usize, hop: &Hop) -> Self {
        Self::HopRevealed {
            scenario_id: scenario_id.to_string(),
            index,
            from: hop.from.label().to_string(),
            to: hop.to.label().to_string(),
            label: hop.label.to_string(),
            payload: hop.payload.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn verdict(widget: Widget, id: &str, result: &str) -> Self {
        Self::Verdict {
            widget,
            id: id.to_string(),
            result: result.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn authz_decision(decision: &Decision) -> Self {
        Self::AuthzDecision {
            role: decision.role.label().to_string(),
            endpoint: decision.endpoint.path().to_string(),
            verdict: format!("{:?}", decision.verdict).to_lowercase(),
            status_code: decision.verdict.status_code(),
            status_line: decision.status_line.to_string(),
            explanation: decision.explanation.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn content(site: serde_json::Value) -> Self {
        Self::Content {
            site,
            timestamp: Self::now(),
        }
    }

    pub fn table_checked(report: &TableReport) -> Self {
        Self::TableChecked {
            table: report.table.to_string(),
            rows: report.rows,
            timestamp: Self::now(),
        }
    }

    pub fn sample_line(tab: &str, file: &str, lang: Lang, line: usize, tokens: &[Token<'_>]) -> Self {
        Self::SampleLine {
            tab: tab.to_string(),
            file: file.to_string(),
            lang: format!("{:?}", lang).to_lowercase(),
            line,
            spans: tokens.iter().map(Span::from).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn settings_written(path: &std::path::Path) -> Self {
        Self::SettingsWritten {
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Event name as it appears in the "event" field
    pub fn name(&self) -> &'static str {
        match self {
            Self::RunStarted { .. } => "run_started",
            Self::RunFinished { .. } => "run_finished",
            Self::ModeChanged { .. } => "mode_changed",
            Self::Packet { .. } => "packet",
            Self::RateLimitSummary { .. } => "rate_limit_summary",
            Self::RuleRevealed { .. } => "rule_revealed",
            Self::StageActive { .. } => "stage_active",
            Self::HopRevealed { .. } => "hop_revealed",
            Self::Verdict { .. } => "verdict",
            Self::AuthzDecision { .. } => "authz_decision",
            Self::Content { .. } => "content",
            Self::TableChecked { .. } => "table_checked",
            Self::SampleLine { .. } => "sample_line",
            Self::SettingsWritten { .. } => "settings_written",
            Self::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restsec_app::sim::authz::decide;
    use restsec_core::permissions::{Endpoint, PermissionMatrix, Role};
    use restsec_core::VALIDATION_CASES;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_run_started_serialization() {
        let value = to_value(&HeadlessEvent::run_started(Widget::RateLimit, 1, 50));

        assert_eq!(value["event"], "run_started");
        assert_eq!(value["widget"], "rate-limit");
        assert_eq!(value["run"], 1);
        assert_eq!(value["every_ms"], 50);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_rule_revealed_serialization() {
        let case = &VALIDATION_CASES[1];
        let value = to_value(&HeadlessEvent::rule_revealed(case.id(), 0, &case.rules()[0]));

        assert_eq!(value["event"], "rule_revealed");
        assert_eq!(value["case_id"], "sql-injection");
        assert_eq!(value["index"], 0);
        assert!(value["passed"].is_boolean());
    }

    #[test]
    fn test_authz_decision_serialization() {
        let decision = decide(PermissionMatrix::standard(), Role::Guest, Endpoint::Billing);
        let value = to_value(&HeadlessEvent::authz_decision(&decision));

        assert_eq!(value["event"], "authz_decision");
        assert_eq!(value["role"], "Guest");
        assert_eq!(value["endpoint"], "/api/billing");
        assert_eq!(value["verdict"], "forbidden");
        assert_eq!(value["status_code"], 403);
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("Unknown role: root".to_string(), false));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "Unknown role: root");
        assert_eq!(value["fatal"], false);
    }

    #[test]
    fn test_name_matches_serialized_tag() {
        let events = [
            HeadlessEvent::run_finished(Widget::Authn, 2),
            HeadlessEvent::mode_changed(Mode::Attack, 2, 0),
            HeadlessEvent::verdict(Widget::Middleware, "request", "200 OK"),
            HeadlessEvent::content(serde_json::json!({})),
        ];
        for event in &events {
            assert_eq!(to_value(event)["event"], event.name());
        }
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<HeadlessEvent> = Vec::new();
        sink.send(HeadlessEvent::run_started(Widget::Validation, 1, 700));
        sink.send(HeadlessEvent::run_finished(Widget::Validation, 1));
        let names: Vec<_> = sink.iter().map(HeadlessEvent::name).collect();
        assert_eq!(names, ["run_started", "run_finished"]);
    }
}
