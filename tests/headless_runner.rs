//! Integration tests for the headless runner
//!
//! Tokio's clock is paused, so timers fire instantly and in order.

use std::future::pending;
use std::time::Duration;

use restsec_app::config::SimSettings;
use restsec_app::Mode;
use restsec_core::Error;
use restsec_guide::{
    check_tables, evaluate_authz, play_authn, play_middleware, play_rate_limit, play_validation,
    print_content, print_sample, write_settings, HeadlessEvent, RateLimitOptions, RunEnd,
};

fn names(events: &[HeadlessEvent]) -> Vec<&'static str> {
    events.iter().map(HeadlessEvent::name).collect()
}

#[tokio::test(start_paused = true)]
async fn test_validation_run_reveals_rules_then_verdict() {
    let settings = SimSettings::default();
    let mut events = Vec::new();

    let end = play_validation(&settings, "xss", &mut events, pending())
        .await
        .unwrap();

    assert_eq!(end, RunEnd::Completed);
    assert_eq!(
        names(&events),
        [
            "run_started",
            "rule_revealed",
            "rule_revealed",
            "rule_revealed",
            "run_finished",
            "verdict"
        ]
    );
    match events.last() {
        Some(HeadlessEvent::Verdict { id, result, .. }) => {
            assert_eq!(id, "xss");
            assert!(result.starts_with("400 Bad Request"));
        }
        other => panic!("expected verdict, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_validation_rules_arrive_in_order() {
    let settings = SimSettings::default();
    let mut events = Vec::new();
    play_validation(&settings, "missing-fields", &mut events, pending())
        .await
        .unwrap();

    let indexes: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            HeadlessEvent::RuleRevealed { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert!(!indexes.is_empty());
    assert!(indexes.iter().enumerate().all(|(i, &index)| i == index));
}

#[tokio::test(start_paused = true)]
async fn test_unknown_case_is_an_error() {
    let settings = SimSettings::default();
    let mut events = Vec::new();

    let err = play_validation(&settings, "csrf", &mut events, pending())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownScenario { .. }));
    assert!(events.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_the_run() {
    let settings = SimSettings::default();
    let mut events = Vec::new();

    // One rule is revealed at 700 ms before the shutdown at 1000 ms
    let shutdown = tokio::time::sleep(Duration::from_millis(1000));
    let end = play_validation(&settings, "valid-json", &mut events, shutdown)
        .await
        .unwrap();

    assert_eq!(end, RunEnd::Interrupted);
    assert_eq!(
        names(&events),
        ["run_started", "rule_revealed", "run_finished"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_middleware_walks_six_stages() {
    let settings = SimSettings::default();
    let mut events = Vec::new();

    play_middleware(&settings, &mut events, pending())
        .await
        .unwrap();

    let steps: Vec<(usize, usize)> = events
        .iter()
        .filter_map(|e| match e {
            HeadlessEvent::StageActive { step, total, .. } => Some((*step, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(steps, (1..=6).map(|k| (k, 6)).collect::<Vec<_>>());
    assert_eq!(names(&events).last(), Some(&"verdict"));
}

#[tokio::test(start_paused = true)]
async fn test_authn_no_token_scenario() {
    let settings = SimSettings::default();
    let mut events = Vec::new();

    play_authn(&settings, "no-token", &mut events, pending())
        .await
        .unwrap();

    let hops = events
        .iter()
        .filter(|e| matches!(e, HeadlessEvent::HopRevealed { .. }))
        .count();
    assert_eq!(hops, 3);
    match events.last() {
        Some(HeadlessEvent::Verdict { result, .. }) => assert!(result.contains("ChallengeAsync()")),
        other => panic!("expected verdict, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_attack_blocks_requests() {
    let settings = SimSettings::default();
    let mut events = Vec::new();
    let options = RateLimitOptions {
        mode: Mode::Attack,
        duration_ms: 2000,
        seed: 1,
    };

    let end = play_rate_limit(&settings, options, &mut events, pending())
        .await
        .unwrap();
    assert_eq!(end, RunEnd::Completed);

    let packets: Vec<bool> = events
        .iter()
        .filter_map(|e| match e {
            HeadlessEvent::Packet { blocked, .. } => Some(*blocked),
            _ => None,
        })
        .collect();
    assert!(packets.iter().any(|&b| b));
    assert!(!packets[0]);

    match events.last() {
        Some(HeadlessEvent::RateLimitSummary {
            mode,
            passed,
            blocked,
            ..
        }) => {
            assert_eq!(*mode, Mode::Attack);
            assert_eq!((*passed + *blocked) as usize, packets.len());
        }
        other => panic!("expected summary, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_normal_traffic_never_blocks() {
    let settings = SimSettings::default();
    let mut events = Vec::new();
    let options = RateLimitOptions {
        duration_ms: 6000,
        ..RateLimitOptions::default()
    };

    play_rate_limit(&settings, options, &mut events, pending())
        .await
        .unwrap();

    assert!(events
        .iter()
        .all(|e| !matches!(e, HeadlessEvent::Packet { blocked: true, .. })));
}

#[test]
fn test_authz_all_pairs() {
    let mut events = Vec::new();
    evaluate_authz(None, None, &mut events).unwrap();
    assert_eq!(events.len(), 16);
}

#[test]
fn test_authz_single_pair() {
    let mut events = Vec::new();
    evaluate_authz(Some("guest"), Some("/api/billing"), &mut events).unwrap();
    match events.as_slice() {
        [HeadlessEvent::AuthzDecision { status_code, .. }] => assert_eq!(*status_code, 403),
        other => panic!("expected one decision, got {:?}", other),
    }

    let err = evaluate_authz(Some("root"), None, &mut events).unwrap_err();
    assert!(matches!(err, Error::UnknownScenario { kind: "role", .. }));
}

#[test]
fn test_check_reports_every_table() {
    let mut events = Vec::new();
    check_tables(&mut events).unwrap();
    assert_eq!(events.len(), 7);
    assert!(events
        .iter()
        .all(|e| matches!(e, HeadlessEvent::TableChecked { rows, .. } if *rows > 0)));
}

#[test]
fn test_content_is_cleaned() {
    let mut events = Vec::new();
    print_content(&mut events).unwrap();
    match events.as_slice() {
        [HeadlessEvent::Content { site, .. }] => {
            let json = site.to_string();
            assert!(!json.contains("[cite:"));
            assert!(site["hero"].is_object());
        }
        other => panic!("expected content, got {:?}", other),
    }
}

#[test]
fn test_sample_lines_are_numbered_per_file() {
    let mut events = Vec::new();
    print_sample("https", &mut events).unwrap();

    assert!(events
        .iter()
        .any(|e| matches!(e, HeadlessEvent::SampleLine { lang, .. } if lang == "json")));
    assert!(events
        .iter()
        .any(|e| matches!(e, HeadlessEvent::SampleLine { line: 1, .. })));

    assert!(print_sample("graphql", &mut events).is_err());
}

#[test]
fn test_init_writes_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut events = Vec::new();
    write_settings(dir.path(), &mut events).unwrap();

    assert!(dir.path().join("restsec.toml").exists());
    assert_eq!(names(&events), ["settings_written"]);
}
