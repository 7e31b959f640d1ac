//! Simulation timing settings
//!
//! Every field has a default, so a settings file only needs the values it
//! overrides.

use serde::{Deserialize, Serialize};

/// Smallest ticker interval accepted after normalization.
pub const MIN_INTERVAL_MS: u64 = 16;

/// All simulator settings, one section per widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimSettings {
    #[serde(default)]
    pub rate_limit: RateLimitSettings,

    #[serde(default)]
    pub scanner: ScannerSettings,

    #[serde(default)]
    pub stepper: StepperSettings,

    #[serde(default)]
    pub sequence: SequenceSettings,

    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

impl SimSettings {
    /// Clamp every interval to [`MIN_INTERVAL_MS`] and counts to at least 1.
    pub fn normalized(mut self) -> Self {
        let r = &mut self.rate_limit;
        for ms in [
            &mut r.tick_ms,
            &mut r.normal_spawn_ms,
            &mut r.attack_spawn_ms,
            &mut r.passed_release_ms,
            &mut r.blocked_release_ms,
            &mut r.packet_lifetime_ms,
        ] {
            *ms = (*ms).max(MIN_INTERVAL_MS);
        }
        r.normal_threshold = r.normal_threshold.max(1);
        r.attack_threshold = r.attack_threshold.max(1);
        r.max_packets = r.max_packets.max(1);
        r.queue_scale = r.queue_scale.max(1);

        self.scanner.reveal_ms = self.scanner.reveal_ms.max(MIN_INTERVAL_MS);
        self.stepper.advance_ms = self.stepper.advance_ms.max(MIN_INTERVAL_MS);
        self.sequence.reveal_ms = self.sequence.reveal_ms.max(MIN_INTERVAL_MS);
        self.clipboard.ack_ms = self.clipboard.ack_ms.max(MIN_INTERVAL_MS);
        self
    }
}

/// Packet flood animation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RateLimitSettings {
    /// Driver ticker period
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default = "default_normal_spawn_ms")]
    pub normal_spawn_ms: u64,

    #[serde(default = "default_attack_spawn_ms")]
    pub attack_spawn_ms: u64,

    /// In-flight count at which normal traffic starts being blocked
    #[serde(default = "default_normal_threshold")]
    pub normal_threshold: u32,

    #[serde(default = "default_attack_threshold")]
    pub attack_threshold: u32,

    /// Delay before a passed packet leaves the in-flight count
    #[serde(default = "default_passed_release_ms")]
    pub passed_release_ms: u64,

    /// Delay before a blocked lane returns to idle
    #[serde(default = "default_blocked_release_ms")]
    pub blocked_release_ms: u64,

    #[serde(default = "default_packet_lifetime_ms")]
    pub packet_lifetime_ms: u64,

    /// Visible packet list capacity
    #[serde(default = "default_max_packets")]
    pub max_packets: usize,

    /// In-flight count that fills the queue bar
    #[serde(default = "default_queue_scale")]
    pub queue_scale: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            normal_spawn_ms: default_normal_spawn_ms(),
            attack_spawn_ms: default_attack_spawn_ms(),
            normal_threshold: default_normal_threshold(),
            attack_threshold: default_attack_threshold(),
            passed_release_ms: default_passed_release_ms(),
            blocked_release_ms: default_blocked_release_ms(),
            packet_lifetime_ms: default_packet_lifetime_ms(),
            max_packets: default_max_packets(),
            queue_scale: default_queue_scale(),
        }
    }
}

fn default_tick_ms() -> u64 {
    50
}

fn default_normal_spawn_ms() -> u64 {
    1300
}

fn default_attack_spawn_ms() -> u64 {
    200
}

fn default_normal_threshold() -> u32 {
    4
}

fn default_attack_threshold() -> u32 {
    2
}

fn default_passed_release_ms() -> u64 {
    1600
}

fn default_blocked_release_ms() -> u64 {
    900
}

fn default_packet_lifetime_ms() -> u64 {
    2000
}

fn default_max_packets() -> usize {
    20
}

fn default_queue_scale() -> u32 {
    4
}

/// Validation scanner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScannerSettings {
    #[serde(default = "default_scanner_reveal_ms")]
    pub reveal_ms: u64,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            reveal_ms: default_scanner_reveal_ms(),
        }
    }
}

fn default_scanner_reveal_ms() -> u64 {
    700
}

/// Middleware chain stepper
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StepperSettings {
    #[serde(default = "default_advance_ms")]
    pub advance_ms: u64,
}

impl Default for StepperSettings {
    fn default() -> Self {
        Self {
            advance_ms: default_advance_ms(),
        }
    }
}

fn default_advance_ms() -> u64 {
    700
}

/// Authentication sequence player
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SequenceSettings {
    #[serde(default = "default_sequence_reveal_ms")]
    pub reveal_ms: u64,
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self {
            reveal_ms: default_sequence_reveal_ms(),
        }
    }
}

fn default_sequence_reveal_ms() -> u64 {
    800
}

/// Copy button acknowledgment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClipboardSettings {
    #[serde(default = "default_ack_ms")]
    pub ack_ms: u64,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            ack_ms: default_ack_ms(),
        }
    }
}

fn default_ack_ms() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = SimSettings::default();
        assert_eq!(s.rate_limit.tick_ms, 50);
        assert_eq!(s.rate_limit.normal_spawn_ms, 1300);
        assert_eq!(s.rate_limit.attack_spawn_ms, 200);
        assert_eq!(s.rate_limit.normal_threshold, 4);
        assert_eq!(s.rate_limit.attack_threshold, 2);
        assert_eq!(s.rate_limit.max_packets, 20);
        assert_eq!(s.scanner.reveal_ms, 700);
        assert_eq!(s.stepper.advance_ms, 700);
        assert_eq!(s.sequence.reveal_ms, 800);
        assert_eq!(s.clipboard.ack_ms, 2000);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let s: SimSettings = toml::from_str("[rate_limit]\nattack_threshold = 3\n").unwrap();
        assert_eq!(s.rate_limit.attack_threshold, 3);
        assert_eq!(s.rate_limit.normal_threshold, 4);
        assert_eq!(s.sequence, SequenceSettings::default());
    }

    #[test]
    fn test_normalized_clamps() {
        let mut s = SimSettings::default();
        s.rate_limit.tick_ms = 0;
        s.rate_limit.attack_threshold = 0;
        s.rate_limit.max_packets = 0;
        s.scanner.reveal_ms = 5;

        let s = s.normalized();
        assert_eq!(s.rate_limit.tick_ms, MIN_INTERVAL_MS);
        assert_eq!(s.rate_limit.attack_threshold, 1);
        assert_eq!(s.rate_limit.max_packets, 1);
        assert_eq!(s.scanner.reveal_ms, MIN_INTERVAL_MS);
        assert_eq!(s.stepper.advance_ms, 700);
    }
}
