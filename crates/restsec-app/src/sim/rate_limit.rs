//! Rate-limit flood simulator
//!
//! One driver ticker feeds `Tick { run, now }`; every tick replays the
//! spawn and release events that fell due since the previous one, in time
//! order, then drops packets past their lifetime. `now` is a monotonic
//! millisecond clock owned by the driver.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use restsec_core::ring_buffer::RingBuffer;
use restsec_core::traffic::{Lane, LANES};
use serde::Serialize;
use tracing::{debug, trace};

use super::{RunId, UpdateResult};
use crate::config::RateLimitSettings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Normal,
    Attack,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "✓ Normal Traffic",
            Mode::Attack => "⚡ Simulate DDoS Attack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneState {
    Idle,
    Active,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardStatus {
    Ok,
    Overload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub passed: u64,
    pub blocked: u64,
}

/// A request on the canvas. Classification is fixed when it is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Packet {
    pub id: u64,
    pub lane: usize,
    pub blocked: bool,
    pub generation: u64,
    pub spawned_at: u64,
    pub release_at: u64,
    pub expires_at: u64,
}

impl Packet {
    pub fn lane_info(&self) -> &'static Lane {
        &LANES[self.lane]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitMessage {
    Start { now: u64 },
    SetMode { mode: Mode, now: u64 },
    Tick { run: RunId, now: u64 },
    Stop,
}

#[derive(Debug, Clone, Copy)]
struct Release {
    at: u64,
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct LaneMark {
    packet: u64,
    blocked: bool,
    until: u64,
}

#[derive(Debug, Clone)]
pub struct RateLimiter {
    settings: RateLimitSettings,
    mode: Mode,
    generation: u64,
    in_flight: u32,
    totals: Totals,
    packets: RingBuffer<Packet>,
    releases: VecDeque<Release>,
    lanes: [Option<LaneMark>; LANES.len()],
    spawned: Vec<Packet>,
    next_spawn: u64,
    next_id: u64,
    run: Option<RunId>,
    last_run: RunId,
    rng: SmallRng,
}

impl RateLimiter {
    pub fn new(settings: &RateLimitSettings, seed: u64) -> Self {
        Self {
            settings: settings.clone(),
            mode: Mode::Normal,
            generation: 0,
            in_flight: 0,
            totals: Totals::default(),
            packets: RingBuffer::new(settings.max_packets),
            releases: VecDeque::new(),
            lanes: [None; LANES.len()],
            spawned: Vec::new(),
            next_spawn: settings.normal_spawn_ms,
            next_id: 1,
            run: None,
            last_run: RunId::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.run
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn threshold(&self) -> u32 {
        match self.mode {
            Mode::Normal => self.settings.normal_threshold,
            Mode::Attack => self.settings.attack_threshold,
        }
    }

    pub fn spawn_period(&self) -> u64 {
        match self.mode {
            Mode::Normal => self.settings.normal_spawn_ms,
            Mode::Attack => self.settings.attack_spawn_ms,
        }
    }

    /// Packets still on screen, oldest first.
    pub fn packets(&self) -> impl Iterator<Item = &Packet> {
        self.packets.iter()
    }

    pub fn packet_count(&self) -> usize {
        self.packets.len()
    }

    /// Packets created by the most recent tick.
    pub fn spawned(&self) -> &[Packet] {
        &self.spawned
    }

    pub fn guard_status(&self) -> GuardStatus {
        if self.in_flight >= self.threshold() {
            GuardStatus::Overload
        } else {
            GuardStatus::Ok
        }
    }

    /// Queue bar fill in `[0, 1]`.
    pub fn queue_fill(&self) -> f64 {
        let scale = f64::from(self.settings.queue_scale.max(1));
        (f64::from(self.in_flight) / scale).min(1.0)
    }

    pub fn lane_state(&self, lane: usize, now: u64) -> LaneState {
        match self.lanes.get(lane).copied().flatten() {
            Some(mark) if now < mark.until => {
                if mark.blocked {
                    LaneState::Blocked
                } else {
                    LaneState::Active
                }
            }
            _ => LaneState::Idle,
        }
    }

    pub fn lane_states(&self, now: u64) -> [LaneState; LANES.len()] {
        std::array::from_fn(|lane| self.lane_state(lane, now))
    }

    /// Id of the packet that last touched `lane`.
    pub fn lane_packet(&self, lane: usize) -> Option<u64> {
        self.lanes.get(lane).copied().flatten().map(|m| m.packet)
    }

    // ─────────────────────────────────────────────────────────────────
    // Update
    // ─────────────────────────────────────────────────────────────────

    pub fn update(&mut self, msg: RateLimitMessage) -> UpdateResult {
        match msg {
            RateLimitMessage::Start { now } => {
                if self.is_running() {
                    trace!("Rate limiter already running, ignoring start");
                    return UpdateResult::none();
                }
                self.last_run = self.last_run.next();
                self.run = Some(self.last_run);
                self.set_mode(self.mode, now);
                debug!("Rate limiter {} started in {:?} mode", self.last_run, self.mode);
                UpdateResult::start(self.last_run, self.settings.tick_ms)
            }

            RateLimitMessage::SetMode { mode, now } => {
                self.set_mode(mode, now);
                UpdateResult::none()
            }

            RateLimitMessage::Tick { run, now } => {
                if self.run != Some(run) {
                    trace!("Dropping stale rate-limit tick for {}", run);
                    return UpdateResult::none();
                }
                self.advance(now);
                UpdateResult::none()
            }

            RateLimitMessage::Stop => {
                if self.run.take().is_some() {
                    debug!("Rate limiter stopped");
                    UpdateResult::stop()
                } else {
                    UpdateResult::none()
                }
            }
        }
    }

    /// Switch traffic mode. Counters restart from zero and releases from
    /// packets spawned before the switch no longer count.
    pub fn set_mode(&mut self, mode: Mode, now: u64) {
        self.mode = mode;
        self.generation += 1;
        self.in_flight = 0;
        self.totals = Totals::default();
        self.releases.clear();
        self.next_spawn = now + self.spawn_period();
        debug!(
            "Rate limiter mode {:?} (generation {}, threshold {})",
            mode,
            self.generation,
            self.threshold()
        );
    }

    /// Replay every event due at or before `now`.
    pub fn advance(&mut self, now: u64) {
        self.spawned.clear();

        // Catch-up after a long stall only replays spawns that could still
        // be on screen.
        let horizon = now.saturating_sub(self.settings.packet_lifetime_ms);
        if self.next_spawn < horizon {
            let period = self.spawn_period().max(1);
            let missed = (horizon - self.next_spawn) / period;
            self.next_spawn += missed * period;
            trace!("Skipped {} missed spawns", missed);
        }

        loop {
            let release_due = self
                .releases
                .front()
                .map(|r| r.at)
                .filter(|&at| at <= now && at <= self.next_spawn);

            if let Some(at) = release_due {
                if let Some(release) = self.releases.pop_front() {
                    if release.generation == self.generation {
                        self.in_flight = self.in_flight.saturating_sub(1);
                    }
                    trace!("Released packet slot at {}", at);
                }
            } else if self.next_spawn <= now {
                let at = self.next_spawn;
                self.spawn(at);
                self.next_spawn = at + self.spawn_period().max(1);
            } else {
                break;
            }
        }

        self.packets.retain(|p| p.expires_at > now);
    }

    fn spawn(&mut self, at: u64) {
        let lane = self.rng.gen_range(0..LANES.len());
        let blocked = self.in_flight >= self.threshold();

        let release_at = at
            + if blocked {
                self.settings.blocked_release_ms
            } else {
                self.settings.passed_release_ms
            };

        if blocked {
            self.totals.blocked += 1;
        } else {
            self.in_flight += 1;
            self.totals.passed += 1;
            self.releases.push_back(Release {
                at: release_at,
                generation: self.generation,
            });
        }

        let packet = Packet {
            id: self.next_id,
            lane,
            blocked,
            generation: self.generation,
            spawned_at: at,
            release_at,
            expires_at: at + self.settings.packet_lifetime_ms,
        };
        self.next_id += 1;

        self.lanes[lane] = Some(LaneMark {
            packet: packet.id,
            blocked,
            until: release_at,
        });
        self.packets.push(packet);
        self.spawned.push(packet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::UpdateAction;

    fn started(settings: &RateLimitSettings, mode: Mode) -> (RateLimiter, RunId) {
        let mut limiter = RateLimiter::new(settings, 7);
        let run = match limiter.update(RateLimitMessage::Start { now: 0 }).action {
            Some(UpdateAction::StartTicker { run, every_ms }) => {
                assert_eq!(every_ms, settings.tick_ms);
                run
            }
            other => panic!("expected StartTicker, got {:?}", other),
        };
        if mode != limiter.mode() {
            limiter.update(RateLimitMessage::SetMode { mode, now: 0 });
        }
        (limiter, run)
    }

    /// Drive the limiter with the configured tick period up to `until`.
    fn drive(limiter: &mut RateLimiter, run: RunId, from: u64, until: u64, step: u64) {
        let mut now = from;
        while now <= until {
            limiter.update(RateLimitMessage::Tick { run, now });
            now += step;
        }
    }

    #[test]
    fn test_normal_traffic_passes() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Normal);

        drive(&mut limiter, run, 0, 6500, 50);

        let totals = limiter.totals();
        assert_eq!(totals.passed, 5);
        assert_eq!(totals.blocked, 0);
        assert_eq!(limiter.guard_status(), GuardStatus::Ok);
    }

    #[test]
    fn test_attack_blocks_over_threshold() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Attack);

        drive(&mut limiter, run, 0, 600, 50);

        // Spawns at 200 and 400 pass, 600 meets the threshold of 2
        assert_eq!(limiter.totals(), Totals { passed: 2, blocked: 1 });
        assert_eq!(limiter.in_flight(), 2);
        assert_eq!(limiter.guard_status(), GuardStatus::Overload);
        assert_eq!(limiter.queue_fill(), 0.5);
    }

    #[test]
    fn test_release_before_spawn_on_same_instant() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Attack);

        drive(&mut limiter, run, 0, 1800, 50);

        // The slot taken at 200 frees at 1800, the spawn at 1800 takes it
        let last = limiter.spawned().last().copied().unwrap();
        assert_eq!(last.spawned_at, 1800);
        assert!(!last.blocked);
        assert_eq!(limiter.in_flight(), 2);
    }

    #[test]
    fn test_set_mode_resets_counters_and_ignores_old_releases() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Attack);
        drive(&mut limiter, run, 0, 1000, 50);
        assert!(limiter.totals().passed > 0);

        limiter.update(RateLimitMessage::SetMode {
            mode: Mode::Normal,
            now: 1000,
        });
        assert_eq!(limiter.in_flight(), 0);
        assert_eq!(limiter.totals(), Totals::default());

        // First normal spawn at 2300; releases from attack packets land before it
        drive(&mut limiter, run, 1050, 2300, 50);
        assert_eq!(limiter.in_flight(), 1);
        assert_eq!(limiter.totals(), Totals { passed: 1, blocked: 0 });
    }

    #[test]
    fn test_reselecting_same_mode_also_resets() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Normal);
        drive(&mut limiter, run, 0, 1300, 50);
        let generation = limiter.generation();

        limiter.update(RateLimitMessage::SetMode {
            mode: Mode::Normal,
            now: 1350,
        });
        assert_eq!(limiter.totals(), Totals::default());
        assert_eq!(limiter.generation(), generation + 1);
    }

    #[test]
    fn test_classification_never_changes() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Attack);

        let mut seen = std::collections::HashMap::new();
        let mut now = 0;
        while now <= 5000 {
            limiter.update(RateLimitMessage::Tick { run, now });
            for p in limiter.packets() {
                let first = *seen.entry(p.id).or_insert(p.blocked);
                assert_eq!(first, p.blocked);
            }
            now += 50;
        }
        assert!(seen.values().any(|&b| b));
        assert!(seen.values().any(|&b| !b));
    }

    #[test]
    fn test_packet_list_is_bounded() {
        let settings = RateLimitSettings {
            packet_lifetime_ms: 60_000,
            ..RateLimitSettings::default()
        };
        let (mut limiter, run) = started(&settings, Mode::Attack);

        drive(&mut limiter, run, 0, 20_000, 50);
        assert_eq!(limiter.packet_count(), settings.max_packets);
    }

    #[test]
    fn test_packets_expire() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Normal);

        drive(&mut limiter, run, 0, 1300, 50);
        assert_eq!(limiter.packet_count(), 1);
        drive(&mut limiter, run, 1350, 3300, 50);
        // Spawned at 1300 expires at 3300; the one from 2600 remains
        assert_eq!(limiter.packet_count(), 1);
        assert_eq!(limiter.packets().next().map(|p| p.spawned_at), Some(2600));
    }

    #[test]
    fn test_lane_state_follows_latest_packet() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Attack);
        drive(&mut limiter, run, 0, 600, 50);

        let blocked = limiter.spawned().last().copied().unwrap();
        assert!(blocked.blocked);
        assert_eq!(limiter.lane_packet(blocked.lane), Some(blocked.id));
        assert_eq!(limiter.lane_state(blocked.lane, 600), LaneState::Blocked);
        assert_eq!(limiter.lane_state(blocked.lane, 600 + 900), LaneState::Idle);
        assert_eq!(limiter.lane_state(99, 600), LaneState::Idle);
    }

    #[test]
    fn test_stale_tick_and_stop() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Attack);

        assert_eq!(limiter.update(RateLimitMessage::Stop), UpdateResult::stop());
        limiter.update(RateLimitMessage::Tick { run, now: 5000 });
        assert_eq!(limiter.totals(), Totals::default());

        let again = limiter.update(RateLimitMessage::Start { now: 5000 });
        assert!(matches!(again.action, Some(UpdateAction::StartTicker { run: r, .. }) if r != run));
    }

    #[test]
    fn test_long_stall_catch_up_is_capped() {
        let settings = RateLimitSettings::default();
        let (mut limiter, run) = started(&settings, Mode::Attack);

        limiter.update(RateLimitMessage::Tick {
            run,
            now: 10 * 60 * 1000,
        });
        let spawned = limiter.spawned().len() as u64;
        assert!(spawned <= settings.packet_lifetime_ms / settings.attack_spawn_ms + 1);
        assert!(spawned > 0);
    }
}
