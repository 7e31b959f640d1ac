//! Authentication sequence player and hop layout

use restsec_core::scenario::ScenarioCase;
use restsec_core::sequence::{Hop, AUTH_SCENARIOS};
use tracing::debug;

use super::reveal::RevealRun;
use super::{RunId, UpdateResult};
use crate::config::SequenceSettings;

/// Width of the pill drawn for a self action, in percent.
const SELF_PILL_WIDTH: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceMessage {
    /// Pick a scenario by position in the scenario table
    Select(usize),
    Play,
    Tick { run: RunId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Horizontal placement of one hop, in percent of the canvas width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopGeometry {
    /// Rounded pill centred on the actor's lifeline
    SelfAction { left: i32, width: i32 },
    /// Arrow between two lifelines
    Arrow {
        left: i32,
        width: i32,
        direction: Direction,
        line_left: i32,
        line_width: i32,
    },
}

impl HopGeometry {
    pub fn for_hop(hop: &Hop) -> Self {
        let from = i32::from(hop.from.x_percent());
        let to = i32::from(hop.to.x_percent());

        if hop.is_self() {
            return HopGeometry::SelfAction {
                left: from - 4,
                width: SELF_PILL_WIDTH,
            };
        }

        let left = from.min(to);
        let width = (to - from).abs();
        HopGeometry::Arrow {
            left,
            width,
            direction: if to >= from {
                Direction::Right
            } else {
                Direction::Left
            },
            line_left: left + 1,
            line_width: (width - 2).max(2),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SequencePlayer {
    selected: usize,
    reveal: RevealRun,
}

impl SequencePlayer {
    pub fn new(settings: &SequenceSettings) -> Self {
        Self {
            selected: 0,
            reveal: RevealRun::new(settings.reveal_ms),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scenario(&self) -> &'static ScenarioCase<Hop> {
        &AUTH_SCENARIOS[self.selected]
    }

    pub fn is_playing(&self) -> bool {
        self.reveal.is_running()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.reveal.current_run()
    }

    pub fn revealed_hops(&self) -> &'static [Hop] {
        self.scenario().revealed(self.reveal.revealed())
    }

    /// Outcome line, shown once the last hop is on screen.
    pub fn outcome(&self) -> Option<&'static str> {
        self.reveal.is_done().then(|| self.scenario().result)
    }

    pub fn update(&mut self, msg: SequenceMessage) -> UpdateResult {
        match msg {
            SequenceMessage::Select(index) => {
                debug_assert!(
                    index < AUTH_SCENARIOS.len(),
                    "auth scenario index {index} out of range"
                );
                if index >= AUTH_SCENARIOS.len() {
                    return UpdateResult::none();
                }
                self.selected = index;
                debug!("Sequence player selected '{}'", self.scenario().id);
                self.reveal.cancel()
            }
            SequenceMessage::Play => self.reveal.start(self.scenario().len()),
            SequenceMessage::Tick { run } => self.reveal.tick(run, self.scenario().len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::UpdateAction;
    use restsec_core::sequence::Actor;
    use restsec_core::{Glyph, Tone};

    fn hop(from: Actor, to: Actor) -> Hop {
        Hop {
            from,
            to,
            label: "",
            payload: "",
            tone: Tone::Blue,
            glyph: Glyph::User,
        }
    }

    #[test]
    fn test_geometry_rightward_arrow() {
        let g = HopGeometry::for_hop(&hop(Actor::Client, Actor::AuthServer));
        assert_eq!(
            g,
            HopGeometry::Arrow {
                left: 12,
                width: 28,
                direction: Direction::Right,
                line_left: 13,
                line_width: 26,
            }
        );
    }

    #[test]
    fn test_geometry_leftward_arrow() {
        let g = HopGeometry::for_hop(&hop(Actor::Database, Actor::AuthServer));
        assert!(matches!(
            g,
            HopGeometry::Arrow {
                left: 40,
                width: 28,
                direction: Direction::Left,
                ..
            }
        ));
    }

    #[test]
    fn test_geometry_self_action() {
        let g = HopGeometry::for_hop(&hop(Actor::AuthServer, Actor::AuthServer));
        assert_eq!(g, HopGeometry::SelfAction { left: 36, width: 12 });
    }

    #[test]
    fn test_play_reveals_hops_then_outcome() {
        let mut player = SequencePlayer::new(&SequenceSettings::default());
        player.update(SequenceMessage::Select(3));
        let run = match player.update(SequenceMessage::Play).action {
            Some(UpdateAction::StartTicker { run, every_ms: 800 }) => run,
            other => panic!("expected StartTicker, got {:?}", other),
        };

        player.update(SequenceMessage::Tick { run });
        assert_eq!(player.revealed_hops().len(), 1);
        assert_eq!(player.outcome(), None);

        player.update(SequenceMessage::Tick { run });
        let last = player.update(SequenceMessage::Tick { run });
        assert_eq!(last, UpdateResult::stop());
        assert_eq!(player.revealed_hops().len(), 3);
        assert!(player.outcome().unwrap().contains("ChallengeAsync()"));
    }

    #[test]
    fn test_select_cancels_playback() {
        let mut player = SequencePlayer::new(&SequenceSettings::default());
        player.update(SequenceMessage::Play);
        let run = player.current_run().unwrap();
        player.update(SequenceMessage::Tick { run });

        assert_eq!(player.update(SequenceMessage::Select(1)), UpdateResult::stop());
        assert!(player.revealed_hops().is_empty());
        assert!(!player.is_playing());

        player.update(SequenceMessage::Tick { run });
        assert!(player.revealed_hops().is_empty());
    }
}
