//! Scripted Animation Player
//!
//! A deterministic, tick-stepped stand-in for a real animation system.
//! The demo binary and the test suite use it to drive page transitions
//! without any rendering: every timing aspect is expressed in scheduler
//! ticks, so scenarios replay identically on every run.

use super::{AnimationIntent, AnimationPlayer, ENTRY_STATE, EXIT_STATE};

/// Deterministic animation player stepped by the scheduling loop.
///
/// Timing is configured as three tick counts, all measured from the
/// moment the intent flags select a new target state:
///
/// - `arm_ticks`: ticks before the target state reports as playing
///   (models the player's internal dispatch latency)
/// - `play_ticks`: ticks for normalized progress to go from 0.0 to 1.0
///   once the state is playing
/// - `blend_ticks`: ticks the player reports as mid-transition after the
///   state starts playing
///
/// With all three at zero ([`ScriptedPlayer::instant`]) a sequence
/// completes on the same tick it starts.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedPlayer {
    target: Option<&'static str>,
    arm_ticks: u32,
    play_ticks: u32,
    blend_ticks: u32,
    ticks: u32,
}

impl ScriptedPlayer {
    /// Create a player with the given tick timings.
    #[must_use]
    pub fn new(arm_ticks: u32, play_ticks: u32, blend_ticks: u32) -> Self {
        Self {
            target: None,
            arm_ticks,
            play_ticks,
            blend_ticks,
            ticks: 0,
        }
    }

    /// Create a player whose animations complete immediately.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(0, 0, 0)
    }

    /// Ticks elapsed since the current target state was selected.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Whether the target state has started playing.
    fn armed(&self) -> bool {
        self.target.is_some() && self.ticks >= self.arm_ticks
    }
}

impl AnimationPlayer for ScriptedPlayer {
    fn is_playing_state(&self, name: &str) -> bool {
        self.armed() && self.target.is_some_and(|target| target == name)
    }

    fn normalized_progress(&self) -> f32 {
        if !self.armed() {
            return 0.0;
        }
        if self.play_ticks == 0 {
            return 1.0;
        }
        let progressed = self.ticks - self.arm_ticks;
        (progressed as f32 / self.play_ticks as f32).min(1.0)
    }

    fn in_transition(&self) -> bool {
        self.armed() && (self.ticks - self.arm_ticks) < self.blend_ticks
    }

    fn set_intent(&mut self, intent: AnimationIntent) {
        let next = if intent.entering {
            Some(ENTRY_STATE)
        } else if intent.exiting {
            Some(EXIT_STATE)
        } else {
            None
        };

        // Re-asserting the current intent is a no-op; only a state
        // change restarts the timeline.
        if next != self.target {
            self.target = next;
            self.ticks = 0;
        }
    }

    fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }
}
