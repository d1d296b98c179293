//! Animation Player Interface
//!
//! The orchestration core does not implement animation playback. Each
//! page owns a handle to an external animation player and only ever
//! polls it: which named state is playing, how far along it is, and
//! whether it is mid-transition between states. The core drives the
//! player with a pair of boolean intent flags and waits for the
//! completion predicate to hold.
//!
//! # Completion Predicate
//!
//! An entry or exit sequence is complete only when the player reports
//! normalized progress of at least 1.0 **and** is not mid-transition.
//! Both conditions are required: progress alone can read 1.0 while the
//! player is still blending into the next state, which would declare
//! completion too early. [`playback_complete`] captures this as a pure
//! function so it can be tested without any player.

mod scripted;

pub use scripted::ScriptedPlayer;

use serde::{Deserialize, Serialize};

/// Name of the entry animation state.
pub const ENTRY_STATE: &str = "Entry";

/// Name of the exit animation state.
pub const EXIT_STATE: &str = "Exit";

/// Boolean intent pair driving which animation a player runs.
///
/// The flags are mutually informative rather than mutually exclusive:
/// the player decides what to do with the combination, the core only
/// ever sets [`AnimationIntent::enter`] or [`AnimationIntent::exit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationIntent {
    /// The page should be animating into view.
    pub entering: bool,
    /// The page should be animating out of view.
    pub exiting: bool,
}

impl AnimationIntent {
    /// Intent for a page animating into view.
    #[must_use]
    pub const fn enter() -> Self {
        Self {
            entering: true,
            exiting: false,
        }
    }

    /// Intent for a page animating out of view.
    #[must_use]
    pub const fn exit() -> Self {
        Self {
            entering: false,
            exiting: true,
        }
    }

    /// Neutral intent: neither entering nor exiting.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            entering: false,
            exiting: false,
        }
    }
}

/// External animation player, polled once per tick by a page's
/// transition sequence.
///
/// Implementations wrap whatever actually plays the animation (a real
/// animation system, or [`ScriptedPlayer`] for deterministic tests and
/// headless runs).
pub trait AnimationPlayer {
    /// Whether the named animation state is the one currently playing.
    fn is_playing_state(&self, name: &str) -> bool;

    /// Normalized progress of the current state, in `[0.0, 1.0]`.
    fn normalized_progress(&self) -> f32;

    /// Whether the player is mid-transition between two states.
    fn in_transition(&self) -> bool;

    /// Set the intent flags that determine which animation plays.
    fn set_intent(&mut self, intent: AnimationIntent);

    /// Advance the player by one scheduler tick.
    ///
    /// Players that animate on their own clock ignore this; players that
    /// are stepped by the scheduling loop (such as [`ScriptedPlayer`])
    /// override it.
    fn tick(&mut self) {}
}

/// The two-phase completion predicate for entry/exit sequences.
///
/// Returns `true` once `progress` has reached 1.0 and the player is not
/// mid-transition. This is the exact condition a sequence polls each
/// tick after its target state starts playing.
#[must_use]
pub fn playback_complete(progress: f32, in_transition: bool) -> bool {
    progress >= 1.0 && !in_transition
}
