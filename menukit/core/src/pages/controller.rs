//! Page Controller - Per-Page Transition State Machine
//!
//! One controller per page, created at manager startup and owned by the
//! manager for the whole session. The controller runs the page's entry
//! and exit sequences against its animation player, toggles its
//! presentation surface at the protocol-defined moments, and reports
//! terminal transitions back as [`PageEvent`]s.
//!
//! # Sequences
//!
//! A sequence is a cooperative task with one suspension point per tick,
//! expressed as an explicit two-phase poll:
//!
//! 1. wait until the player reports the target state
//!    ([`ENTRY_STATE`]/[`EXIT_STATE`]) is playing;
//! 2. wait until [`playback_complete`] holds (full progress and not
//!    mid-transition).
//!
//! A phase whose condition already holds is passed through without
//! suspending, so a sequence driven by an instant player completes on
//! the very call that starts it.
//!
//! # Cancellation
//!
//! [`PageController::stop_turning_on`] and
//! [`PageController::stop_turning_off`] drop the in-flight sequence and
//! snap to the opposite terminal state. This is an abrupt cut — the
//! animation is not reversed and never finishes.
//!
//! There is deliberately no timeout on the completion poll: a player
//! that never reaches the expected state stalls this page's transition
//! forever. That is a configuration error in the embedding, not a
//! condition this subsystem recovers from.

use tracing::debug;

use crate::animation::{
    playback_complete, AnimationIntent, AnimationPlayer, ENTRY_STATE, EXIT_STATE,
};
use crate::hooks::{NoopHooks, PageHooks};
use crate::surface::PageSurface;

use super::{PageEvent, PageId, PageState};

/// Which sequence is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SequenceKind {
    Enter,
    Exit,
}

/// Where the in-flight sequence is suspended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SequencePhase {
    /// Waiting for the player to report the target state as playing.
    AwaitingState,
    /// Waiting for the completion predicate to hold.
    AwaitingCompletion,
}

#[derive(Clone, Copy, Debug)]
struct TransitionSequence {
    kind: SequenceKind,
    phase: SequencePhase,
}

impl TransitionSequence {
    fn new(kind: SequenceKind) -> Self {
        Self {
            kind,
            phase: SequencePhase::AwaitingState,
        }
    }
}

/// Per-page transition state machine.
///
/// Owns the page's animation player and presentation surface
/// exclusively. Driven by [`PageManager`](super::PageManager); the drive
/// methods return a [`PageEvent`] when a sequence reaches its terminal
/// state so the manager can confirm queues and fire chained entries.
pub struct PageController<P: PageId> {
    id: P,
    chained_next: Option<P>,
    state: PageState,
    sequence: Option<TransitionSequence>,
    player: Box<dyn AnimationPlayer>,
    surface: Box<dyn PageSurface>,
    hooks: Box<dyn PageHooks<P>>,
}

impl<P: PageId> PageController<P> {
    /// Create a controller for `id`, taking ownership of its player and
    /// surface. The surface starts non-interactable: a page accepts no
    /// input until its entry sequence completes.
    pub fn new(
        id: P,
        player: impl AnimationPlayer + 'static,
        surface: impl PageSurface + 'static,
    ) -> Self {
        let mut surface: Box<dyn PageSurface> = Box::new(surface);
        surface.set_interactable(false);

        Self {
            id,
            chained_next: None,
            state: PageState::Off,
            sequence: None,
            player: Box::new(player),
            surface,
            hooks: Box::new(NoopHooks),
        }
    }

    /// Configure a page to auto-open once this page finishes entering.
    #[must_use]
    pub fn with_chained_next(mut self, next: P) -> Self {
        self.chained_next = Some(next);
        self
    }

    /// Attach lifecycle hooks. Fires `on_init` immediately.
    #[must_use]
    pub fn with_hooks(mut self, hooks: impl PageHooks<P> + 'static) -> Self {
        let mut hooks: Box<dyn PageHooks<P>> = Box::new(hooks);
        hooks.on_init(self.id);
        self.hooks = hooks;
        self
    }

    /// This page's identifier.
    #[must_use]
    pub fn id(&self) -> P {
        self.id
    }

    /// The page chained to auto-open after entry, if any.
    #[must_use]
    pub fn chained_next(&self) -> Option<P> {
        self.chained_next
    }

    /// Change or clear the chained page.
    pub fn set_chained_next(&mut self, next: Option<P>) {
        self.chained_next = next;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Whether the page reads as on (`On` or mid-exit).
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Whether the entry sequence is in flight.
    #[must_use]
    pub fn is_turning_on(&self) -> bool {
        self.state.is_turning_on()
    }

    /// Whether the exit sequence is in flight.
    #[must_use]
    pub fn is_turning_off(&self) -> bool {
        self.state.is_turning_off()
    }

    /// Whether the presentation object is in the active set.
    #[must_use]
    pub fn surface_active(&self) -> bool {
        self.surface.is_active()
    }

    /// Add or remove the presentation object from the active set.
    pub fn set_surface_active(&mut self, active: bool) {
        self.surface.set_active(active);
    }

    /// Read access to the presentation surface.
    #[must_use]
    pub fn surface(&self) -> &dyn PageSurface {
        self.surface.as_ref()
    }

    /// Start the entry sequence.
    ///
    /// No-op if the page already reads as on. Otherwise drops any
    /// in-flight sequence (which also disables a chained auto-advance
    /// that has not fired yet), sets the player intent to entering,
    /// moves to `TurningOn`, and polls the sequence once — with an
    /// already-satisfied player the entry completes synchronously and
    /// the `Entered` event is returned from this call.
    pub fn turn_on(&mut self) -> Option<PageEvent<P>> {
        if self.is_on() {
            return None;
        }

        debug!(page = ?self.id, "page is entering");
        self.hooks.on_begin_enter(self.id);

        self.sequence = None;
        self.player.set_intent(AnimationIntent::enter());
        self.state = PageState::TurningOn;
        self.sequence = Some(TransitionSequence::new(SequenceKind::Enter));
        self.poll_sequence()
    }

    /// Start the exit sequence.
    ///
    /// The interactive surface is disabled immediately — the page stops
    /// accepting input as soon as the exit begins, before the animation
    /// finishes. Sets the player intent to exiting, moves to
    /// `TurningOff`, and polls the sequence once.
    pub fn turn_off(&mut self) -> Option<PageEvent<P>> {
        debug!(page = ?self.id, "page is exiting");
        self.hooks.on_begin_exit(self.id);

        self.sequence = None;
        self.player.set_intent(AnimationIntent::exit());
        self.surface.set_interactable(false);
        self.state = PageState::TurningOff;
        self.sequence = Some(TransitionSequence::new(SequenceKind::Exit));
        self.poll_sequence()
    }

    /// Cancel an in-flight entry sequence.
    ///
    /// No-op unless the page is `TurningOn`. Snaps to `Off` without
    /// waiting for the animation.
    pub fn stop_turning_on(&mut self) {
        if !self.state.is_turning_on() {
            return;
        }
        self.sequence = None;
        self.state = PageState::Off;
    }

    /// Cancel an in-flight exit sequence.
    ///
    /// No-op unless the page is `TurningOff`. Snaps back to `On` without
    /// waiting for the animation.
    pub fn stop_turning_off(&mut self) {
        if !self.state.is_turning_off() {
            return;
        }
        self.sequence = None;
        self.state = PageState::On;
    }

    /// Advance this page by one scheduler tick.
    ///
    /// Steps the owned player, then polls the in-flight sequence.
    /// Returns the terminal event when a sequence completes this tick.
    pub fn tick(&mut self) -> Option<PageEvent<P>> {
        self.player.tick();
        self.poll_sequence()
    }

    /// Poll the in-flight sequence, passing through any phase whose
    /// condition already holds.
    fn poll_sequence(&mut self) -> Option<PageEvent<P>> {
        let sequence = self.sequence.as_mut()?;
        let target = match sequence.kind {
            SequenceKind::Enter => ENTRY_STATE,
            SequenceKind::Exit => EXIT_STATE,
        };

        if sequence.phase == SequencePhase::AwaitingState {
            if !self.player.is_playing_state(target) {
                return None;
            }
            sequence.phase = SequencePhase::AwaitingCompletion;
        }

        if !playback_complete(self.player.normalized_progress(), self.player.in_transition()) {
            return None;
        }

        let kind = sequence.kind;
        self.sequence = None;

        match kind {
            SequenceKind::Enter => {
                debug!(page = ?self.id, "page has entered");
                self.hooks.on_enter(self.id);
                self.state = PageState::On;
                self.surface.set_interactable(true);
                Some(PageEvent::Entered {
                    page: self.id,
                    chain: self.chained_next,
                })
            }
            SequenceKind::Exit => {
                debug!(page = ?self.id, "page has exited");
                self.hooks.on_exit(self.id);
                self.surface.set_alpha(0.0);
                self.state = PageState::Off;
                self.surface.set_active(false);
                Some(PageEvent::Exited { page: self.id })
            }
        }
    }
}
