//! Presentation Surface Interface
//!
//! A page's visual presence is owned by an external presentation layer;
//! the core only toggles it. Three knobs matter to the orchestrator:
//!
//! - **activation**: whether the page's presentation object is part of
//!   the active set at all (deactivated pages are removed entirely, not
//!   just hidden)
//! - **interactability**: whether the page's input-intercepting surface
//!   accepts input
//! - **alpha**: the page's visible opacity, zeroed at the end of an exit
//!
//! The scheduling loop also reads activation back: a queued page whose
//! surface is already in the requested activation state is confirmed
//! without running its animation.

/// Presentation surface owned by a single page.
pub trait PageSurface {
    /// Add or remove the page's presentation object from the active set.
    fn set_active(&mut self, active: bool);

    /// Whether the presentation object is currently active.
    fn is_active(&self) -> bool;

    /// Enable or disable the page's input-intercepting surface.
    fn set_interactable(&mut self, interactable: bool);

    /// Whether the page currently accepts input.
    fn is_interactable(&self) -> bool;

    /// Set the page's visible opacity, clamped to `[0.0, 1.0]`.
    fn set_alpha(&mut self, alpha: f32);

    /// The page's current visible opacity.
    fn alpha(&self) -> f32;
}

/// Plain in-memory surface for tests and headless runs.
///
/// Starts inactive, non-interactable, and fully transparent — the state
/// of a page that has never been shown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeadlessSurface {
    active: bool,
    interactable: bool,
    alpha: f32,
}

impl PageSurface for HeadlessSurface {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    fn is_interactable(&self) -> bool {
        self.interactable
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }
}
