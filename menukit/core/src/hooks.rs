//! Embedder Extension Points
//!
//! The original design exposed overridable lifecycle methods on its page
//! and manager types. Here those are capability interfaces the concrete
//! embedder implements; the core calls through the trait and never
//! requires inheritance. Every method has a default no-op body, so an
//! embedder implements only the moments it cares about.
//!
//! Hooks are notifications, not vetoes: they cannot cancel or reorder a
//! transition, only observe it.

use crate::pages::PageId;

/// Lifecycle notifications for a single page.
///
/// `on_begin_enter`/`on_begin_exit` fire when a transition starts (the
/// animation has not finished); `on_enter`/`on_exit` fire when the
/// matching sequence completes.
pub trait PageHooks<P: PageId> {
    /// The page's controller was registered and initialized.
    fn on_init(&mut self, _page: P) {}

    /// The page started its entry sequence.
    fn on_begin_enter(&mut self, _page: P) {}

    /// The page finished entering and now accepts input.
    fn on_enter(&mut self, _page: P) {}

    /// The page started its exit sequence and stopped accepting input.
    fn on_begin_exit(&mut self, _page: P) {}

    /// The page finished exiting and was deactivated.
    fn on_exit(&mut self, _page: P) {}
}

/// Lifecycle notifications for the manager itself.
pub trait ManagerHooks {
    /// The manager finished building its registry.
    fn on_init(&mut self) {}

    /// The scheduling loop was enabled.
    fn on_enable(&mut self) {}

    /// The scheduling loop was disabled.
    fn on_disable(&mut self) {}
}

/// Default hook implementation that observes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHooks;

impl<P: PageId> PageHooks<P> for NoopHooks {}

impl ManagerHooks for NoopHooks {}
