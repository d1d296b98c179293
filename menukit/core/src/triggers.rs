//! Trigger Bindings
//!
//! Input dispatch lives outside this crate: something else decides that
//! a button was released or a pointer hovered. What belongs here is the
//! binding between such an activation and the page requests it issues.
//! A trigger collaborator holds one of these bindings and runs it
//! against the manager when its input condition fires.
//!
//! [`HoldTrigger`] covers the hold-to-activate pattern: the activation
//! condition itself is time-based (press, wait, hold), so it is a small
//! tick-driven state machine rather than a plain binding.

use crate::pages::{PageId, PageManager};

/// Binding that closes one set of pages and opens another.
///
/// Off-requests are issued before on-requests, matching the scheduler's
/// own off-before-on priority.
#[derive(Clone, Debug, Default)]
pub struct PageAction<P: PageId> {
    /// Pages to request off, in order.
    pub close: Vec<P>,
    /// Pages to request on, in order.
    pub open: Vec<P>,
    /// Whether the requests bypass the pending queues.
    pub synchronous: bool,
}

impl<P: PageId> PageAction<P> {
    /// Create an empty action.
    #[must_use]
    pub fn new() -> Self {
        Self {
            close: Vec::new(),
            open: Vec::new(),
            synchronous: false,
        }
    }

    /// Add a page to close.
    #[must_use]
    pub fn closing(mut self, page: P) -> Self {
        self.close.push(page);
        self
    }

    /// Add a page to open.
    #[must_use]
    pub fn opening(mut self, page: P) -> Self {
        self.open.push(page);
        self
    }

    /// Make the requests bypass the pending queues.
    #[must_use]
    pub fn synchronous(mut self) -> Self {
        self.synchronous = true;
        self
    }

    /// Issue the bound requests against `manager`.
    pub fn run(&self, manager: &mut PageManager<P>) {
        for &page in &self.close {
            manager.turn_page_off(page, self.synchronous);
        }
        for &page in &self.open {
            manager.turn_page_on(None, page, self.synchronous);
        }
    }
}

/// Binding that loads one page, optionally replacing another.
#[derive(Clone, Copy, Debug)]
pub struct LoadPageAction<P: PageId> {
    /// Page to turn on.
    pub page_to_load: P,
    /// Page to drive off first, if any.
    pub page_to_remove: Option<P>,
    /// Whether the request bypasses the pending queues.
    pub synchronous: bool,
}

impl<P: PageId> LoadPageAction<P> {
    /// Create a binding that loads `page`.
    #[must_use]
    pub fn new(page: P) -> Self {
        Self {
            page_to_load: page,
            page_to_remove: None,
            synchronous: false,
        }
    }

    /// Replace `page` instead of opening alongside it.
    #[must_use]
    pub fn replacing(mut self, page: P) -> Self {
        self.page_to_remove = Some(page);
        self
    }

    /// Make the request bypass the pending queues.
    #[must_use]
    pub fn synchronous(mut self) -> Self {
        self.synchronous = true;
        self
    }

    /// Issue the bound request against `manager`.
    pub fn run(&self, manager: &mut PageManager<P>) {
        manager.turn_page_on(self.page_to_remove, self.page_to_load, self.synchronous);
    }
}

/// Tick-driven hold-to-activate state machine.
///
/// Press starts the timeline; nothing accumulates during the first
/// `delay_ticks`, then fill progress runs toward `required_ticks`.
/// Releasing at any point resets. The trigger fires exactly once per
/// press, from [`HoldTrigger::tick`], and disarms until the next press.
/// [`HoldTrigger::progress`] reports the normalized fill so a frontend
/// can render the hold indicator.
#[derive(Clone, Copy, Debug)]
pub struct HoldTrigger {
    delay_ticks: u32,
    required_ticks: u32,
    held_ticks: Option<u32>,
}

impl HoldTrigger {
    /// Create a trigger that fires after `delay_ticks` of grace plus
    /// `required_ticks` of accumulated hold.
    #[must_use]
    pub fn new(delay_ticks: u32, required_ticks: u32) -> Self {
        Self {
            delay_ticks,
            required_ticks,
            held_ticks: None,
        }
    }

    /// The press began. Restarts the timeline if already held.
    pub fn press(&mut self) {
        self.held_ticks = Some(0);
    }

    /// The press ended before completion. Resets fill and disarms.
    pub fn release(&mut self) {
        self.held_ticks = None;
    }

    /// Whether a press is currently being held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held_ticks.is_some()
    }

    /// Normalized fill in `[0.0, 1.0]`: 0 until the delay passes, then
    /// the fraction of the hold requirement accumulated so far.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let Some(held) = self.held_ticks else {
            return 0.0;
        };
        if held <= self.delay_ticks {
            return 0.0;
        }
        if self.required_ticks == 0 {
            return 1.0;
        }
        ((held - self.delay_ticks) as f32 / self.required_ticks as f32).min(1.0)
    }

    /// Advance the hold by one tick. Returns `true` on the tick the
    /// hold requirement is met; the trigger then disarms itself.
    pub fn tick(&mut self) -> bool {
        let Some(held) = self.held_ticks.as_mut() else {
            return false;
        };
        *held = held.saturating_add(1);
        if *held >= self.delay_ticks.saturating_add(self.required_ticks) {
            self.held_ticks = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ScriptedPlayer;
    use crate::config::ManagerConfig;
    use crate::pages::PageController;
    use crate::surface::HeadlessSurface;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum TestPage {
        Home,
        Settings,
        Help,
    }

    fn manager() -> PageManager<TestPage> {
        let pages = vec![
            PageController::new(
                TestPage::Home,
                ScriptedPlayer::instant(),
                HeadlessSurface::default(),
            ),
            PageController::new(
                TestPage::Settings,
                ScriptedPlayer::instant(),
                HeadlessSurface::default(),
            ),
            PageController::new(
                TestPage::Help,
                ScriptedPlayer::instant(),
                HeadlessSurface::default(),
            ),
        ];
        PageManager::new(pages, ManagerConfig::default()).unwrap()
    }

    #[test]
    fn test_page_action_closes_then_opens() {
        let mut manager = manager();
        manager.turn_page_on(None, TestPage::Home, true);

        PageAction::new()
            .closing(TestPage::Home)
            .opening(TestPage::Settings)
            .opening(TestPage::Help)
            .run(&mut manager);

        assert_eq!(manager.pending_off(), &[TestPage::Home]);
        assert_eq!(manager.pending_on(), &[TestPage::Settings, TestPage::Help]);
    }

    #[test]
    fn test_synchronous_page_action_applies_immediately() {
        let mut manager = manager();

        PageAction::new()
            .opening(TestPage::Settings)
            .synchronous()
            .run(&mut manager);

        assert!(manager.page_is_on(TestPage::Settings));
        assert!(manager.pending_on().is_empty());
    }

    #[test]
    fn test_load_page_action_replaces() {
        let mut manager = manager();
        manager.turn_page_on(None, TestPage::Home, true);

        LoadPageAction::new(TestPage::Settings)
            .replacing(TestPage::Home)
            .run(&mut manager);
        manager.tick();
        manager.tick();

        assert!(!manager.page_is_on(TestPage::Home));
        assert!(manager.page_is_on(TestPage::Settings));
    }

    #[test]
    fn test_hold_trigger_respects_delay_and_requirement() {
        let mut hold = HoldTrigger::new(2, 3);
        hold.press();

        // Delay ticks accumulate no progress.
        assert!(!hold.tick());
        assert!(!hold.tick());
        assert!(hold.progress() < f32::EPSILON);

        // Fill phase.
        assert!(!hold.tick());
        assert!(hold.progress() > 0.0);
        assert!(!hold.tick());
        assert!(hold.tick());
    }

    #[test]
    fn test_hold_trigger_fires_once_then_disarms() {
        let mut hold = HoldTrigger::new(0, 1);
        hold.press();
        assert!(hold.tick());

        assert!(!hold.is_held());
        for _ in 0..4 {
            assert!(!hold.tick());
        }
    }

    #[test]
    fn test_hold_trigger_release_resets() {
        let mut hold = HoldTrigger::new(1, 4);
        hold.press();
        for _ in 0..4 {
            hold.tick();
        }
        assert!(hold.progress() > 0.0);

        hold.release();
        assert!(hold.progress() < f32::EPSILON);
        assert!(!hold.tick());

        // A fresh press starts the timeline over.
        hold.press();
        for _ in 0..4 {
            assert!(!hold.tick());
        }
        assert!(hold.tick());
    }
}
