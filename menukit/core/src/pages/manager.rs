//! Page Manager - Registry, Pending Queues, and the Scheduling Loop
//!
//! The manager is the single source of truth for which pages are
//! pending a transition and the sole driver of the page controllers.
//! Trigger collaborators (input handlers, other pages) call
//! [`PageManager::turn_page_on`] / [`PageManager::turn_page_off`];
//! requests are validated against current and pending state, then
//! either applied immediately (synchronous) or queued for the
//! scheduling loop.
//!
//! # Scheduling Loop
//!
//! [`PageManager::tick`] runs once per tick, driven externally. Each
//! tick it advances in-flight sequences, steps replace-page waiters,
//! and then services the queues — and **off-requests have strict
//! priority**: while the off-queue is non-empty at the start of the
//! pass, the on-queue is not touched. Pages exit before new ones enter.
//!
//! Within a queue, requests are serviced in insertion order. Servicing
//! only *starts* a transition, so transitions of different pages may be
//! in flight concurrently; the ordering guarantee is about initiation,
//! not completion.
//!
//! # Ownership
//!
//! There is no ambient singleton. The manager is an owned value the
//! embedder constructs once and passes explicitly wherever requests are
//! made, which keeps the core testable in isolation.

use std::collections::HashMap;

use tracing::warn;

use crate::config::ManagerConfig;
use crate::error::RegistryError;
use crate::hooks::{ManagerHooks, NoopHooks};

use super::{PageController, PageEvent, PageId, PageState};

/// Where a replace-page waiter is suspended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WaiterPhase {
    /// Issue the off-request for the page being replaced.
    RequestOff,
    /// Asynchronous only: wait until the replaced page no longer reads
    /// as on, then request the replacement.
    AwaitExit,
}

/// Cooperative task implementing "replace page A with page B" as a
/// sequential composition of off-then-on.
#[derive(Clone, Copy, Debug)]
struct ReplaceWaiter<P: PageId> {
    remove: P,
    load: P,
    synchronous: bool,
    phase: WaiterPhase,
}

impl<P: PageId> ReplaceWaiter<P> {
    fn new(remove: P, load: P, synchronous: bool) -> Self {
        Self {
            remove,
            load,
            synchronous,
            phase: WaiterPhase::RequestOff,
        }
    }
}

/// Registry of pages plus the pending-transition queues and the
/// scheduling loop that drives them.
///
/// Built once at startup from a fixed list of controllers; the registry
/// is immutable afterwards. Controllers live for the whole session and
/// are only dropped with the manager itself.
pub struct PageManager<P: PageId> {
    registry: HashMap<P, PageController<P>>,
    /// Registration order, for deterministic iteration.
    page_order: Vec<P>,
    off_queue: Vec<P>,
    on_queue: Vec<P>,
    waiters: Vec<ReplaceWaiter<P>>,
    config: ManagerConfig<P>,
    hooks: Box<dyn ManagerHooks>,
    enabled: bool,
    ticks_elapsed: u64,
    entry_requested: bool,
}

impl<P: PageId> PageManager<P> {
    /// Build the registry from a fixed list of controllers.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicatePage`] if two controllers carry
    /// the same identifier. This is a fatal configuration error; callers
    /// are expected to let it halt initialization.
    pub fn new(
        pages: Vec<PageController<P>>,
        config: ManagerConfig<P>,
    ) -> Result<Self, RegistryError<P>> {
        let mut registry = HashMap::with_capacity(pages.len());
        let mut page_order = Vec::with_capacity(pages.len());

        for page in pages {
            let id = page.id();
            if registry.insert(id, page).is_some() {
                return Err(RegistryError::DuplicatePage(id));
            }
            page_order.push(id);
        }

        Ok(Self {
            registry,
            page_order,
            off_queue: Vec::new(),
            on_queue: Vec::new(),
            waiters: Vec::new(),
            config,
            hooks: Box::new(NoopHooks),
            enabled: true,
            ticks_elapsed: 0,
            entry_requested: false,
        })
    }

    /// Attach manager lifecycle hooks. Fires `on_init` immediately.
    #[must_use]
    pub fn with_hooks(mut self, hooks: impl ManagerHooks + 'static) -> Self {
        let mut hooks: Box<dyn ManagerHooks> = Box::new(hooks);
        hooks.on_init();
        self.hooks = hooks;
        self
    }

    /// Enable or disable the scheduling loop.
    ///
    /// While disabled, [`PageManager::tick`] is a no-op: queued requests
    /// keep their place and in-flight sequences freeze, since the
    /// manager is the only driver in the cooperative model.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.hooks.on_enable();
        } else {
            self.hooks.on_disable();
        }
    }

    /// Whether the scheduling loop is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run one pass of the scheduling loop.
    ///
    /// Order within a tick: the startup entry request (once its delay
    /// has elapsed), in-flight sequences, replace-page waiters, then the
    /// pending queues with off-before-on priority.
    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }

        if !self.entry_requested && self.ticks_elapsed >= self.config.entry_delay_ticks {
            self.entry_requested = true;
            if let Some(entry) = self.config.entry {
                self.turn_page_on(None, entry, false);
            }
        }

        self.advance_controllers();
        self.advance_waiters();
        self.service_queues();

        self.ticks_elapsed += 1;
    }

    /// Request that `page_to_load` turn on, optionally replacing
    /// `page_to_remove` first.
    ///
    /// Idempotent while the target is already queued or entering, and a
    /// no-op when the target is already on. A target that is mid-exit
    /// has its exit cancelled (it snaps back to on) before the request
    /// proceeds. With `page_to_remove` set, a waiter task first drives
    /// the removed page off, then re-applies this request for the
    /// target. Synchronous requests bypass the pending queue and start
    /// the transition on the spot; asynchronous requests join
    /// [`PageManager::pending_on`].
    pub fn turn_page_on(&mut self, page_to_remove: Option<P>, page_to_load: P, synchronous: bool) {
        if !self.registry.contains_key(&page_to_load) {
            warn!(page = ?page_to_load, "ignoring turn-on request for unregistered page");
            return;
        }
        if self.on_queue.contains(&page_to_load) {
            return;
        }
        if self.page_is_turning_on(page_to_load) {
            return;
        }
        if self.page_is_on(page_to_load) {
            if !self.page_is_turning_off(page_to_load) {
                // Already satisfied.
                return;
            }
            // Mid-exit: cancel the turn-off and keep the page on.
            self.off_queue.retain(|queued| *queued != page_to_load);
            if let Some(controller) = self.registry.get_mut(&page_to_load) {
                controller.stop_turning_off();
            }
        }

        match page_to_remove {
            None => {
                if synchronous {
                    let event = self.registry.get_mut(&page_to_load).and_then(|controller| {
                        controller.set_surface_active(true);
                        controller.turn_on()
                    });
                    if let Some(event) = event {
                        self.dispatch(event);
                    }
                } else {
                    self.on_queue.push(page_to_load);
                }
            }
            Some(remove) => {
                self.waiters
                    .push(ReplaceWaiter::new(remove, page_to_load, synchronous));
            }
        }
    }

    /// Request that `page` turn off.
    ///
    /// Idempotent while the page is already queued or exiting, and a
    /// no-op when the page is already off. A page that is mid-entry has
    /// its entry cancelled instead — it snaps to off and the request
    /// ends there. Synchronous requests start the exit on the spot;
    /// asynchronous requests join [`PageManager::pending_off`].
    pub fn turn_page_off(&mut self, page: P, synchronous: bool) {
        if !self.registry.contains_key(&page) {
            warn!(page = ?page, "ignoring turn-off request for unregistered page");
            return;
        }
        if self.off_queue.contains(&page) {
            return;
        }
        if self.page_is_turning_off(page) {
            return;
        }
        if !self.page_is_on(page) {
            if !self.page_is_turning_on(page) {
                // Already satisfied.
                return;
            }
            // Mid-entry: abandon the turn-on and leave the page off.
            self.on_queue.retain(|queued| *queued != page);
            if let Some(controller) = self.registry.get_mut(&page) {
                controller.stop_turning_on();
            }
            return;
        }

        if synchronous {
            let event = self
                .registry
                .get_mut(&page)
                .and_then(PageController::turn_off);
            if let Some(event) = event {
                self.dispatch(event);
            }
        } else {
            self.off_queue.push(page);
        }
    }

    /// Confirm that a page finished entering, clearing its pending
    /// entry. No-op when the page never queued (synchronous bypass).
    pub fn confirm_page_has_entered(&mut self, page: P) {
        self.on_queue.retain(|queued| *queued != page);
    }

    /// Confirm that a page finished exiting, clearing its pending
    /// entry. No-op when the page never queued (synchronous bypass).
    pub fn confirm_page_has_exited(&mut self, page: P) {
        self.off_queue.retain(|queued| *queued != page);
    }

    /// Whether `page` reads as on. Unknown pages log a diagnostic and
    /// read as `false`.
    #[must_use]
    pub fn page_is_on(&self, page: P) -> bool {
        self.lookup(page).is_some_and(PageController::is_on)
    }

    /// Whether `page` is running its entry sequence. Unknown pages log
    /// a diagnostic and read as `false`.
    #[must_use]
    pub fn page_is_turning_on(&self, page: P) -> bool {
        self.lookup(page).is_some_and(PageController::is_turning_on)
    }

    /// Whether `page` is running its exit sequence. Unknown pages log a
    /// diagnostic and read as `false`.
    #[must_use]
    pub fn page_is_turning_off(&self, page: P) -> bool {
        self.lookup(page).is_some_and(PageController::is_turning_off)
    }

    /// Lifecycle state of `page`, or `None` for an unknown page.
    #[must_use]
    pub fn page_state(&self, page: P) -> Option<PageState> {
        self.lookup(page).map(PageController::state)
    }

    /// Read access to a page's controller, or `None` for an unknown
    /// page (logged as a diagnostic).
    #[must_use]
    pub fn page(&self, page: P) -> Option<&PageController<P>> {
        self.lookup(page)
    }

    /// Whether `page` is registered with this manager.
    #[must_use]
    pub fn page_exists(&self, page: P) -> bool {
        self.registry.contains_key(&page)
    }

    /// Whether any registered page reads as on.
    #[must_use]
    pub fn any_page_is_on(&self) -> bool {
        self.page_order.iter().any(|page| self.page_is_on(*page))
    }

    /// Whether any registered page outside `keep` reads as on.
    #[must_use]
    pub fn pages_minus_filter_are_on(&self, keep: &[P]) -> bool {
        self.page_order
            .iter()
            .any(|page| !keep.contains(page) && self.page_is_on(*page))
    }

    /// Asynchronously turn off every registered page outside `keep`.
    pub fn clear_pages_with_filter(&mut self, keep: &[P]) {
        for page in self.page_order.clone() {
            if !keep.contains(&page) {
                self.turn_page_off(page, false);
            }
        }
    }

    /// Synchronously turn off every registered page.
    pub fn close_all_pages(&mut self) {
        for page in self.page_order.clone() {
            self.turn_page_off(page, true);
        }
    }

    /// Identifiers of all registered pages, in registration order.
    pub fn page_ids(&self) -> impl Iterator<Item = P> + '_ {
        self.page_order.iter().copied()
    }

    /// Snapshot of the pending turn-on queue, in insertion order.
    #[must_use]
    pub fn pending_on(&self) -> &[P] {
        &self.on_queue
    }

    /// Snapshot of the pending turn-off queue, in insertion order.
    #[must_use]
    pub fn pending_off(&self) -> &[P] {
        &self.off_queue
    }

    /// Look up a controller, logging a diagnostic on a miss.
    fn lookup(&self, page: P) -> Option<&PageController<P>> {
        let controller = self.registry.get(&page);
        if controller.is_none() {
            warn!(page = ?page, "page is not registered with this manager");
        }
        controller
    }

    /// Advance every in-flight sequence one step, in registration
    /// order, dispatching terminal events as they land.
    fn advance_controllers(&mut self) {
        for page in self.page_order.clone() {
            let event = self
                .registry
                .get_mut(&page)
                .and_then(PageController::tick);
            if let Some(event) = event {
                self.dispatch(event);
            }
        }
    }

    /// Step every replace-page waiter one suspension point.
    fn advance_waiters(&mut self) {
        let waiters = std::mem::take(&mut self.waiters);
        let mut still_waiting = Vec::new();

        for mut waiter in waiters {
            if self.step_waiter(&mut waiter) {
                still_waiting.push(waiter);
            }
        }

        // Stepping a waiter only issues plain requests, which never
        // spawn new waiters, so the taken list is still the whole set.
        self.waiters = still_waiting;
    }

    /// Advance one waiter. Returns `true` while it is still suspended.
    fn step_waiter(&mut self, waiter: &mut ReplaceWaiter<P>) -> bool {
        if waiter.phase == WaiterPhase::RequestOff {
            self.turn_page_off(waiter.remove, waiter.synchronous);
            if waiter.synchronous {
                self.turn_page_on(None, waiter.load, true);
                return false;
            }
            waiter.phase = WaiterPhase::AwaitExit;
        }

        if self.page_is_on(waiter.remove) {
            return true;
        }
        self.turn_page_on(None, waiter.load, false);
        false
    }

    /// Service the pending queues for this tick.
    ///
    /// Off-requests win: while the off-queue is non-empty at the start
    /// of the pass, the on-queue is left untouched, even if every exit
    /// completes within this same tick.
    fn service_queues(&mut self) {
        if self.off_queue.is_empty() {
            for page in self.on_queue.clone() {
                if self.page_is_turning_on(page) {
                    continue;
                }
                let active = match self.registry.get(&page) {
                    Some(controller) => controller.surface_active(),
                    None => continue,
                };
                if active {
                    // Already presented: treat as entered.
                    self.confirm_page_has_entered(page);
                    continue;
                }
                let event = self.registry.get_mut(&page).and_then(|controller| {
                    controller.set_surface_active(true);
                    controller.turn_on()
                });
                if let Some(event) = event {
                    self.dispatch(event);
                }
            }
        } else {
            for page in self.off_queue.clone() {
                if self.page_is_turning_off(page) {
                    continue;
                }
                let active = match self.registry.get(&page) {
                    Some(controller) => controller.surface_active(),
                    None => continue,
                };
                if !active {
                    // Already withdrawn: treat as exited.
                    self.confirm_page_has_exited(page);
                    continue;
                }
                let event = self
                    .registry
                    .get_mut(&page)
                    .and_then(PageController::turn_off);
                if let Some(event) = event {
                    self.dispatch(event);
                }
            }
        }
    }

    /// Handle a terminal transition reported by a controller.
    fn dispatch(&mut self, event: PageEvent<P>) {
        match event {
            PageEvent::Entered { page, chain } => {
                if let Some(next) = chain {
                    self.turn_page_on(None, next, false);
                }
                self.confirm_page_has_entered(page);
            }
            PageEvent::Exited { page } => self.confirm_page_has_exited(page),
        }
    }
}
