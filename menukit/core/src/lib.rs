//! Menukit Core - Headless Page-Transition Orchestration
//!
//! This crate provides the navigation core for menu-driven applications,
//! completely independent of any UI framework. It tracks a registry of
//! "pages" (full-screen or overlay UI states), runs each page's entry and
//! exit animation sequence to completion, and arbitrates which page turns
//! on or off next.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                       Trigger collaborators                      │
//! │   (input handlers, buttons, other pages, test harnesses)         │
//! │                │ turn_page_on / turn_page_off                    │
//! └────────────────┼─────────────────────────────────────────────────┘
//!                  │
//! ┌────────────────┼─────────────────────────────────────────────────┐
//! │                ▼         MENUKIT CORE                            │
//! │  ┌─────────────────────────────────────────────────────────────┐ │
//! │  │                      PageManager                            │ │
//! │  │   registry: PageId → PageController                         │ │
//! │  │   pending_off / pending_on queues + replace waiters         │ │
//! │  │   tick(): the single cooperative scheduling loop            │ │
//! │  └───────────────┬─────────────────────────────────────────────┘ │
//! │                  │ drives                                        │
//! │  ┌───────────────▼─────────────────────────────────────────────┐ │
//! │  │                     PageController                          │ │
//! │  │   Off → TurningOn → On → TurningOff → Off                   │ │
//! │  │   polls AnimationPlayer, toggles PageSurface                │ │
//! │  └─────────────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`PageManager`]: registry, pending queues, and the scheduling loop
//! - [`PageController`]: per-page enter/exit state machine
//! - [`AnimationPlayer`]: the external animation collaborator, polled for
//!   sequence completion
//! - [`PageSurface`]: the external presentation collaborator (activation,
//!   interactability, opacity)
//! - [`PageHooks`] / [`ManagerHooks`]: extension points for embedders
//!
//! # Concurrency Model
//!
//! Everything runs on one logical thread. Sequence tasks and replace-page
//! waiters advance only inside [`PageManager::tick`], which an external
//! driver calls once per tick. Between suspension points code runs to
//! completion atomically, so the queues and registry need no locks, only
//! the ordering invariants [`PageManager`] maintains. There is no timeout
//! mechanism: an animation player that never satisfies the completion
//! predicate stalls that page's transition forever without affecting
//! other pages.
//!
//! # Quick Start
//!
//! ```
//! use menukit_core::{
//!     HeadlessSurface, ManagerConfig, PageController, PageManager, ScriptedPlayer,
//! };
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Page {
//!     Home,
//!     Settings,
//! }
//!
//! let pages = vec![
//!     PageController::new(Page::Home, ScriptedPlayer::instant(), HeadlessSurface::default()),
//!     PageController::new(Page::Settings, ScriptedPlayer::instant(), HeadlessSurface::default()),
//! ];
//! let config = ManagerConfig::default().with_entry(Page::Home);
//! let mut manager = PageManager::new(pages, config).unwrap();
//!
//! manager.tick();
//! assert!(manager.page_is_on(Page::Home));
//! assert!(!manager.page_is_on(Page::Settings));
//! ```
//!
//! # Module Overview
//!
//! - [`pages`]: page identity, lifecycle state, controller, and manager
//! - [`animation`]: animation-player interface and completion predicate
//! - [`surface`]: presentation-surface interface
//! - [`hooks`]: embedder extension points
//! - [`triggers`]: declarative page actions and the hold-to-activate trigger
//! - [`effects`]: tick-driven opacity fading
//! - [`config`]: manager configuration and the optional TOML runtime file
//! - [`error`]: registry error taxonomy
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on any rendering or input
//! framework. It is pure navigation logic that can drive a TUI, a GUI,
//! or a headless test harness.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod config;
pub mod effects;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod surface;
pub mod triggers;

// Re-exports for convenience
pub use animation::{
    playback_complete, AnimationIntent, AnimationPlayer, ScriptedPlayer, ENTRY_STATE, EXIT_STATE,
};
pub use config::{
    default_config_path, load_runtime_config, ConfigError, ManagerConfig, RuntimeToml,
    DEFAULT_TICK_HZ,
};
pub use effects::Fader;
pub use error::RegistryError;
pub use hooks::{ManagerHooks, NoopHooks, PageHooks};
pub use pages::{PageController, PageEvent, PageId, PageManager, PageState};
pub use surface::{HeadlessSurface, PageSurface};
pub use triggers::{HoldTrigger, LoadPageAction, PageAction};
