//! Page Identity and Lifecycle
//!
//! A page is a distinct named UI state: it has a registered identifier,
//! an entry/exit animation, and an interactive surface. This module
//! defines page identity and lifecycle state; [`controller`] runs one
//! page's transitions and [`manager`] arbitrates between pages.
//!
//! # Identifiers
//!
//! Consumers define their own finite identifier type, typically a small
//! `enum`, and use it everywhere a page is named. The original design
//! reserved a `None` sentinel inside the identifier space; here every
//! position where that sentinel was legal takes an `Option` instead, so
//! "no page" can never be registered or queued by construction.

pub mod controller;
pub mod manager;

pub use controller::PageController;
pub use manager::PageManager;

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Marker trait for page identifiers.
///
/// Blanket-implemented for any small copyable key type; in practice a
/// `#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]` enum.
pub trait PageId: Copy + Eq + Hash + fmt::Debug + 'static {}

impl<T: Copy + Eq + Hash + fmt::Debug + 'static> PageId for T {}

/// Lifecycle state of a page.
///
/// Exactly one state holds at a time, cycling
/// `Off → TurningOn → On → TurningOff → Off`, with abrupt cancellation
/// edges `TurningOn → Off` and `TurningOff → On`. `TurningOn` and
/// `TurningOff` are therefore mutually exclusive by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageState {
    /// The page is not shown. Initial state.
    #[default]
    Off,
    /// The entry sequence is in flight.
    TurningOn,
    /// The page is fully entered and accepts input.
    On,
    /// The exit sequence is in flight.
    TurningOff,
}

impl PageState {
    /// Whether the page reads as on.
    ///
    /// A page mid-exit still reads as on until the exit completes, so
    /// this holds in both `On` and `TurningOff`.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On | Self::TurningOff)
    }

    /// Whether the entry sequence is in flight.
    #[must_use]
    pub fn is_turning_on(self) -> bool {
        matches!(self, Self::TurningOn)
    }

    /// Whether the exit sequence is in flight.
    #[must_use]
    pub fn is_turning_off(self) -> bool {
        matches!(self, Self::TurningOff)
    }

    /// Whether a transition is currently in flight.
    #[must_use]
    pub fn is_transitional(self) -> bool {
        matches!(self, Self::TurningOn | Self::TurningOff)
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::TurningOn => "turning on",
            Self::On => "on",
            Self::TurningOff => "turning off",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Terminal-transition report from a controller to the manager.
///
/// Controllers cannot call back into the manager that owns them, so a
/// completed sequence is returned as an event from the drive methods;
/// the manager confirms the matching pending-queue entry and fires any
/// chained entry when it dispatches the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent<P: PageId> {
    /// The page finished its entry sequence and accepts input.
    Entered {
        /// Page that entered.
        page: P,
        /// Page to auto-open next, when one is chained.
        chain: Option<P>,
    },
    /// The page finished its exit sequence and was deactivated.
    Exited {
        /// Page that exited.
        page: P,
    },
}
