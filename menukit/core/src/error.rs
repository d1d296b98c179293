//! Registry Error Taxonomy
//!
//! The only fatal error in this subsystem is a startup configuration
//! mistake: registering two pages under the same identifier. Everything
//! else degrades softly — unknown-page lookups log a diagnostic and
//! return an absent result, and a stalled animation poll is neither
//! detected nor reported (see the crate-level concurrency notes).

use std::fmt;

use thiserror::Error;

/// Errors raised while building a page registry.
///
/// These are configuration errors: they are not recovered, and callers
/// are expected to let them halt initialization.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RegistryError<P: fmt::Debug> {
    /// Two pages were registered under the same identifier.
    #[error("a page with identifier {0:?} is already registered")]
    DuplicatePage(P),
}
