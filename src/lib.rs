//! Trellis is the arrangement and focus core of a tiling window manager.
//!
//! The crate is split into a side effect free data model ([pure]) describing
//! which windows exist, how they are ordered and which one holds focus, a
//! composable layout algebra ([core::layout] and [builtin::layout]) turning
//! that model into concrete screen positions, and a refresh pipeline
//! ([display]) that applies the result through a narrow display server
//! boundary. Everything stateful is owned by a [core::State] value threaded
//! through the event loop: there are no global registries.
#![warn(
    clippy::complexity,
    clippy::correctness,
    clippy::style,
    future_incompatible,
    missing_debug_implementations,
    rust_2018_idioms
)]

#[macro_use]
pub mod macros;

pub mod builtin;
pub mod core;
pub mod display;
pub mod extensions;
pub mod pure;

mod color;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[doc(inline)]
pub use crate::core::{layout::Message, Config, State, WindowManager};
#[doc(inline)]
pub use color::Color;
#[doc(inline)]
pub use pure::{Position, Screen, Stack, StackSet, Workspace};

/// An opaque handle to a client window, assigned by the display server.
///
/// Window ids are small copyable values with no pointer semantics: holding a
/// [WinId] says nothing about whether the window still exists.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WinId(pub(crate) u32);

impl WinId {
    /// The raw u32 value handed out by the display server.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl std::ops::Deref for WinId {
    type Target = u32;

    fn deref(&self) -> &u32 {
        &self.0
    }
}

impl From<u32> for WinId {
    fn from(id: u32) -> Self {
        WinId(id)
    }
}

impl From<WinId> for u32 {
    fn from(id: WinId) -> Self {
        id.0
    }
}

impl fmt::Display for WinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error variants from the core library.
///
/// Lookups are not errors: searching for an unknown window or tag returns an
/// absent value. These variants cover construction mistakes and failures
/// reported by the display server boundary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The display server did not report any usable screens
    #[error("need at least one screen to run")]
    NoScreens,

    /// There were not enough workspaces to cover the connected screens
    #[error("{n_ws} workspaces can not cover {n_screens} screens")]
    InsufficientWorkspaces {
        /// Number of configured workspaces
        n_ws: usize,
        /// Number of connected screens
        n_screens: usize,
    },

    /// Workspace tags must be unique within a [StackSet]
    #[error("duplicate workspace tags: {tags:?}")]
    NonUniqueTags {
        /// The offending tags
        tags: Vec<String>,
    },

    /// An operation that requires a managed window was given an unknown one
    #[error("{0} is not a managed window")]
    UnknownClient(WinId),

    /// A hex color string could not be parsed
    #[error("invalid hex color: {hex}")]
    InvalidHexColor {
        /// The string that failed to parse
        hex: String,
    },

    /// Size hint data from the display server was malformed
    #[error("malformed size hints: {0}")]
    InvalidHints(String),

    /// An error reported by the display server boundary
    #[error("display server error: {0}")]
    Display(String),
}

/// A Result where the error type is the crate level [Error]
pub type Result<T> = std::result::Result<T, Error>;
