//! Core types for the H5UI widget toolkit.
//!
//! This crate provides the host-neutral vocabulary shared by every widget:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Orientation`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`], [`TouchId`]
//! - Widget identity: [`WidgetId`]

mod event;
mod geometry;

pub use event::{Event, Key, MouseButton, TouchId};
pub use geometry::{Orientation, Point, Rect, Size};

use serde::{Deserialize, Serialize};

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The ID following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}
