//! Host environment seams: track geometry and the backing input element.
//!
//! A slider never talks to a DOM directly. Hosts implement
//! [`GeometryProvider`] for the rendered track and [`HostElement`] for the
//! form element whose value the slider mirrors.

use h5ui_core::{Point, Rect, Size};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Page geometry of the rendered track.
pub trait GeometryProvider: Send {
    /// Page offset of the track's top-left corner.
    fn offset(&self) -> Point;

    /// Rendered size of the track.
    fn size(&self) -> Size;

    /// Track bounds in page coordinates.
    fn bounding_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset(), self.size())
    }
}

/// The form element a slider replaces and keeps in sync.
pub trait HostElement: Send {
    /// Attribute value, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove an attribute.
    fn remove_attribute(&mut self, name: &str);

    /// Show or hide the element.
    fn set_visible(&mut self, visible: bool);

    /// Whether the element is shown.
    fn is_visible(&self) -> bool;
}

/// Geometry with a host-controlled rectangle.
///
/// Clones share the rectangle, so a host can keep a handle and move or
/// resize the track after giving a clone to a slider.
#[derive(Debug, Clone)]
pub struct FixedGeometry {
    rect: Arc<RwLock<Rect>>,
}

impl FixedGeometry {
    /// Geometry for a track at `rect`.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Arc::new(RwLock::new(rect)),
        }
    }

    /// Horizontal-friendly shorthand: a `width`×`height` track at the origin.
    #[must_use]
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, height))
    }

    /// Move or resize the track.
    pub fn set_rect(&self, rect: Rect) {
        *self.rect.write().unwrap_or_else(PoisonError::into_inner) = rect;
    }

    /// Current rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        *self.rect.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FixedGeometry {
    fn default() -> Self {
        Self::sized(100.0, 20.0)
    }
}

impl GeometryProvider for FixedGeometry {
    fn offset(&self) -> Point {
        self.rect().origin()
    }

    fn size(&self) -> Size {
        self.rect().size()
    }

    fn bounding_rect(&self) -> Rect {
        self.rect()
    }
}

/// In-memory element for hosts without a DOM, and for tests.
///
/// Attribute names are case-insensitive.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    attributes: HashMap<String, String>,
    visible: bool,
}

impl MemoryElement {
    /// Create a visible element with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: HashMap::new(),
            visible: true,
        }
    }

    /// Builder: add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the element has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Default for MemoryElement {
    fn default() -> Self {
        Self::new()
    }
}

impl HostElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(&name.to_ascii_lowercase()).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(&name.to_ascii_lowercase());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
