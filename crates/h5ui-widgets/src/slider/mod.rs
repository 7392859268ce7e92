//! Range slider widget.
//!
//! A [`Slider`] replaces a host form element with a draggable track. It
//! converts pointer, touch and keyboard input into values, keeps the host
//! element's `value` in sync, and notifies listeners:
//!
//! - [`options`]: configuration, attribute parsing, precedence
//! - [`scale`]: value ↔ percentage mapping
//! - [`events`]: notifications and listener registration
//! - [`host`]: geometry and element seams
//! - [`layout`]: render model

mod error;
pub mod events;
pub mod host;
pub mod layout;
pub mod options;
pub mod scale;
mod value;
mod widget;

pub use error::SliderError;
pub use events::{ListenerId, SliderEvent, SliderEventKind, UnknownEventKind};
pub use host::{FixedGeometry, GeometryProvider, HostElement, MemoryElement};
pub use layout::SliderLayout;
pub use options::{
    resolve_options, Formatter, HandleShape, Labelledby, RangeHighlight, Selection, SliderOptions,
    SliderOverrides, TooltipMode, TooltipPosition,
};
pub use scale::Scale;
pub use value::{decimal_places, round_to, Handle, SliderInput, SliderValue, MAX_PRECISION};
pub use widget::{Slider, SliderState, Target, TickPreview};
