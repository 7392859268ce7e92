//! Widget implementations for the H5UI toolkit.
//!
//! - [`slider`]: single-value and range slider with pointer, touch and
//!   keyboard interaction
//! - [`registry`]: host-owned registry that creates sliders from markup

pub mod registry;
pub mod slider;

pub use registry::{HostBinding, ScanOutcome, SliderRegistry};
pub use slider::{
    Handle, Slider, SliderError, SliderEvent, SliderEventKind, SliderLayout, SliderOptions,
    SliderOverrides, SliderValue, Target,
};
