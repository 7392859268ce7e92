//! Slider configuration: the resolved option set, partial overrides, and
//! the `data-slider-*` attribute source.

use super::error::SliderError;
use super::host::HostElement;
use super::scale::Scale;
use super::value::{decimal_places, SliderValue};
use h5ui_core::Orientation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Prefix of the host attributes that configure a slider.
pub const ATTRIBUTE_PREFIX: &str = "data-slider-";

/// Which part of the track is highlighted as the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// From `min` to the handle
    #[default]
    Before,
    /// From the handle to `max`
    After,
    /// Nothing highlighted
    None,
}

/// When the value tooltip is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    /// On hover, focus and drag
    #[default]
    Show,
    /// Never
    Hide,
    /// At all times
    Always,
}

/// Handle shape, for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleShape {
    /// Circle
    #[default]
    Round,
    /// Square
    Square,
    /// Triangle pointing at the track
    Triangle,
    /// Host-styled
    Custom,
}

/// Side of the track the tooltip sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPosition {
    /// Above a horizontal track
    Top,
    /// Below a horizontal track
    Bottom,
    /// Left of a vertical track
    Left,
    /// Right of a vertical track
    Right,
}

impl TooltipPosition {
    /// Whether this position can be used with `orientation`.
    #[must_use]
    pub const fn fits(self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => matches!(self, Self::Top | Self::Bottom),
            Orientation::Vertical => matches!(self, Self::Left | Self::Right),
        }
    }

    /// Default position for `orientation`.
    #[must_use]
    pub const fn default_for(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::Top,
            Orientation::Vertical => Self::Right,
        }
    }
}

/// Accessible label reference for the handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Labelledby {
    /// One label id for both handles
    Shared(String),
    /// Label ids per handle, low first
    PerHandle(Vec<String>),
}

impl Labelledby {
    /// Label id for handle `index`, if any.
    #[must_use]
    pub fn for_handle(&self, index: usize) -> Option<&str> {
        match self {
            Self::Shared(id) => Some(id.as_str()),
            Self::PerHandle(ids) => ids.get(index).map(String::as_str),
        }
        .filter(|id| !id.is_empty())
    }
}

/// A highlighted sub-range of the track, in domain values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeHighlight {
    /// Start value
    pub start: f64,
    /// End value
    pub end: f64,
}

impl RangeHighlight {
    /// Create a highlight.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

type FormatFn = dyn Fn(&SliderValue) -> String + Send + Sync;

/// Display-text producer for values.
#[derive(Clone)]
pub struct Formatter(Arc<FormatFn>);

impl Formatter {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&SliderValue) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Format a value.
    #[must_use]
    pub fn format(&self, value: &SliderValue) -> String {
        (self.0)(value)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(|value| match value {
            SliderValue::Single(v) => v.to_string(),
            SliderValue::Range([low, high]) => format!("{low} : {high}"),
        })
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

/// Fully resolved slider configuration.
#[derive(Debug, Clone, Serialize)]
pub struct SliderOptions {
    /// Element id of the generated slider
    pub id: String,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Value granularity
    pub step: f64,
    /// Decimal places kept when rounding; unset means derive from `step`
    pub precision: Option<u32>,
    /// Track orientation
    pub orientation: Orientation,
    /// Initial value
    pub value: SliderValue,
    /// Two handles instead of one
    pub range: bool,
    /// Highlighted part of the track
    pub selection: Selection,
    /// Tooltip visibility mode
    pub tooltip: TooltipMode,
    /// Separate min/max tooltips in range mode
    pub tooltip_split: bool,
    /// Handle shape
    pub handle: HandleShape,
    /// Flip the track direction
    pub reversed: bool,
    /// Accept input
    pub enabled: bool,
    /// Value display text
    #[serde(skip)]
    pub formatter: Formatter,
    /// Arrow keys follow screen direction instead of value direction
    pub natural_arrow_keys: bool,
    /// Tick values
    pub ticks: Vec<f64>,
    /// Tick positions as track percentages
    pub ticks_positions: Vec<f64>,
    /// Tick labels
    pub ticks_labels: Vec<String>,
    /// Snap distance to the nearest tick
    pub ticks_snap_bounds: f64,
    /// Preview tick values in the tooltip on hover
    pub ticks_tooltip: bool,
    /// Value ↔ percentage mapping
    pub scale: Scale,
    /// Move focus to the dragged handle on press
    pub focus: bool,
    /// Tooltip side
    pub tooltip_position: Option<TooltipPosition>,
    /// Accessible labels for the handles
    pub labelledby: Option<Labelledby>,
    /// Highlighted sub-ranges
    #[serde(rename = "rangeHighlights")]
    pub range_highlights: Vec<RangeHighlight>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            id: String::new(),
            min: 0.0,
            max: 10.0,
            step: 1.0,
            precision: None,
            orientation: Orientation::Horizontal,
            value: SliderValue::Single(5.0),
            range: false,
            selection: Selection::Before,
            tooltip: TooltipMode::Show,
            tooltip_split: false,
            handle: HandleShape::Round,
            reversed: false,
            enabled: true,
            formatter: Formatter::default(),
            natural_arrow_keys: false,
            ticks: Vec::new(),
            ticks_positions: Vec::new(),
            ticks_labels: Vec::new(),
            ticks_snap_bounds: 0.0,
            ticks_tooltip: false,
            scale: Scale::Linear,
            focus: false,
            tooltip_position: None,
            labelledby: None,
            range_highlights: Vec::new(),
        }
    }
}

impl SliderOptions {
    /// Decimal places used when rounding values.
    #[must_use]
    pub fn effective_precision(&self) -> u32 {
        self.precision
            .filter(|&p| p > 0)
            .unwrap_or_else(|| decimal_places(self.step))
    }

    /// Tooltip position after orientation fixup.
    #[must_use]
    pub fn resolved_tooltip_position(&self) -> TooltipPosition {
        self.tooltip_position
            .filter(|p| p.fits(self.orientation))
            .unwrap_or_else(|| TooltipPosition::default_for(self.orientation))
    }

    /// Current value of option `key` as JSON.
    pub fn get(&self, key: &str) -> Result<Value, SliderError> {
        if !OPTION_KEYS.contains(&key) {
            return Err(SliderError::UnknownOption(key.to_string()));
        }
        let mut all = serde_json::to_value(self)?;
        Ok(all.get_mut(key).map(Value::take).unwrap_or(Value::Null))
    }

    /// Overwrite every option that `overrides` sets.
    pub fn apply(&mut self, overrides: &SliderOverrides) {
        overrides.apply_to(self);
        if let Some(formatter) = &overrides.formatter {
            self.formatter = formatter.clone();
        }
    }

    /// Repair inconsistent combinations in place.
    pub fn normalize(&mut self) {
        if let Some(position) = self.tooltip_position {
            if !position.fits(self.orientation) {
                self.tooltip_position = Some(TooltipPosition::default_for(self.orientation));
            }
        }

        if !self.ticks.is_empty() {
            self.min = self.ticks.iter().copied().fold(f64::INFINITY, f64::min);
            self.max = self.ticks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        }

        if !(self.step.is_finite() && self.step > 0.0) {
            warn!(step = self.step, "slider step must be positive, using 1");
            self.step = 1.0;
        }

        if self.min > self.max {
            warn!(min = self.min, max = self.max, "slider min exceeds max, swapping");
            std::mem::swap(&mut self.min, &mut self.max);
        }

        if self.ticks_snap_bounds.is_nan() || self.ticks_snap_bounds < 0.0 {
            self.ticks_snap_bounds = 0.0;
        }
    }
}

/// Resolve options with precedence `defaults < attributes < explicit`, then normalize.
#[must_use]
pub fn resolve_options(
    defaults: &SliderOptions,
    attributes: &SliderOverrides,
    explicit: &SliderOverrides,
) -> SliderOptions {
    let mut options = defaults.clone();
    options.apply(attributes);
    options.apply(explicit);
    options.normalize();
    options
}

/// Declares the overridable option schema once: the partial struct, its
/// builder setters, merge and apply, and the key list.
macro_rules! slider_overrides {
    ($( $(#[$meta:meta])* $field:ident: $ty:ty => $key:literal ),* $(,)?) => {
        /// Partial slider configuration; unset fields defer to lower layers.
        #[derive(Debug, Clone, Default, Deserialize)]
        pub struct SliderOverrides {
            $(
                $(#[$meta])*
                pub $field: Option<$ty>,
            )*
            /// Value display text
            #[serde(skip)]
            pub formatter: Option<Formatter>,
        }

        /// Names of every serializable option.
        pub const OPTION_KEYS: &[&str] = &[$($key),*];

        impl SliderOverrides {
            $(
                #[doc = concat!("Set `", $key, "`.")]
                #[must_use]
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Layer `higher` over `self`; fields set in `higher` win.
            #[must_use]
            pub fn merge(self, higher: Self) -> Self {
                Self {
                    $($field: higher.$field.or(self.$field),)*
                    formatter: higher.formatter.or(self.formatter),
                }
            }

            /// Number of options set.
            #[must_use]
            pub fn len(&self) -> usize {
                [$(self.$field.is_some()),*].iter().filter(|set| **set).count()
                    + usize::from(self.formatter.is_some())
            }

            /// Whether no option is set.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            fn apply_to(&self, options: &mut SliderOptions) {
                $(
                    if let Some(value) = &self.$field {
                        options.$field = value.clone();
                    }
                )*
            }
        }
    };
}

slider_overrides! {
    id: String => "id",
    min: f64 => "min",
    max: f64 => "max",
    step: f64 => "step",
    precision: Option<u32> => "precision",
    orientation: Orientation => "orientation",
    value: SliderValue => "value",
    range: bool => "range",
    selection: Selection => "selection",
    tooltip: TooltipMode => "tooltip",
    tooltip_split: bool => "tooltip_split",
    handle: HandleShape => "handle",
    reversed: bool => "reversed",
    enabled: bool => "enabled",
    natural_arrow_keys: bool => "natural_arrow_keys",
    ticks: Vec<f64> => "ticks",
    ticks_positions: Vec<f64> => "ticks_positions",
    ticks_labels: Vec<String> => "ticks_labels",
    ticks_snap_bounds: f64 => "ticks_snap_bounds",
    ticks_tooltip: bool => "ticks_tooltip",
    scale: Scale => "scale",
    focus: bool => "focus",
    tooltip_position: Option<TooltipPosition> => "tooltip_position",
    labelledby: Option<Labelledby> => "labelledby",
    #[serde(rename = "rangeHighlights")]
    range_highlights: Vec<RangeHighlight> => "rangeHighlights",
}

impl SliderOverrides {
    /// Set the value formatter.
    #[must_use]
    pub fn with_formatter(
        mut self,
        f: impl Fn(&SliderValue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Formatter::new(f));
        self
    }

    /// Parse from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, SliderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse from a YAML mapping.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SliderError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Overrides setting the single option `key`.
    pub fn from_entry(key: &str, value: Value) -> Result<Self, SliderError> {
        if !OPTION_KEYS.contains(&key) {
            return Err(SliderError::UnknownOption(key.to_string()));
        }
        let mut map = Map::new();
        map.insert(key.to_string(), value.clone());
        serde_json::from_value(Value::Object(map)).map_err(|_| SliderError::invalid_input(value))
    }

    /// Read `data-slider-*` attributes from a host element.
    ///
    /// Each attribute is parsed as JSON, falling back to the raw string.
    /// Keys that do not fit their option type are skipped with a warning.
    pub fn from_attributes(element: &dyn HostElement) -> Self {
        let mut overrides = Self::default();
        for key in OPTION_KEYS {
            let name = attribute_name(key);
            let Some(raw) = element.attribute(&name) else {
                continue;
            };
            let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
            match Self::from_entry(key, value) {
                Ok(entry) => overrides = overrides.merge(entry),
                Err(err) => {
                    warn!(attribute = %name, error = %err, "ignoring malformed slider attribute");
                }
            }
        }
        overrides
    }
}

/// Host attribute carrying option `key`.
#[must_use]
pub fn attribute_name(key: &str) -> String {
    format!("{ATTRIBUTE_PREFIX}{}", key.replace('_', "-").to_ascii_lowercase())
}
