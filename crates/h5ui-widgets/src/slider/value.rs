//! Slider values, value inputs, and numeric rounding helpers.

use super::error::SliderError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One of the two slider handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Handle {
    /// Low handle (the only handle in single mode)
    #[default]
    Min,
    /// High handle (range mode only)
    Max,
}

impl Handle {
    /// Both handles, low first.
    pub const ALL: [Self; 2] = [Self::Min, Self::Max];

    /// Index into value and percentage arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Min => 0,
            Self::Max => 1,
        }
    }

    /// The other handle.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }
}

/// Value exposed by a slider: a number in single mode, `[low, high]` in range mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliderValue {
    /// Single-handle value
    Single(f64),
    /// Two-handle value
    Range([f64; 2]),
}

impl SliderValue {
    /// Check if this is a range value.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// The single value, or the low end of a range.
    #[must_use]
    pub const fn low(&self) -> f64 {
        match self {
            Self::Single(v) => *v,
            Self::Range([low, _]) => *low,
        }
    }

    /// The high end of a range, if this is one.
    #[must_use]
    pub const fn high(&self) -> Option<f64> {
        match self {
            Self::Single(_) => None,
            Self::Range([_, high]) => Some(*high),
        }
    }

    /// Component for a handle; single values answer only for [`Handle::Min`].
    #[must_use]
    pub const fn get(&self, handle: Handle) -> Option<f64> {
        match (self, handle) {
            (Self::Single(v), Handle::Min) => Some(*v),
            (Self::Single(_), Handle::Max) => None,
            (Self::Range(pair), h) => Some(pair[h.index()]),
        }
    }
}

impl Default for SliderValue {
    fn default() -> Self {
        Self::Single(5.0)
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{v}"),
            Self::Range([low, high]) => write!(f, "{low},{high}"),
        }
    }
}

impl From<f64> for SliderValue {
    fn from(v: f64) -> Self {
        Self::Single(v)
    }
}

impl From<[f64; 2]> for SliderValue {
    fn from(pair: [f64; 2]) -> Self {
        Self::Range(pair)
    }
}

/// Untyped input accepted by `Slider::set_value`.
///
/// Numbers and pairs always validate; text and JSON values are checked the
/// way a host form field would be, and rejected with
/// [`SliderError::InvalidInput`] when they are not numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderInput {
    /// A number
    Number(f64),
    /// A `[low, high]` pair
    Pair([f64; 2]),
    /// Text from a form field or attribute
    Text(String),
    /// Arbitrary JSON
    Json(Value),
}

impl SliderInput {
    /// Validate into a [`SliderValue`].
    pub fn validate(self) -> Result<SliderValue, SliderError> {
        match self {
            Self::Number(n) => number(n).map(SliderValue::Single),
            Self::Pair([low, high]) => Ok(SliderValue::Range([number(low)?, number(high)?])),
            Self::Text(text) => parse_text(&text).map(SliderValue::Single),
            Self::Json(value) => validate_json(value),
        }
    }
}

fn number(n: f64) -> Result<f64, SliderError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(SliderError::invalid_input(n))
    }
}

fn parse_text(text: &str) -> Result<f64, SliderError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(SliderError::invalid_input(text)),
    }
}

fn validate_json(value: Value) -> Result<SliderValue, SliderError> {
    match value {
        Value::Null => Ok(SliderValue::Single(0.0)),
        Value::Number(n) => n
            .as_f64()
            .map(SliderValue::Single)
            .ok_or_else(|| SliderError::invalid_input(n)),
        Value::String(s) => parse_text(&s).map(SliderValue::Single),
        Value::Array(items) => {
            let mut nums = Vec::with_capacity(items.len());
            for item in &items {
                match item.as_f64() {
                    Some(n) if item.is_number() => nums.push(n),
                    _ => return Err(SliderError::invalid_input(item)),
                }
            }
            match nums.as_slice() {
                [v] => Ok(SliderValue::Single(*v)),
                [low, high] => Ok(SliderValue::Range([*low, *high])),
                _ => Err(SliderError::invalid_input(Value::Array(items))),
            }
        }
        other => Err(SliderError::invalid_input(other)),
    }
}

impl From<f64> for SliderInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for SliderInput {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<[f64; 2]> for SliderInput {
    fn from(pair: [f64; 2]) -> Self {
        Self::Pair(pair)
    }
}

impl From<(f64, f64)> for SliderInput {
    fn from((low, high): (f64, f64)) -> Self {
        Self::Pair([low, high])
    }
}

impl From<SliderValue> for SliderInput {
    fn from(value: SliderValue) -> Self {
        match value {
            SliderValue::Single(v) => Self::Number(v),
            SliderValue::Range(pair) => Self::Pair(pair),
        }
    }
}

impl From<&str> for SliderInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SliderInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for SliderInput {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Number of digits after the decimal point in the shortest representation of `num`.
#[must_use]
pub fn decimal_places(num: f64) -> u32 {
    if !num.is_finite() {
        return 0;
    }
    let repr = num.to_string();
    repr.split_once('.').map_or(0, |(_, frac)| frac.len() as u32)
}

/// Most decimal digits [`round_to`] honors.
pub const MAX_PRECISION: u32 = 100;

/// Round `num` to `places` decimal digits, capped at [`MAX_PRECISION`].
#[must_use]
pub fn round_to(num: f64, places: u32) -> f64 {
    if !num.is_finite() {
        return num;
    }
    let places = places.min(MAX_PRECISION) as usize;
    format!("{num:.places$}").parse().unwrap_or(num)
}
