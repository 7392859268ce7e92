//! Value ↔ percentage conversion along the track.
//!
//! Percentages run from 0 (the `min` end) to 100 (the `max` end) before any
//! `reversed` flip; flipping is a presentation concern handled by the caller.

use super::options::SliderOptions;
use serde::{Deserialize, Serialize};

/// Mapping between domain values and track percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Evenly spaced values, or piecewise-linear between positioned ticks
    #[default]
    Linear,
    /// Natural-log spacing; `min == 0` is treated as `ln(min) == 0`
    Logarithmic,
}

impl Scale {
    /// Convert a track percentage to a domain value.
    ///
    /// The result is rounded to the nearest `step` and always lies in
    /// `[min, max]`, whatever the input percentage.
    #[must_use]
    pub fn to_value(self, options: &SliderOptions, percentage: f64) -> f64 {
        let (min, max, step) = (options.min, options.max, options.step);
        if max == min {
            return min;
        }
        let value = match self {
            Self::Linear => match tick_brackets(options) {
                Some((ticks, positions)) => {
                    let last = positions.len() - 1;
                    let pct = clamp(percentage, positions[0], positions[last]);
                    let i = (1..=last).find(|&i| pct <= positions[i]).unwrap_or(last);
                    let (minv, maxv) = (ticks[i - 1], ticks[i]);
                    let (minp, maxp) = (positions[i - 1], positions[i]);
                    let raw = if maxp == minp {
                        minv
                    } else {
                        minv + (pct - minp) / (maxp - minp) * (maxv - minv)
                    };
                    minv + ((raw - minv) / step).round() * step
                }
                None => {
                    let raw = percentage / 100.0 * (max - min);
                    min + (raw / step).round() * step
                }
            },
            Self::Logarithmic => {
                let (lmin, lmax) = log_bounds(min, max);
                let raw = (lmin + (lmax - lmin) * percentage / 100.0).exp();
                min + ((raw - min) / step).round() * step
            }
        };
        if value.is_finite() {
            clamp(value, min, max)
        } else {
            min
        }
    }

    /// Convert a domain value to a track percentage.
    ///
    /// Returns 0 for every value when `min == max`.
    #[must_use]
    pub fn to_percentage(self, options: &SliderOptions, value: f64) -> f64 {
        let (min, max) = (options.min, options.max);
        if max == min {
            return 0.0;
        }
        let percentage = match self {
            Self::Linear => match tick_brackets(options) {
                Some((ticks, positions)) => {
                    let last = ticks.len() - 1;
                    let v = clamp(value, ticks[0], ticks[last]);
                    let i = (1..=last).find(|&i| v <= ticks[i]).unwrap_or(last);
                    let (minv, maxv) = (ticks[i - 1], ticks[i]);
                    let (minp, maxp) = (positions[i - 1], positions[i]);
                    if maxv == minv {
                        minp
                    } else {
                        minp + (v - minv) / (maxv - minv) * (maxp - minp)
                    }
                }
                None => 100.0 * (value - min) / (max - min),
            },
            Self::Logarithmic => {
                let (lmin, lmax) = log_bounds(min, max);
                let v = if value == 0.0 { 0.0 } else { value.ln() };
                100.0 * (v - lmin) / (lmax - lmin)
            }
        };
        if percentage.is_finite() {
            percentage
        } else {
            0.0
        }
    }
}

fn log_bounds(min: f64, max: f64) -> (f64, f64) {
    let lmin = if min == 0.0 { 0.0 } else { min.ln() };
    (lmin, max.ln())
}

/// Tick values paired with explicit positions, truncated to the shorter list.
fn tick_brackets(options: &SliderOptions) -> Option<(&[f64], &[f64])> {
    let n = options.ticks.len().min(options.ticks_positions.len());
    (n >= 2).then(|| (&options.ticks[..n], &options.ticks_positions[..n]))
}

/// Clamp that tolerates `lo > hi` and NaN instead of panicking.
pub(crate) fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Closest tick to `value`, if it lies within `bounds`.
///
/// Ties resolve to the later tick.
#[must_use]
pub fn snap_to_tick(ticks: &[f64], value: f64, bounds: f64) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for &tick in ticks {
        let diff = (tick - value).abs();
        if best.map_or(true, |(_, d)| diff <= d) {
            best = Some((tick, diff));
        }
    }
    best.filter(|&(_, diff)| diff <= bounds).map(|(tick, _)| tick)
}
