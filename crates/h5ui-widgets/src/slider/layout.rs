//! Render model: everything a renderer needs to draw a slider, derived
//! from options and state alone.
//!
//! All positions are percentages along the track after the `reversed`
//! flip, so a renderer can place elements without knowing the scale.

use super::options::{HandleShape, Selection, SliderOptions, TooltipMode, TooltipPosition};
use super::value::{Handle, SliderValue};
use super::widget::SliderState;
use h5ui_core::Orientation;
use serde::Serialize;

/// A span of the track.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Segment {
    /// Start percentage
    pub start: f64,
    /// Length in percent
    pub size: f64,
}

impl Segment {
    /// End percentage.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.size
    }
}

/// One handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandleView {
    /// Position percentage
    pub position: f64,
    /// `aria-valuenow`
    pub value: f64,
    /// `aria-valuetext`, present only when the formatted value is not numeric
    pub value_text: Option<String>,
    /// Hidden for the second handle in single mode
    pub visible: bool,
    /// Reachable by keyboard
    pub focusable: bool,
    /// Currently focused
    pub focused: bool,
    /// `aria-labelledby`
    pub labelledby: Option<String>,
    /// Shape
    pub shape: HandleShape,
}

/// Low, selection and high track segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackView {
    /// Before the selection
    pub low: Segment,
    /// Between the handles
    pub selection: Segment,
    /// After the selection
    pub high: Segment,
    /// False when `selection` is `none`
    pub visible: bool,
}

/// One tick mark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickView {
    /// Tick value
    pub value: f64,
    /// Position percentage
    pub position: f64,
    /// Inside the highlighted selection
    pub in_selection: bool,
    /// Label, if one is configured for this slot
    pub label: Option<String>,
}

/// One tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipView {
    /// Formatted text
    pub text: String,
    /// Position percentage
    pub position: f64,
    /// Shown
    pub visible: bool,
}

/// Tooltip set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipsView {
    /// Main tooltip; both values in range mode
    pub main: TooltipView,
    /// Low-handle tooltip (range mode)
    pub min: Option<TooltipView>,
    /// High-handle tooltip (range mode)
    pub max: Option<TooltipView>,
    /// Side of the track
    pub placement: TooltipPosition,
}

/// Complete render model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderLayout {
    /// Track orientation
    pub orientation: Orientation,
    /// Two handles
    pub range: bool,
    /// Input ignored
    pub disabled: bool,
    /// Low then high handle
    pub handles: [HandleView; 2],
    /// Track segments
    pub track: TrackView,
    /// Ticks in configuration order
    pub ticks: Vec<TickView>,
    /// Highlighted ranges; `None` where a highlight falls off the track
    pub highlights: Vec<Option<Segment>>,
    /// Tooltips
    pub tooltips: TooltipsView,
}

impl SliderLayout {
    /// Compute the render model.
    #[must_use]
    pub fn compute(options: &SliderOptions, state: &SliderState) -> Self {
        let positions = display_positions(options, state.percentage);
        let [p0, p1] = positions;
        let lo = p0.min(p1);
        let sel = (p0 - p1).abs();

        let handles = Handle::ALL.map(|handle| {
            let i = handle.index();
            let text = options.formatter.format(&SliderValue::Single(state.value[i]));
            HandleView {
                position: positions[i],
                value: state.value[i],
                value_text: text.trim().parse::<f64>().is_err().then_some(text),
                visible: i == 0 || options.range,
                focusable: state.enabled,
                focused: state.focused == Some(handle),
                labelledby: options
                    .labelledby
                    .as_ref()
                    .and_then(|l| l.for_handle(i))
                    .map(str::to_string),
                shape: options.handle,
            }
        });

        let track = TrackView {
            low: Segment { start: 0.0, size: lo },
            selection: Segment { start: lo, size: sel },
            high: Segment {
                start: lo + sel,
                size: 100.0 - lo - sel,
            },
            visible: options.selection != Selection::None,
        };

        Self {
            orientation: options.orientation,
            range: options.range,
            disabled: !state.enabled,
            handles,
            track,
            ticks: tick_views(options, positions),
            highlights: highlight_segments(options),
            tooltips: tooltips(options, state, positions),
        }
    }
}

/// Handle percentages after the `reversed` flip.
fn display_positions(options: &SliderOptions, percentage: [f64; 3]) -> [f64; 2] {
    if options.reversed {
        [
            100.0 - percentage[0],
            if options.range {
                100.0 - percentage[1]
            } else {
                percentage[1]
            },
        ]
    } else {
        [percentage[0], percentage[1]]
    }
}

/// Track percentage of tick `index`, before the `reversed` flip.
pub(crate) fn tick_percentage(options: &SliderOptions, index: usize) -> f64 {
    options.ticks_positions.get(index).copied().unwrap_or_else(|| {
        options
            .ticks
            .get(index)
            .map_or(0.0, |&tick| options.scale.to_percentage(options, tick))
    })
}

fn tick_views(options: &SliderOptions, [p0, p1]: [f64; 2]) -> Vec<TickView> {
    let labels = &options.ticks_labels;
    let flip_labels = options.reversed && options.ticks_positions.is_empty();
    options
        .ticks
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let mut position = tick_percentage(options, i);
            if options.reversed {
                position = 100.0 - position;
            }
            let in_selection = if options.range {
                position >= p0.min(p1) && position <= p0.max(p1)
            } else {
                match options.selection {
                    Selection::After => position >= p0,
                    Selection::Before => position <= p0,
                    Selection::None => false,
                }
            };
            let label_index = if flip_labels && i < labels.len() {
                labels.len() - 1 - i
            } else {
                i
            };
            TickView {
                value,
                position,
                in_selection,
                label: labels.get(label_index).cloned(),
            }
        })
        .collect()
}

fn highlight_segments(options: &SliderOptions) -> Vec<Option<Segment>> {
    let on_track = |p: f64| (0.0..=100.0).contains(&p);
    options
        .range_highlights
        .iter()
        .map(|highlight| {
            let mut start = options.scale.to_percentage(options, highlight.start);
            let mut end = options.scale.to_percentage(options, highlight.end);
            if options.reversed {
                (start, end) = (100.0 - end, 100.0 - start);
            }
            (on_track(start) && on_track(end)).then(|| Segment {
                start: start.min(end),
                size: (end - start).abs(),
            })
        })
        .collect()
}

fn tooltips(options: &SliderOptions, state: &SliderState, [p0, p1]: [f64; 2]) -> TooltipsView {
    let shown = match options.tooltip {
        TooltipMode::Always => true,
        TooltipMode::Hide => false,
        TooltipMode::Show => state.tooltip_shown || state.in_drag,
    };
    let split = options.range && options.tooltip_split;
    let format = |value: SliderValue| options.formatter.format(&value);

    let main = if let Some(preview) = state.preview {
        let position = if options.reversed {
            100.0 - preview.percentage
        } else {
            preview.percentage
        };
        TooltipView {
            text: format(SliderValue::Single(preview.value)),
            position,
            visible: shown,
        }
    } else if options.range {
        TooltipView {
            text: format(SliderValue::Range(state.value)),
            position: (p0 + p1) / 2.0,
            visible: shown && !split,
        }
    } else {
        TooltipView {
            text: format(SliderValue::Single(state.value[0])),
            position: p0,
            visible: shown,
        }
    };

    let side = |i: usize, position: f64| TooltipView {
        text: format(SliderValue::Single(state.value[i])),
        position,
        visible: shown && split,
    };

    TooltipsView {
        main,
        min: options.range.then(|| side(0, p0)),
        max: options.range.then(|| side(1, p1)),
        placement: options.resolved_tooltip_position(),
    }
}
