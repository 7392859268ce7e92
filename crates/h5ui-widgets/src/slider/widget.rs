//! Slider widget: value state, pointer/touch/keyboard interaction, and the
//! public imperative API.

use super::error::SliderError;
use super::events::{ListenerId, Listeners, SliderEvent, SliderEventKind};
use super::host::{GeometryProvider, HostElement};
use super::layout::{tick_percentage, SliderLayout};
use super::options::{resolve_options, Selection, SliderOptions, SliderOverrides};
use super::scale::{clamp, snap_to_tick};
use super::value::{decimal_places, round_to, Handle, SliderInput, SliderValue};
use h5ui_core::{Event, Key, MouseButton, Orientation, Point};
use serde_json::Value;
use std::fmt;
use tracing::{debug, trace};

/// Minimum along-axis touch travel that starts a drag.
const TOUCH_DRAG_THRESHOLD: f32 = 15.0;
/// Maximum cross-axis touch travel still treated as a drag.
const TOUCH_CROSS_TOLERANCE: f32 = 5.0;

/// Value and position shown while hovering a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPreview {
    /// Tick value
    pub value: f64,
    /// Tick percentage, before the `reversed` flip
    pub percentage: f64,
}

/// Runtime state of a slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    /// Handle values; in single mode the second slot is `min` or `max`
    /// depending on `selection`
    pub value: [f64; 2],
    /// Accepting input
    pub enabled: bool,
    /// Page offset of the track
    pub offset: Point,
    /// Track length along the orientation axis
    pub size: f32,
    /// Handle percentages, then the step expressed as a percentage
    pub percentage: [f64; 3],
    /// Handle being dragged
    pub dragged: Option<Handle>,
    /// Pointer drag in progress
    pub in_drag: bool,
    /// Pointer is over the widget
    pub over: bool,
    /// Tooltip requested by hover or focus
    pub tooltip_shown: bool,
    /// Handle holding keyboard focus
    pub focused: Option<Handle>,
    /// Tick hover preview
    pub preview: Option<TickPreview>,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            value: [0.0, 0.0],
            enabled: true,
            offset: Point::ORIGIN,
            size: 0.0,
            percentage: [0.0, 0.0, 100.0],
            dragged: None,
            in_drag: false,
            over: false,
            tooltip_shown: false,
            focused: None,
            preview: None,
        }
    }
}

/// Part of the slider an input event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The track (and anything not more specific)
    Track,
    /// A handle
    Handle(Handle),
    /// Tick mark by index
    Tick(usize),
}

/// Range slider bound to a host element.
///
/// # Example
///
/// ```
/// use h5ui_widgets::slider::{FixedGeometry, MemoryElement, Slider, SliderOverrides, SliderValue};
///
/// let mut slider = Slider::new(
///     MemoryElement::new(),
///     FixedGeometry::sized(100.0, 20.0),
///     SliderOverrides::default().min(0.0).max(100.0).value(20.0),
/// )?;
/// slider.set_value(150.0, false, false)?;
/// assert_eq!(slider.get_value(), SliderValue::Single(100.0));
/// # Ok::<(), h5ui_widgets::slider::SliderError>(())
/// ```
pub struct Slider {
    options: SliderOptions,
    state: SliderState,
    element: Box<dyn HostElement>,
    geometry: Box<dyn GeometryProvider>,
    listeners: Listeners,
    touch_start: Option<Point>,
}

impl Slider {
    /// Create a slider over `element`.
    ///
    /// Options resolve as defaults < `data-slider-*` attributes of `element`
    /// < `overrides`.
    pub fn new(
        element: impl HostElement + 'static,
        geometry: impl GeometryProvider + 'static,
        overrides: SliderOverrides,
    ) -> Result<Self, SliderError> {
        Self::from_boxed(Box::new(element), Box::new(geometry), &overrides)
    }

    /// Create a slider from boxed host seams.
    pub fn from_boxed(
        element: Box<dyn HostElement>,
        geometry: Box<dyn GeometryProvider>,
        overrides: &SliderOverrides,
    ) -> Result<Self, SliderError> {
        let attributes = SliderOverrides::from_attributes(element.as_ref());
        let options = resolve_options(&SliderOptions::default(), &attributes, overrides);
        let mut slider = Self {
            options,
            state: SliderState::default(),
            element,
            geometry,
            listeners: Listeners::new(),
            touch_start: None,
        };
        slider.build()?;
        debug!(
            id = %slider.options.id,
            range = slider.options.range,
            value = %slider.get_value(),
            "slider created"
        );
        Ok(slider)
    }

    fn build(&mut self) -> Result<(), SliderError> {
        match self.options.value {
            SliderValue::Range(_) => self.options.range = true,
            SliderValue::Single(v) if self.options.range => {
                self.options.value = SliderValue::Range([v, self.options.max]);
            }
            SliderValue::Single(_) => {}
        }

        self.state = SliderState {
            enabled: self.options.enabled,
            ..SliderState::default()
        };
        self.touch_start = None;
        self.element.set_visible(false);
        self.refresh_geometry();

        let initial = SliderInput::from(self.options.value).validate()?;
        self.apply_value(initial, false, false);
        Ok(())
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Current value: a number in single mode, a pair in range mode.
    #[must_use]
    pub fn get_value(&self) -> SliderValue {
        if self.options.range {
            SliderValue::Range(self.state.value)
        } else {
            SliderValue::Single(self.state.value[0])
        }
    }

    /// Set the value, clamped to `[min, max]` and rounded to the precision.
    ///
    /// In range mode a single number `v` means `[v, max]`; in single mode a
    /// pair contributes its first element.
    pub fn set_value(
        &mut self,
        value: impl Into<SliderInput>,
        trigger_slide: bool,
        trigger_change: bool,
    ) -> Result<&mut Self, SliderError> {
        let value = value.into().validate()?;
        self.apply_value(value, trigger_slide, trigger_change);
        Ok(self)
    }

    fn apply_value(&mut self, value: SliderValue, trigger_slide: bool, trigger_change: bool) {
        let old_value = self.get_value();
        let (min, max) = (self.options.min, self.options.max);
        let precision = self.options.effective_precision();
        let fit = |v: f64| clamp(round_to(v, precision), min, max);

        self.state.value = if self.options.range {
            match value {
                SliderValue::Single(v) => [fit(v), fit(max)],
                SliderValue::Range([low, high]) => [fit(low), fit(high)],
            }
        } else {
            let other = if self.options.selection == Selection::After {
                max
            } else {
                min
            };
            [fit(value.low()), other]
        };

        self.state.percentage = if max > min {
            let scale = self.options.scale;
            [
                scale.to_percentage(&self.options, self.state.value[0]),
                scale.to_percentage(&self.options, self.state.value[1]),
                self.options.step * 100.0 / (max - min),
            ]
        } else {
            [0.0, 0.0, 100.0]
        };

        let new_value = self.get_value();
        let text = new_value.to_string();
        self.element.set_attribute("data-value", &text);
        self.element.set_attribute("value", &text);
        trace!(value = %new_value, percentage = ?self.state.percentage, "slider value applied");

        if trigger_slide {
            self.emit(SliderEvent::Slide(new_value));
        }
        if trigger_change && old_value != new_value {
            self.emit(SliderEvent::Change {
                old_value,
                new_value,
            });
        }
    }

    // =========================================================================
    // Enable / Disable
    // =========================================================================

    /// Accept input again.
    pub fn enable(&mut self) -> &mut Self {
        self.state.enabled = true;
        self.options.enabled = true;
        debug!(id = %self.options.id, "slider enabled");
        self.emit(SliderEvent::SlideEnabled);
        self
    }

    /// Ignore input; any drag in progress is abandoned.
    pub fn disable(&mut self) -> &mut Self {
        self.state.enabled = false;
        self.options.enabled = false;
        self.state.in_drag = false;
        self.state.dragged = None;
        self.state.focused = None;
        debug!(id = %self.options.id, "slider disabled");
        self.emit(SliderEvent::SlideDisabled);
        self
    }

    /// Flip between enabled and disabled.
    pub fn toggle(&mut self) -> &mut Self {
        if self.state.enabled {
            self.disable()
        } else {
            self.enable()
        }
    }

    /// Whether input is accepted.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Subscribe to an event kind.
    pub fn on<F>(&mut self, kind: SliderEventKind, callback: F) -> ListenerId
    where
        F: FnMut(&SliderEvent) + Send + 'static,
    {
        self.listeners.on(kind, callback)
    }

    /// Unsubscribe; returns whether the listener existed.
    pub fn off(&mut self, kind: SliderEventKind, id: ListenerId) -> bool {
        self.listeners.off(kind, id)
    }

    fn emit(&mut self, event: SliderEvent) {
        self.listeners.emit(&event);
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Resolved options.
    #[must_use]
    pub const fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// Value of option `name`.
    pub fn get_attribute(&self, name: &str) -> Result<Value, SliderError> {
        self.options.get(name)
    }

    /// All options as a JSON object.
    pub fn attributes(&self) -> Result<Value, SliderError> {
        Ok(serde_json::to_value(&self.options)?)
    }

    /// Change option `name`; takes effect on the next [`Slider::refresh`].
    pub fn set_attribute(&mut self, name: &str, value: Value) -> Result<&mut Self, SliderError> {
        let overrides = SliderOverrides::from_entry(name, value)?;
        self.options.apply(&overrides);
        Ok(self)
    }

    /// Layer `overrides` onto the current options and rebuild.
    pub fn configure(&mut self, overrides: &SliderOverrides) -> Result<&mut Self, SliderError> {
        self.options.apply(overrides);
        self.refresh()
    }

    /// Rebuild from the current options.
    ///
    /// The value resets to the `value` option. Listeners are kept.
    pub fn refresh(&mut self) -> Result<&mut Self, SliderError> {
        self.options.normalize();
        self.build()?;
        debug!(id = %self.options.id, value = %self.get_value(), "slider refreshed");
        Ok(self)
    }

    /// Re-read track geometry.
    pub fn relayout(&mut self) -> &mut Self {
        self.refresh_geometry();
        self
    }

    /// Tear down: drop every listener, show the host element again, and
    /// hand it back.
    pub fn destroy(mut self) -> Box<dyn HostElement> {
        self.listeners.clear();
        self.element.set_visible(true);
        self.element.remove_attribute("data-value");
        debug!(id = %self.options.id, "slider destroyed");
        self.element
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Runtime state.
    #[must_use]
    pub const fn state(&self) -> &SliderState {
        &self.state
    }

    /// Render model for the current state.
    #[must_use]
    pub fn layout(&self) -> SliderLayout {
        SliderLayout::compute(&self.options, &self.state)
    }

    /// The host element.
    #[must_use]
    pub fn element(&self) -> &dyn HostElement {
        self.element.as_ref()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Deliver an event to the track.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.dispatch(Target::Track, event)
    }

    /// Deliver an event to part of the slider; returns whether it was consumed.
    pub fn dispatch(&mut self, target: Target, event: &Event) -> bool {
        match (target, event) {
            (_, Event::Resize { .. }) => {
                self.relayout();
                false
            }
            (Target::Handle(handle), Event::KeyDown { key }) => self.key_down(handle, *key),
            (Target::Handle(handle), Event::FocusIn) => {
                self.state.focused = Some(handle);
                self.show_tooltip();
                false
            }
            (Target::Handle(handle), Event::FocusOut) => {
                if self.state.focused == Some(handle) {
                    self.state.focused = None;
                }
                self.hide_tooltip();
                false
            }
            (Target::Tick(index), Event::MouseEnter) if self.options.ticks_tooltip => {
                self.preview_tick(index);
                false
            }
            (Target::Tick(_), Event::MouseLeave) if self.options.ticks_tooltip => {
                self.state.preview = None;
                self.hide_tooltip();
                false
            }
            (_, Event::MouseEnter) => {
                self.show_tooltip();
                false
            }
            (_, Event::MouseLeave) => {
                self.hide_tooltip();
                false
            }
            (
                _,
                Event::MouseDown {
                    position,
                    button: MouseButton::Left,
                },
            ) => self.press(*position),
            (_, Event::MouseMove { position }) => self.drag_to(*position),
            (
                _,
                Event::MouseUp {
                    button: MouseButton::Left,
                    ..
                },
            ) => self.release(),
            (_, Event::TouchStart { position, .. }) => {
                self.touch_start = Some(*position);
                false
            }
            (_, Event::TouchMove { position, .. }) => self.touch_move(*position),
            (_, Event::TouchEnd { .. } | Event::TouchCancel { .. }) => {
                self.touch_start = None;
                self.release()
            }
            _ => false,
        }
    }

    fn refresh_geometry(&mut self) {
        self.state.offset = self.geometry.offset();
        self.state.size = self.geometry.size().extent(self.options.orientation);
    }

    /// Track percentage under `position`, snapped to the step.
    fn percentage_at(&self, position: Point) -> f64 {
        let orientation = self.options.orientation;
        let size = f64::from(self.state.size);
        if size <= 0.0 {
            return 0.0;
        }
        let distance =
            f64::from(position.along(orientation) - self.state.offset.along(orientation));
        let mut percentage = distance / size * 100.0;
        let step = self.state.percentage[2];
        if step > 0.0 {
            percentage = (percentage / step).round() * step;
        }
        if self.options.reversed {
            percentage = 100.0 - percentage;
        }
        clamp(percentage, 0.0, 100.0)
    }

    /// Hand the drag to the other handle when `percentage` crosses it.
    fn correct_handle_order(&mut self, percentage: f64) {
        if !self.options.range {
            return;
        }
        let precision = decimal_places(percentage).saturating_sub(1);
        let target = round_to(percentage, precision);
        let [p0, p1, _] = self.state.percentage;
        match self.state.dragged {
            Some(Handle::Min) if round_to(p1, precision) < target => {
                self.state.percentage[0] = p1;
                self.state.dragged = Some(Handle::Max);
            }
            Some(Handle::Max) if round_to(p0, precision) > target => {
                self.state.percentage[1] = p0;
                self.state.dragged = Some(Handle::Min);
            }
            _ => {}
        }
    }

    fn calculate_value(&self, snap_to_tick_bounds: bool) -> SliderValue {
        let options = &self.options;
        let precision = options.effective_precision();
        let to_value = |p: f64| round_to(options.scale.to_value(options, p), precision);
        let snap = |v: f64| {
            if snap_to_tick_bounds {
                snap_to_tick(&options.ticks, v, options.ticks_snap_bounds).unwrap_or(v)
            } else {
                v
            }
        };
        let [p0, p1, _] = self.state.percentage;

        if options.range {
            let low = if p0 == 0.0 { options.min } else { to_value(p0) };
            let high = if p1 == 100.0 { options.max } else { to_value(p1) };
            SliderValue::Range([snap(low), snap(high)])
        } else {
            SliderValue::Single(snap(to_value(p0)))
        }
    }

    fn press(&mut self, position: Point) -> bool {
        if !self.state.enabled {
            return false;
        }
        self.refresh_geometry();
        let percentage = self.percentage_at(position);

        if self.options.range {
            let [p0, p1, _] = self.state.percentage;
            let nearer = if (p0 - percentage).abs() <= (p1 - percentage).abs() {
                Handle::Min
            } else {
                Handle::Max
            };
            self.state.dragged = Some(nearer);
            self.correct_handle_order(percentage);
        } else {
            self.state.dragged = Some(Handle::Min);
        }

        let handle = self.state.dragged.unwrap_or_default();
        self.state.percentage[handle.index()] = percentage;
        self.state.in_drag = true;

        let value = self.calculate_value(false);
        debug!(?handle, percentage, value = %value, "slider drag started");
        self.emit(SliderEvent::SlideStart(value));
        self.apply_value(value, false, true);

        if self.options.focus {
            self.state.focused = Some(handle);
        }
        true
    }

    fn drag_to(&mut self, position: Point) -> bool {
        if !(self.state.in_drag && self.state.enabled) {
            return false;
        }
        let percentage = self.percentage_at(position);
        self.correct_handle_order(percentage);
        let handle = self.state.dragged.unwrap_or_default();
        self.state.percentage[handle.index()] = percentage;

        let value = self.calculate_value(true);
        trace!(?handle, percentage, value = %value, "slider drag moved");
        self.apply_value(value, true, true);
        true
    }

    fn release(&mut self) -> bool {
        if !(self.state.in_drag && self.state.enabled) {
            return false;
        }
        self.state.in_drag = false;
        if !self.state.over {
            self.hide_tooltip();
        }

        let value = self.calculate_value(true);
        if value != self.get_value() {
            self.apply_value(value, false, true);
        }
        debug!(value = %value, "slider drag stopped");
        self.emit(SliderEvent::SlideStop(value));
        true
    }

    fn touch_move(&mut self, position: Point) -> bool {
        if self.state.in_drag {
            return self.drag_to(position);
        }
        let Some(start) = self.touch_start else {
            return false;
        };
        let orientation = self.options.orientation;
        let delta = position - start;
        let along = delta.along(orientation).abs();
        let across = delta.along(orientation.cross()).abs();
        if along >= TOUCH_DRAG_THRESHOLD && across <= TOUCH_CROSS_TOLERANCE {
            self.press(position)
        } else {
            false
        }
    }

    fn key_down(&mut self, handle: Handle, key: Key) -> bool {
        if !self.state.enabled {
            return false;
        }
        let mut direction = match key {
            Key::ArrowLeft | Key::ArrowDown => -1.0,
            Key::ArrowRight | Key::ArrowUp => 1.0,
            _ => return false,
        };
        if self.options.natural_arrow_keys {
            let flip = match self.options.orientation {
                Orientation::Vertical => !self.options.reversed,
                Orientation::Horizontal => self.options.reversed,
            };
            if flip {
                direction = -direction;
            }
        }

        let handle = if self.options.range { handle } else { Handle::Min };
        let target = self.state.value[handle.index()] + direction * self.options.step;
        let requested = if self.options.range {
            let mut pair = self.state.value;
            pair[handle.index()] = target;
            SliderValue::Range(pair)
        } else {
            SliderValue::Single(target)
        };

        self.emit(SliderEvent::SlideStart(requested));
        self.apply_value(requested, true, true);
        let applied = self.get_value();
        self.emit(SliderEvent::SlideStop(applied));
        true
    }

    fn show_tooltip(&mut self) {
        self.state.tooltip_shown = true;
        self.state.over = true;
    }

    fn hide_tooltip(&mut self) {
        if !self.state.in_drag {
            self.state.tooltip_shown = false;
        }
        self.state.over = false;
    }

    fn preview_tick(&mut self, index: usize) {
        if let Some(&value) = self.options.ticks.get(index) {
            self.state.preview = Some(TickPreview {
                value,
                percentage: tick_percentage(&self.options, index),
            });
            self.show_tooltip();
        }
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::host::{FixedGeometry, MemoryElement};
    use crate::slider::options::TooltipMode;
    use crate::slider::scale::Scale;
    use h5ui_core::{Rect, TouchId};
    use proptest::prelude::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn slider(overrides: SliderOverrides) -> Slider {
        Slider::new(MemoryElement::new(), FixedGeometry::sized(100.0, 20.0), overrides).unwrap()
    }

    fn record(slider: &mut Slider) -> Arc<Mutex<Vec<SliderEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        for kind in SliderEventKind::ALL {
            let sink = events.clone();
            slider.on(kind, move |e| sink.lock().unwrap().push(e.clone()));
        }
        events
    }

    fn down(x: f32) -> Event {
        Event::MouseDown {
            position: Point::new(x, 10.0),
            button: MouseButton::Left,
        }
    }

    fn motion(x: f32) -> Event {
        Event::MouseMove {
            position: Point::new(x, 10.0),
        }
    }

    fn up(x: f32) -> Event {
        Event::MouseUp {
            position: Point::new(x, 10.0),
            button: MouseButton::Left,
        }
    }

    fn key(k: Key) -> Event {
        Event::KeyDown { key: k }
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_new_defaults() {
        let s = slider(SliderOverrides::default());
        assert_eq!(s.get_value(), SliderValue::Single(5.0));
        assert_eq!(s.state().percentage, [50.0, 0.0, 10.0]);
        assert!(s.is_enabled());
        assert!(!s.element().is_visible());
        assert_eq!(s.element().attribute("data-value").as_deref(), Some("5"));
    }

    #[test]
    fn test_new_pair_value_forces_range() {
        let s = slider(SliderOverrides::default().value([2.0, 8.0]));
        assert!(s.options().range);
        assert_eq!(s.get_value(), SliderValue::Range([2.0, 8.0]));
        assert_eq!(s.element().attribute("value").as_deref(), Some("2,8"));
    }

    #[test]
    fn test_new_range_with_scalar_value() {
        let s = slider(SliderOverrides::default().range(true).value(3.0));
        assert_eq!(s.get_value(), SliderValue::Range([3.0, 10.0]));
    }

    #[test]
    fn test_new_reads_data_attributes() {
        let element = MemoryElement::new()
            .with_attribute("data-slider-max", "50")
            .with_attribute("data-slider-value", "[10, 40]")
            .with_attribute("data-slider-step", "5");
        let s = Slider::new(element, FixedGeometry::default(), SliderOverrides::default()).unwrap();
        assert_eq!(s.options().max, 50.0);
        assert_eq!(s.get_value(), SliderValue::Range([10.0, 40.0]));
    }

    #[test]
    fn test_explicit_overrides_beat_attributes() {
        let element = MemoryElement::new().with_attribute("data-slider-max", "50");
        let s = Slider::new(
            element,
            FixedGeometry::default(),
            SliderOverrides::default().max(20.0),
        )
        .unwrap();
        assert_eq!(s.options().max, 20.0);
    }

    #[test]
    fn test_new_rejects_non_finite_initial_value() {
        let result = Slider::new(
            MemoryElement::new(),
            FixedGeometry::default(),
            SliderOverrides::default().value(f64::NAN),
        );
        assert!(matches!(result, Err(SliderError::InvalidInput { .. })));
    }

    #[test]
    fn test_new_survives_huge_precision_attribute() {
        let element =
            MemoryElement::new().with_attribute("data-slider-precision", "4000000000");
        let mut s = Slider::new(element, FixedGeometry::default(), SliderOverrides::default())
            .expect("oversized precision is capped");
        assert_eq!(s.get_value(), SliderValue::Single(5.0));
        s.set_value(3.0, false, false).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(3.0));
    }

    #[test]
    fn test_set_value_with_huge_precision_option() {
        let mut s = slider(SliderOverrides::default().step(0.5).precision(70_000_u32));
        s.set_value(2.5, false, false).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(2.5));
    }

    #[test]
    fn test_new_disabled() {
        let s = slider(SliderOverrides::default().enabled(false));
        assert!(!s.is_enabled());
    }

    // =========================================================================
    // set_value Tests
    // =========================================================================

    #[test]
    fn test_set_value_clamps() {
        let mut s = slider(SliderOverrides::default());
        let events = record(&mut s);
        s.set_value(15.0, false, true).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(10.0));
        assert_eq!(s.state().percentage, [100.0, 0.0, 10.0]);
        assert_eq!(
            *events.lock().unwrap(),
            vec![SliderEvent::Change {
                old_value: SliderValue::Single(5.0),
                new_value: SliderValue::Single(10.0),
            }]
        );
        s.set_value(-3.0, false, false).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(0.0));
    }

    #[test]
    fn test_set_value_precision_from_step() {
        let mut s = slider(SliderOverrides::default().step(0.1));
        s.set_value(3.14159, false, false).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(3.1));
    }

    #[test]
    fn test_set_value_explicit_precision() {
        let mut s = slider(SliderOverrides::default().step(0.5).precision(2_u32));
        s.set_value(1.23456, false, false).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(1.23));
    }

    #[test]
    fn test_set_value_text_input() {
        let mut s = slider(SliderOverrides::default());
        s.set_value("7", false, false).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(7.0));
    }

    #[test]
    fn test_set_value_invalid_keeps_state() {
        let mut s = slider(SliderOverrides::default());
        let err = s.set_value("abc", true, true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input value 'abc' passed in");
        assert_eq!(s.get_value(), SliderValue::Single(5.0));
    }

    #[test]
    fn test_set_value_pair_in_single_mode_uses_first() {
        let mut s = slider(SliderOverrides::default());
        s.set_value([3.0, 9.0], false, false).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(3.0));
    }

    #[test]
    fn test_set_value_scalar_in_range_mode() {
        let mut s = slider(SliderOverrides::default().range(true).value([1.0, 2.0]));
        s.set_value(4.0, false, false).unwrap();
        assert_eq!(s.get_value(), SliderValue::Range([4.0, 10.0]));
    }

    #[test]
    fn test_set_value_selection_after_second_slot() {
        let s = slider(SliderOverrides::default().selection(Selection::After));
        assert_eq!(s.state().value, [5.0, 10.0]);
        assert_eq!(s.state().percentage[1], 100.0);
    }

    #[test]
    fn test_set_value_events() {
        let mut s = slider(SliderOverrides::default());
        let events = record(&mut s);
        s.set_value(7.0, true, true).unwrap();
        s.set_value(7.0, false, true).unwrap();
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                SliderEvent::Slide(SliderValue::Single(7.0)),
                SliderEvent::Change {
                    old_value: SliderValue::Single(5.0),
                    new_value: SliderValue::Single(7.0),
                },
            ]
        );
    }

    #[test]
    fn test_repeated_set_value_slides_without_second_change() {
        let mut s = slider(SliderOverrides::default());
        let events = record(&mut s);
        s.set_value(8.0, true, true).unwrap();
        s.set_value(8.0, true, true).unwrap();
        let events = events.lock().unwrap();
        let count = |kind| events.iter().filter(|e| e.kind() == kind).count();
        assert_eq!(count(SliderEventKind::Slide), 2);
        assert_eq!(count(SliderEventKind::Change), 1);
        assert_eq!(events[2], SliderEvent::Slide(SliderValue::Single(8.0)));
    }

    #[test]
    fn test_degenerate_bounds() {
        let s = slider(SliderOverrides::default().min(4.0).max(4.0).value(9.0));
        assert_eq!(s.get_value(), SliderValue::Single(4.0));
        assert_eq!(s.state().percentage, [0.0, 0.0, 100.0]);
    }

    #[test]
    fn test_logarithmic_percentages() {
        let mut s = slider(
            SliderOverrides::default()
                .min(1.0)
                .max(1000.0)
                .scale(Scale::Logarithmic),
        );
        s.set_value(1.0, false, false).unwrap();
        assert_eq!(s.state().percentage[0], 0.0);
        s.set_value(1000.0, false, false).unwrap();
        assert!((s.state().percentage[0] - 100.0).abs() < 1e-9);
        s.set_value(10.0, false, false).unwrap();
        assert!((s.state().percentage[0] - 33.333).abs() < 0.01);
    }

    // =========================================================================
    // Pointer Tests
    // =========================================================================

    #[test]
    fn test_press_move_release_single() {
        let mut s = slider(SliderOverrides::default());
        let events = record(&mut s);

        assert!(s.handle_event(&down(30.0)));
        assert!(s.state().in_drag);
        assert_eq!(s.get_value(), SliderValue::Single(3.0));

        assert!(s.handle_event(&motion(70.0)));
        assert_eq!(s.get_value(), SliderValue::Single(7.0));

        assert!(s.handle_event(&up(70.0)));
        assert!(!s.state().in_drag);

        let single = SliderValue::Single;
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                SliderEvent::SlideStart(single(3.0)),
                SliderEvent::Change {
                    old_value: single(5.0),
                    new_value: single(3.0)
                },
                SliderEvent::Slide(single(7.0)),
                SliderEvent::Change {
                    old_value: single(3.0),
                    new_value: single(7.0)
                },
                SliderEvent::SlideStop(single(7.0)),
            ]
        );
    }

    #[test]
    fn test_move_without_press_ignored() {
        let mut s = slider(SliderOverrides::default());
        assert!(!s.handle_event(&motion(80.0)));
        assert!(!s.handle_event(&up(80.0)));
        assert_eq!(s.get_value(), SliderValue::Single(5.0));
    }

    #[test]
    fn test_press_outside_track_clamps() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&down(-40.0));
        assert_eq!(s.get_value(), SliderValue::Single(0.0));
        s.handle_event(&motion(400.0));
        assert_eq!(s.get_value(), SliderValue::Single(10.0));
    }

    #[test]
    fn test_press_snaps_to_step_percentage() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&down(34.0));
        assert_eq!(s.state().percentage[0], 30.0);
    }

    #[test]
    fn test_reversed_press() {
        let mut s = slider(SliderOverrides::default().reversed(true));
        s.handle_event(&down(20.0));
        assert_eq!(s.get_value(), SliderValue::Single(8.0));
        assert_eq!(s.layout().handles[0].position, 20.0);
    }

    #[test]
    fn test_track_offset_respected() {
        let mut s = Slider::new(
            MemoryElement::new(),
            FixedGeometry::new(Rect::new(200.0, 50.0, 100.0, 20.0)),
            SliderOverrides::default(),
        )
        .unwrap();
        s.handle_event(&down(260.0));
        assert_eq!(s.get_value(), SliderValue::Single(6.0));
    }

    #[test]
    fn test_range_press_picks_nearer_handle() {
        let mut s = slider(SliderOverrides::default().max(100.0).value([20.0, 60.0]));
        s.handle_event(&down(55.0));
        assert_eq!(s.state().dragged, Some(Handle::Max));
        assert_eq!(s.get_value(), SliderValue::Range([20.0, 55.0]));
    }

    #[test]
    fn test_range_press_tie_prefers_low_handle() {
        let mut s = slider(SliderOverrides::default().max(100.0).value([20.0, 60.0]));
        s.handle_event(&down(40.0));
        assert_eq!(s.state().dragged, Some(Handle::Min));
        assert_eq!(s.get_value(), SliderValue::Range([40.0, 60.0]));
    }

    #[test]
    fn test_range_drag_past_other_handle_swaps() {
        let mut s = slider(SliderOverrides::default().max(100.0).value([20.0, 50.0]));
        s.handle_event(&down(30.0));
        assert_eq!(s.state().dragged, Some(Handle::Min));
        s.handle_event(&motion(80.0));
        assert_eq!(s.state().dragged, Some(Handle::Max));
        assert_eq!(s.get_value(), SliderValue::Range([50.0, 80.0]));
        s.handle_event(&motion(10.0));
        assert_eq!(s.state().dragged, Some(Handle::Min));
        assert_eq!(s.get_value(), SliderValue::Range([10.0, 50.0]));
    }

    #[test]
    fn test_release_snaps_to_tick() {
        let mut s = slider(
            SliderOverrides::default()
                .ticks(vec![0.0, 5.0, 10.0])
                .ticks_snap_bounds(2.0)
                .value(0.0),
        );
        let events = record(&mut s);
        s.handle_event(&down(40.0));
        assert_eq!(s.get_value(), SliderValue::Single(4.0));
        s.handle_event(&up(40.0));
        assert_eq!(s.get_value(), SliderValue::Single(5.0));
        assert_eq!(
            events.lock().unwrap().last(),
            Some(&SliderEvent::SlideStop(SliderValue::Single(5.0)))
        );
    }

    #[test]
    fn test_move_snaps_to_tick_componentwise_in_range() {
        let mut s = slider(
            SliderOverrides::default()
                .ticks(vec![0.0, 5.0, 10.0])
                .ticks_snap_bounds(1.0)
                .value([0.0, 10.0]),
        );
        s.handle_event(&down(90.0));
        s.handle_event(&motion(60.0));
        assert_eq!(s.get_value(), SliderValue::Range([0.0, 5.0]));
    }

    #[test]
    fn test_new_press_ends_prior_drag() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&down(20.0));
        s.handle_event(&down(60.0));
        assert!(s.state().in_drag);
        assert_eq!(s.get_value(), SliderValue::Single(6.0));
        s.handle_event(&up(60.0));
        assert!(!s.state().in_drag);
    }

    #[test]
    fn test_press_focuses_handle_when_configured() {
        let mut s = slider(SliderOverrides::default().focus(true));
        s.handle_event(&down(20.0));
        assert_eq!(s.state().focused, Some(Handle::Min));
    }

    #[test]
    fn test_non_left_button_ignored() {
        let mut s = slider(SliderOverrides::default());
        let right = Event::MouseDown {
            position: Point::new(20.0, 10.0),
            button: MouseButton::Right,
        };
        assert!(!s.handle_event(&right));
        assert!(!s.state().in_drag);
    }

    #[test]
    fn test_relayout_reads_new_geometry() {
        let geometry = FixedGeometry::sized(100.0, 20.0);
        let mut s = Slider::new(
            MemoryElement::new(),
            geometry.clone(),
            SliderOverrides::default(),
        )
        .unwrap();
        geometry.set_rect(Rect::new(0.0, 0.0, 200.0, 20.0));
        s.relayout();
        assert_eq!(s.state().size, 200.0);
        s.handle_event(&down(100.0));
        assert_eq!(s.get_value(), SliderValue::Single(5.0));
    }

    // =========================================================================
    // Touch Tests
    // =========================================================================

    fn touch_start(x: f32, y: f32) -> Event {
        Event::TouchStart {
            id: TouchId::new(1),
            position: Point::new(x, y),
        }
    }

    fn touch_move(x: f32, y: f32) -> Event {
        Event::TouchMove {
            id: TouchId::new(1),
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_touch_small_move_does_not_drag() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&touch_start(10.0, 10.0));
        assert!(!s.handle_event(&touch_move(20.0, 10.0)));
        assert!(!s.state().in_drag);
    }

    #[test]
    fn test_touch_cross_axis_move_does_not_drag() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&touch_start(10.0, 10.0));
        assert!(!s.handle_event(&touch_move(40.0, 30.0)));
        assert!(!s.state().in_drag);
    }

    #[test]
    fn test_touch_drag_horizontal() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&touch_start(10.0, 10.0));
        assert!(s.handle_event(&touch_move(30.0, 12.0)));
        assert_eq!(s.get_value(), SliderValue::Single(3.0));
        assert!(s.handle_event(&touch_move(80.0, 12.0)));
        assert_eq!(s.get_value(), SliderValue::Single(8.0));
        let end = Event::TouchEnd {
            id: TouchId::new(1),
            position: Point::new(80.0, 12.0),
        };
        assert!(s.handle_event(&end));
        assert!(!s.state().in_drag);
    }

    #[test]
    fn test_touch_drag_vertical() {
        let mut s = Slider::new(
            MemoryElement::new(),
            FixedGeometry::sized(20.0, 100.0),
            SliderOverrides::default().orientation(Orientation::Vertical),
        )
        .unwrap();
        s.handle_event(&touch_start(10.0, 10.0));
        assert!(!s.handle_event(&touch_move(30.0, 12.0)));
        assert!(s.handle_event(&touch_move(10.0, 40.0)));
        assert_eq!(s.get_value(), SliderValue::Single(4.0));
    }

    #[test]
    fn test_touch_cancel_releases() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&touch_start(10.0, 10.0));
        s.handle_event(&touch_move(30.0, 10.0));
        assert!(s.handle_event(&Event::TouchCancel { id: TouchId::new(1) }));
        assert!(!s.state().in_drag);
    }

    // =========================================================================
    // Keyboard Tests
    // =========================================================================

    #[test]
    fn test_arrow_keys_step() {
        let mut s = slider(SliderOverrides::default());
        let target = Target::Handle(Handle::Min);
        assert!(s.dispatch(target, &key(Key::ArrowRight)));
        assert_eq!(s.get_value(), SliderValue::Single(6.0));
        s.dispatch(target, &key(Key::ArrowDown));
        s.dispatch(target, &key(Key::ArrowDown));
        assert_eq!(s.get_value(), SliderValue::Single(4.0));
        assert!(!s.dispatch(target, &key(Key::Enter)));
    }

    #[test]
    fn test_keyboard_events_sequence() {
        let mut s = slider(SliderOverrides::default().value(10.0));
        let events = record(&mut s);
        s.dispatch(Target::Handle(Handle::Min), &key(Key::ArrowUp));
        let single = SliderValue::Single;
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                SliderEvent::SlideStart(single(11.0)),
                SliderEvent::Slide(single(10.0)),
                SliderEvent::SlideStop(single(10.0)),
            ]
        );
    }

    #[test]
    fn test_keyboard_does_not_snap_to_ticks() {
        let mut s = slider(
            SliderOverrides::default()
                .ticks(vec![0.0, 5.0, 10.0])
                .ticks_snap_bounds(2.0)
                .value(5.0),
        );
        s.dispatch(Target::Handle(Handle::Min), &key(Key::ArrowRight));
        assert_eq!(s.get_value(), SliderValue::Single(6.0));
    }

    #[test]
    fn test_natural_arrow_keys_vertical() {
        let mut s = slider(
            SliderOverrides::default()
                .natural_arrow_keys(true)
                .orientation(Orientation::Vertical),
        );
        s.dispatch(Target::Handle(Handle::Min), &key(Key::ArrowUp));
        assert_eq!(s.get_value(), SliderValue::Single(4.0));
    }

    #[test]
    fn test_natural_arrow_keys_horizontal_reversed() {
        let mut s = slider(SliderOverrides::default().natural_arrow_keys(true).reversed(true));
        s.dispatch(Target::Handle(Handle::Min), &key(Key::ArrowRight));
        assert_eq!(s.get_value(), SliderValue::Single(4.0));
    }

    #[test]
    fn test_range_keyboard_moves_one_component() {
        let mut s = slider(SliderOverrides::default().value([2.0, 6.0]));
        s.dispatch(Target::Handle(Handle::Max), &key(Key::ArrowLeft));
        assert_eq!(s.get_value(), SliderValue::Range([2.0, 5.0]));
        s.dispatch(Target::Handle(Handle::Min), &key(Key::ArrowRight));
        assert_eq!(s.get_value(), SliderValue::Range([3.0, 5.0]));
    }

    #[test]
    fn test_key_on_track_ignored() {
        let mut s = slider(SliderOverrides::default());
        assert!(!s.handle_event(&key(Key::ArrowRight)));
        assert_eq!(s.get_value(), SliderValue::Single(5.0));
    }

    // =========================================================================
    // Enable / Disable Tests
    // =========================================================================

    #[test]
    fn test_disable_blocks_input() {
        let mut s = slider(SliderOverrides::default());
        let events = record(&mut s);
        s.disable();
        assert!(!s.handle_event(&down(80.0)));
        assert!(!s.dispatch(Target::Handle(Handle::Min), &key(Key::ArrowRight)));
        assert_eq!(s.get_value(), SliderValue::Single(5.0));
        assert_eq!(*events.lock().unwrap(), vec![SliderEvent::SlideDisabled]);
        assert!(!s.layout().handles[0].focusable);
    }

    #[test]
    fn test_disable_abandons_drag() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&down(20.0));
        s.disable();
        assert!(!s.state().in_drag);
        s.enable();
        assert!(!s.handle_event(&motion(90.0)));
        assert_eq!(s.get_value(), SliderValue::Single(2.0));
    }

    #[test]
    fn test_toggle() {
        let mut s = slider(SliderOverrides::default());
        let events = record(&mut s);
        s.toggle();
        assert!(!s.is_enabled());
        s.toggle();
        assert!(s.is_enabled());
        assert_eq!(
            *events.lock().unwrap(),
            vec![SliderEvent::SlideDisabled, SliderEvent::SlideEnabled]
        );
    }

    // =========================================================================
    // Listener Tests
    // =========================================================================

    #[test]
    fn test_off_stops_delivery() {
        let mut s = slider(SliderOverrides::default());
        let count = Arc::new(Mutex::new(0));
        let c = count.clone();
        let id = s.on(SliderEventKind::Slide, move |_| *c.lock().unwrap() += 1);
        s.set_value(1.0, true, false).unwrap();
        assert!(s.off(SliderEventKind::Slide, id));
        s.set_value(2.0, true, false).unwrap();
        assert_eq!(*count.lock().unwrap(), 1);
    }

    // =========================================================================
    // Tooltip Tests
    // =========================================================================

    #[test]
    fn test_hover_shows_tooltip() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&Event::MouseEnter);
        assert!(s.layout().tooltips.main.visible);
        s.handle_event(&Event::MouseLeave);
        assert!(!s.layout().tooltips.main.visible);
    }

    #[test]
    fn test_leave_during_drag_keeps_tooltip_until_release() {
        let mut s = slider(SliderOverrides::default());
        s.handle_event(&Event::MouseEnter);
        s.handle_event(&down(20.0));
        s.handle_event(&Event::MouseLeave);
        assert!(s.layout().tooltips.main.visible);
        s.handle_event(&up(20.0));
        assert!(!s.layout().tooltips.main.visible);
    }

    #[test]
    fn test_focus_shows_tooltip() {
        let mut s = slider(SliderOverrides::default());
        s.dispatch(Target::Handle(Handle::Min), &Event::FocusIn);
        assert_eq!(s.state().focused, Some(Handle::Min));
        assert!(s.layout().tooltips.main.visible);
        s.dispatch(Target::Handle(Handle::Min), &Event::FocusOut);
        assert_eq!(s.state().focused, None);
        assert!(!s.layout().tooltips.main.visible);
    }

    #[test]
    fn test_tooltip_hide_mode() {
        let mut s = slider(SliderOverrides::default().tooltip(TooltipMode::Hide));
        s.handle_event(&Event::MouseEnter);
        assert!(!s.layout().tooltips.main.visible);
    }

    #[test]
    fn test_tick_hover_preview() {
        let mut s = slider(
            SliderOverrides::default()
                .ticks(vec![0.0, 5.0, 10.0])
                .ticks_tooltip(true),
        );
        s.dispatch(Target::Tick(2), &Event::MouseEnter);
        let layout = s.layout();
        assert_eq!(layout.tooltips.main.text, "10");
        assert_eq!(layout.tooltips.main.position, 100.0);
        assert!(layout.tooltips.main.visible);
        assert_eq!(s.get_value(), SliderValue::Single(5.0));

        s.dispatch(Target::Tick(2), &Event::MouseLeave);
        assert_eq!(s.layout().tooltips.main.text, "5");
    }

    // =========================================================================
    // Attribute / Lifecycle Tests
    // =========================================================================

    #[test]
    fn test_get_and_set_attribute() {
        let mut s = slider(SliderOverrides::default());
        assert_eq!(s.get_attribute("step").unwrap(), json!(1.0));
        s.set_attribute("max", json!(20)).unwrap();
        assert_eq!(s.get_attribute("max").unwrap(), json!(20.0));
        assert!(matches!(
            s.set_attribute("colour", json!("red")),
            Err(SliderError::UnknownOption(_))
        ));
        assert!(s.get_attribute("colour").is_err());
    }

    #[test]
    fn test_attributes_object() {
        let s = slider(SliderOverrides::default());
        let all = s.attributes().unwrap();
        assert_eq!(all["min"], json!(0.0));
        assert_eq!(all["tooltip"], json!("show"));
    }

    #[test]
    fn test_refresh_applies_changed_options() {
        let mut s = slider(SliderOverrides::default());
        let events = record(&mut s);
        s.set_attribute("max", json!(100)).unwrap();
        s.set_attribute("value", json!(80)).unwrap();
        s.refresh().unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(80.0));
        assert_eq!(s.state().percentage[0], 80.0);
        s.set_value(1.0, true, false).unwrap();
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_refresh_to_range_mode() {
        let mut s = slider(SliderOverrides::default());
        s.set_attribute("range", json!(true)).unwrap();
        s.refresh().unwrap();
        assert_eq!(s.get_value(), SliderValue::Range([5.0, 10.0]));
    }

    #[test]
    fn test_configure_merges_and_rebuilds() {
        let mut s = slider(SliderOverrides::default());
        s.configure(&SliderOverrides::default().min(2.0).max(4.0)).unwrap();
        assert_eq!(s.get_value(), SliderValue::Single(4.0));
    }

    #[test]
    fn test_destroy_restores_element() {
        let mut s = slider(SliderOverrides::default());
        s.set_value(3.0, false, false).unwrap();
        let element = s.destroy();
        assert!(element.is_visible());
        assert_eq!(element.attribute("data-value"), None);
        assert_eq!(element.attribute("value").as_deref(), Some("3"));
    }

    #[test]
    fn test_resize_event_relayouts() {
        let geometry = FixedGeometry::sized(100.0, 20.0);
        let mut s = Slider::new(
            MemoryElement::new(),
            geometry.clone(),
            SliderOverrides::default(),
        )
        .unwrap();
        geometry.set_rect(Rect::new(0.0, 0.0, 300.0, 20.0));
        s.handle_event(&Event::Resize {
            width: 800.0,
            height: 600.0,
        });
        assert_eq!(s.state().size, 300.0);
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    #[derive(Debug, Clone)]
    enum Gesture {
        Press(f32),
        Move(f32),
        Release,
    }

    fn gesture() -> impl Strategy<Value = Gesture> {
        prop_oneof![
            (-20.0f32..120.0).prop_map(Gesture::Press),
            (-20.0f32..120.0).prop_map(Gesture::Move),
            Just(Gesture::Release),
        ]
    }

    proptest! {
        #[test]
        fn prop_range_order_survives_drags(
            a in 0u8..=100,
            b in 0u8..=100,
            gestures in prop::collection::vec(gesture(), 1..40),
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let mut s = slider(
                SliderOverrides::default()
                    .max(100.0)
                    .value([f64::from(lo), f64::from(hi)]),
            );
            for g in gestures {
                match g {
                    Gesture::Press(x) => s.handle_event(&down(x)),
                    Gesture::Move(x) => s.handle_event(&motion(x)),
                    Gesture::Release => s.handle_event(&up(0.0)),
                };
                let [low, high] = s.state().value;
                prop_assert!(low <= high, "{low} > {high}");
            }
        }

        #[test]
        fn prop_set_value_clamped(v in -1.0e6f64..1.0e6) {
            let mut s = slider(SliderOverrides::default().min(-5.0).max(5.0).step(0.5));
            s.set_value(v, false, false).unwrap();
            let got = s.get_value().low();
            prop_assert!((-5.0..=5.0).contains(&got));
        }

        #[test]
        fn prop_set_value_idempotent(v in -20.0f64..20.0, range in any::<bool>()) {
            let mut s = slider(SliderOverrides::default().range(range).step(0.25));
            s.set_value(v, false, false).unwrap();
            let first = s.state().clone();
            s.set_value(s.get_value(), false, false).unwrap();
            prop_assert_eq!(&first, s.state());

            let events = record(&mut s);
            s.set_value(s.get_value(), true, true).unwrap();
            let events = events.lock().unwrap();
            prop_assert_eq!(events.len(), 1);
            prop_assert_eq!(events[0].kind(), SliderEventKind::Slide);
        }

        #[test]
        fn prop_drag_value_within_bounds(x in -500.0f32..500.0) {
            let mut s = slider(SliderOverrides::default().min(3.0).max(9.0));
            s.handle_event(&down(x));
            let v = s.get_value().low();
            prop_assert!((3.0..=9.0).contains(&v));
        }
    }
}
