//! Slider notifications and listener registration.

use super::value::SliderValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notification emitted by a slider.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderEvent {
    /// Value applied during interaction
    Slide(SliderValue),
    /// Value changed
    Change {
        /// Value before the change
        old_value: SliderValue,
        /// Value after the change
        new_value: SliderValue,
    },
    /// Interaction began
    SlideStart(SliderValue),
    /// Interaction ended
    SlideStop(SliderValue),
    /// Slider was enabled
    SlideEnabled,
    /// Slider was disabled
    SlideDisabled,
}

impl SliderEvent {
    /// Kind of this event.
    #[must_use]
    pub const fn kind(&self) -> SliderEventKind {
        match self {
            Self::Slide(_) => SliderEventKind::Slide,
            Self::Change { .. } => SliderEventKind::Change,
            Self::SlideStart(_) => SliderEventKind::SlideStart,
            Self::SlideStop(_) => SliderEventKind::SlideStop,
            Self::SlideEnabled => SliderEventKind::SlideEnabled,
            Self::SlideDisabled => SliderEventKind::SlideDisabled,
        }
    }

    /// Value carried by the event; the new value for [`SliderEvent::Change`].
    #[must_use]
    pub const fn value(&self) -> Option<SliderValue> {
        match self {
            Self::Slide(v) | Self::SlideStart(v) | Self::SlideStop(v) => Some(*v),
            Self::Change { new_value, .. } => Some(*new_value),
            Self::SlideEnabled | Self::SlideDisabled => None,
        }
    }
}

/// Event kinds, named as hosts subscribe to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SliderEventKind {
    /// `"slide"`
    Slide,
    /// `"change"`
    Change,
    /// `"slideStart"`
    SlideStart,
    /// `"slideStop"`
    SlideStop,
    /// `"slideEnabled"`
    SlideEnabled,
    /// `"slideDisabled"`
    SlideDisabled,
}

impl SliderEventKind {
    /// All kinds.
    pub const ALL: [Self; 6] = [
        Self::Slide,
        Self::Change,
        Self::SlideStart,
        Self::SlideStop,
        Self::SlideEnabled,
        Self::SlideDisabled,
    ];

    /// Subscription name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Change => "change",
            Self::SlideStart => "slideStart",
            Self::SlideStop => "slideStop",
            Self::SlideEnabled => "slideEnabled",
            Self::SlideDisabled => "slideDisabled",
        }
    }
}

impl fmt::Display for SliderEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing an unknown event name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown slider event: {0}")]
pub struct UnknownEventKind(pub String);

impl FromStr for SliderEventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// Handle returned by [`Listeners::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&SliderEvent) + Send>;

struct Listener {
    id: ListenerId,
    kind: SliderEventKind,
    callback: Callback,
}

/// Listener table keyed by event kind.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
    next_id: u64,
}

impl Listeners {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `callback` to `kind`.
    pub fn on<F>(&mut self, kind: SliderEventKind, callback: F) -> ListenerId
    where
        F: FnMut(&SliderEvent) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            kind,
            callback: Box::new(callback),
        });
        id
    }

    /// Unsubscribe; returns whether a listener was removed.
    pub fn off(&mut self, kind: SliderEventKind, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| !(l.id == id && l.kind == kind));
        self.entries.len() != before
    }

    /// Deliver `event` to its subscribers in registration order.
    pub fn emit(&mut self, event: &SliderEvent) {
        let kind = event.kind();
        for listener in self.entries.iter_mut().filter(|l| l.kind == kind) {
            (listener.callback)(event);
        }
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
