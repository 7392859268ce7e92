//! Host-owned registry of slider instances.
//!
//! Declarative markup (`data-provide="slider"`) becomes sliders through
//! [`SliderRegistry::scan`]; imperative hosts [`insert`](SliderRegistry::insert)
//! or [`create`](SliderRegistry::create) them directly. Instances are
//! addressed by [`WidgetId`].

use crate::slider::{GeometryProvider, HostElement, Slider, SliderError, SliderOverrides};
use h5ui_core::WidgetId;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Preferred namespace for the slider plugin.
pub const NAMESPACE: &str = "slider";

/// Namespace used when [`NAMESPACE`] is already taken by another plugin.
pub const FALLBACK_NAMESPACE: &str = "bootstrapSlider";

/// Attribute that marks an element for automatic slider creation.
pub const PROVIDE_ATTRIBUTE: &str = "data-provide";

/// A host element with the geometry of where its slider renders.
pub struct HostBinding {
    /// Element to replace
    pub element: Box<dyn HostElement>,
    /// Track geometry
    pub geometry: Box<dyn GeometryProvider>,
}

impl HostBinding {
    /// Bind an element to a geometry source.
    pub fn new(
        element: impl HostElement + 'static,
        geometry: impl GeometryProvider + 'static,
    ) -> Self {
        Self {
            element: Box::new(element),
            geometry: Box::new(geometry),
        }
    }

    /// Whether the element asks for a slider.
    #[must_use]
    pub fn provides_slider(&self) -> bool {
        self.element.attribute(PROVIDE_ATTRIBUTE).as_deref() == Some(NAMESPACE)
    }
}

impl fmt::Debug for HostBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBinding")
            .field("provides_slider", &self.provides_slider())
            .finish_non_exhaustive()
    }
}

/// Result of [`SliderRegistry::scan`].
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Sliders created, in input order
    pub created: Vec<WidgetId>,
    /// Bindings without `data-provide="slider"`, handed back untouched
    pub skipped: Vec<HostBinding>,
    /// Bindings whose slider failed to build
    pub failed: usize,
}

/// Registry of live sliders.
pub struct SliderRegistry {
    namespace: &'static str,
    sliders: BTreeMap<WidgetId, Slider>,
    next_id: WidgetId,
}

impl SliderRegistry {
    /// Create a registry, choosing the namespace against those already taken.
    pub fn new<S: AsRef<str>>(taken_namespaces: &[S]) -> Self {
        let namespace = if taken_namespaces.iter().any(|n| n.as_ref() == NAMESPACE) {
            warn!(
                namespace = NAMESPACE,
                fallback = FALLBACK_NAMESPACE,
                "slider namespace already taken, registering under fallback"
            );
            FALLBACK_NAMESPACE
        } else {
            NAMESPACE
        };
        Self {
            namespace,
            sliders: BTreeMap::new(),
            next_id: WidgetId::new(1),
        }
    }

    /// Namespace the sliders are registered under.
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Take ownership of a slider.
    pub fn insert(&mut self, slider: Slider) -> WidgetId {
        let id = self.next_id;
        self.next_id = id.next();
        self.sliders.insert(id, slider);
        debug!(%id, namespace = self.namespace, "slider registered");
        id
    }

    /// Build a slider over `binding` and register it.
    pub fn create(
        &mut self,
        binding: HostBinding,
        overrides: &SliderOverrides,
    ) -> Result<WidgetId, SliderError> {
        let slider = Slider::from_boxed(binding.element, binding.geometry, overrides)?;
        Ok(self.insert(slider))
    }

    /// Create sliders for every binding marked `data-provide="slider"`.
    pub fn scan<I>(&mut self, bindings: I) -> ScanOutcome
    where
        I: IntoIterator<Item = HostBinding>,
    {
        let mut outcome = ScanOutcome::default();
        for binding in bindings {
            if !binding.provides_slider() {
                outcome.skipped.push(binding);
                continue;
            }
            match self.create(binding, &SliderOverrides::default()) {
                Ok(id) => outcome.created.push(id),
                Err(err) => {
                    warn!(error = %err, "skipping element: slider construction failed");
                    outcome.failed += 1;
                }
            }
        }
        outcome
    }

    /// Slider by id.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&Slider> {
        self.sliders.get(&id)
    }

    /// Mutable slider by id.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Slider> {
        self.sliders.get_mut(&id)
    }

    /// Re-initialize an existing slider with additional options.
    ///
    /// Returns `Ok(None)` when no slider has this id.
    pub fn configure(
        &mut self,
        id: WidgetId,
        overrides: &SliderOverrides,
    ) -> Result<Option<&mut Slider>, SliderError> {
        match self.sliders.get_mut(&id) {
            Some(slider) => {
                slider.configure(overrides)?;
                Ok(Some(slider))
            }
            None => Ok(None),
        }
    }

    /// Destroy a slider and hand back its host element.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn HostElement>> {
        self.sliders.remove(&id).map(Slider::destroy)
    }

    /// Number of sliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.sliders.keys().copied()
    }
}

impl Default for SliderRegistry {
    fn default() -> Self {
        Self::new::<&str>(&[])
    }
}

impl fmt::Debug for SliderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderRegistry")
            .field("namespace", &self.namespace)
            .field("ids", &self.sliders.keys().collect::<Vec<_>>())
            .finish()
    }
}
