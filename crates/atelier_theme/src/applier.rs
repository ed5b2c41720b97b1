//! Projecting theme packs onto a live surface
//!
//! [`ThemeApplier`] owns the surface, the applied `(pack, context)` state and
//! a listener list. Every [`ThemeApplier::apply`] call:
//!
//! 1. Removes every parameter written by the previous apply.
//! 2. Writes one named style parameter per token, in canonical order
//!    (see [`style_parameters`]).
//! 3. Sets the `data-mode` and `data-context` attributes.
//! 4. Replaces the applied state and notifies every listener exactly once.
//!
//! Applying the same pack twice leaves the surface unchanged.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::ThemeError;
use crate::pack::ThemePack;
use crate::registry::ThemeRegistry;
use crate::scheme::Context;
use crate::tokens::*;

/// Surface attribute carrying `dark` / `light`
pub const MODE_ATTRIBUTE: &str = "data-mode";
/// Surface attribute carrying `operational` / `narrative`
pub const CONTEXT_ATTRIBUTE: &str = "data-context";

/// A presentation surface that accepts named style parameters
///
/// On the web this is an element's custom properties plus data attributes.
pub trait StyleSurface {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
}

impl<S: StyleSurface + ?Sized> StyleSurface for &mut S {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        (**self).remove_property(name);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value);
    }
}

/// In-memory surface, for headless use and tests
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    properties: IndexMap<String, String>,
    attributes: IndexMap<String, String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl StyleSurface for MemorySurface {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.shift_remove(name);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// Project a token set to named style parameters
///
/// Order is fixed: core colors, semantic colors, shadows, radii, one group per
/// type step (size, weight, tracking, leading, then transform when present),
/// then density fields.
///
/// ```
/// use atelier_theme::{style_parameters, ThemePackPreset};
///
/// let params = style_parameters(&ThemePackPreset::Atlas.tokens());
/// assert_eq!(params.get_index(0).map(|(k, _)| k.as_str()), Some("--color-base"));
/// assert!(params.contains_key("--density-card-padding"));
/// ```
pub fn style_parameters(tokens: &TokenSet) -> IndexMap<String, String> {
    let mut params = IndexMap::with_capacity(64);

    for token in ColorToken::CORE.into_iter().chain(ColorToken::SEMANTIC) {
        params.insert(
            format!("--color-{}", token.name()),
            tokens.colors.get(token).to_string(),
        );
    }
    for token in ShadowToken::ALL {
        params.insert(
            format!("--shadow-{}", token.name()),
            tokens.shadows.get(token).to_string(),
        );
    }
    for token in RadiusToken::ALL {
        params.insert(
            format!("--radius-{}", token.name()),
            tokens.radii.get(token).to_string(),
        );
    }
    for token in TypeStepToken::ALL {
        let step = tokens.type_scale.get(token);
        let prefix = format!("--type-{}", token.name());
        params.insert(format!("{prefix}-size"), step.size.clone());
        params.insert(format!("{prefix}-weight"), step.weight.clone());
        params.insert(format!("{prefix}-tracking"), step.tracking.clone());
        params.insert(format!("{prefix}-leading"), step.leading.clone());
        if let Some(transform) = &step.transform {
            params.insert(format!("{prefix}-transform"), transform.clone());
        }
    }
    for token in DensityToken::ALL {
        params.insert(
            format!("--density-{}", kebab_case(token.field_name())),
            tokens.density.get(token).to_string(),
        );
    }

    params
}

/// The most recently applied pack and context
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedState {
    pub pack: ThemePack,
    pub context: Context,
}

/// Change notification delivered to listeners after each apply
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeChange<'a> {
    pub pack: &'a ThemePack,
    pub context: Context,
}

/// Listener callback
pub type ThemeListener = Box<dyn Fn(&ThemeChange<'_>) + Send + Sync>;

/// Handle returned by [`ThemeApplier::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Applies theme packs to a surface and tracks the applied state
pub struct ThemeApplier<S: StyleSurface> {
    surface: S,
    state: Option<AppliedState>,
    /// Parameter names written by the last apply, for stale removal
    applied_keys: Vec<String>,
    listeners: Vec<(SubscriptionId, ThemeListener)>,
    next_subscription: u64,
}

impl<S: StyleSurface> ThemeApplier<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: None,
            applied_keys: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Register a listener for change notifications
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeChange<'_>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Apply a normalized pack in the given context
    pub fn apply(&mut self, pack: &ThemePack, context: Context) {
        let params = style_parameters(&pack.tokens);

        // Clearing every previous key keeps the surface in canonical order
        // regardless of what was applied before.
        let mut stale = 0usize;
        for key in &self.applied_keys {
            if !params.contains_key(key) {
                stale += 1;
            }
            self.surface.remove_property(key);
        }
        for (name, value) in &params {
            self.surface.set_property(name, value);
        }
        self.surface.set_attribute(MODE_ATTRIBUTE, pack.mode.as_str());
        self.surface.set_attribute(CONTEXT_ATTRIBUTE, context.as_str());

        debug!(
            pack = %pack.name,
            %context,
            parameters = params.len(),
            stale,
            "applied theme pack"
        );

        self.applied_keys = params.into_keys().collect();
        let state = self.state.insert(AppliedState {
            pack: pack.clone(),
            context,
        });

        let change = ThemeChange {
            pack: &state.pack,
            context,
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }
    }

    /// Load a pack from `registry` by name and apply it
    pub fn apply_named(
        &mut self,
        registry: &ThemeRegistry,
        name: &str,
        context: Context,
    ) -> Result<(), ThemeError> {
        let pack = registry.try_load(name)?;
        self.apply(&pack, context);
        Ok(())
    }

    /// Switch context while keeping the applied pack
    ///
    /// Returns false when nothing has been applied yet.
    pub fn set_context(&mut self, context: Context) -> bool {
        let Some(state) = self.state.take() else {
            return false;
        };
        self.apply(&state.pack, context);
        true
    }

    pub fn applied(&self) -> Option<&AppliedState> {
        self.state.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
