//! The root of a session's component tree.

use indexmap::IndexMap;
use tracing::debug;

use crate::engine::FocusStack;
use crate::error::{Error, Result};
use crate::input::Event;
use crate::surface::Surface;

use super::container::Container;
use super::drawable::Drawable;

// =============================================================================
// Screen
// =============================================================================

/// The named top-level views and which one is active.
///
/// Views are stored as drawables; [`Screen::add_view`] only accepts
/// containers, so every stored value answers `as_container`.
#[derive(Default)]
pub struct Screen {
    views: IndexMap<String, Box<dyn Drawable>>,
    active: Option<String>,
}

impl Screen {
    /// A screen with no views.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view. The first one added becomes active.
    pub fn add_view<V: Container>(&mut self, name: impl Into<String>, view: V) {
        let name = name.into();
        if self.active.is_none() {
            debug!(view = %name, "active view");
            self.active = Some(name.clone());
        }
        self.views.insert(name, Box::new(view));
    }

    /// Remove a view. Removing the active view leaves no view active.
    pub fn remove_view(&mut self, name: &str) -> Option<Box<dyn Drawable>> {
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        self.views.shift_remove(name)
    }

    /// Whether a view is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// View names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    /// The view registered as `name`, or `NotFound`.
    pub fn get_view(&self, name: &str) -> Result<&dyn Container> {
        self.views
            .get(name)
            .and_then(|view| view.as_container())
            .ok_or_else(|| Error::view_not_found(name))
    }

    /// Mutable form of [`get_view`](Self::get_view).
    pub fn get_view_mut(&mut self, name: &str) -> Result<&mut dyn Container> {
        self.views
            .get_mut(name)
            .and_then(|view| view.as_container_mut())
            .ok_or_else(|| Error::view_not_found(name))
    }

    /// Typed lookup of a view by its concrete type.
    pub fn view<T: Container>(&self, name: &str) -> Result<&T> {
        let view = self
            .views
            .get(name)
            .ok_or_else(|| Error::view_not_found(name))?;
        view.downcast_ref::<T>().ok_or_else(|| Error::TypeMismatch {
            name: name.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// Mutable form of [`view`](Self::view).
    pub fn view_mut<T: Container>(&mut self, name: &str) -> Result<&mut T> {
        let view = self
            .views
            .get_mut(name)
            .ok_or_else(|| Error::view_not_found(name))?;
        view.downcast_mut::<T>().ok_or_else(|| Error::TypeMismatch {
            name: name.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// Switch the active view. Fails with `NotFound` for an unknown name.
    pub fn set_active_view(&mut self, name: &str) -> Result<()> {
        if !self.views.contains_key(name) {
            return Err(Error::view_not_found(name));
        }
        debug!(view = name, "active view");
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Name of the view that receives events and focus.
    pub fn active_view_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_view(&self) -> Option<&dyn Drawable> {
        self.views.get(self.active.as_deref()?).map(|view| &**view)
    }

    pub fn active_view_mut(&mut self) -> Option<&mut (dyn Drawable + 'static)> {
        let name = self.active.as_deref()?;
        match self.views.get_mut(name) {
            Some(view) => Some(view.as_mut()),
            None => None,
        }
    }

    /// Fill `stack` with the focus path of the active view. Returns false,
    /// leaving `stack` untouched, when no view is active.
    pub fn focus_stack(&self, stack: &mut FocusStack) -> bool {
        match self.active_view().and_then(|view| view.as_container()) {
            Some(container) => {
                container.view().active_component_stack(stack);
                true
            }
            None => false,
        }
    }

    /// Render every view at the grid origin, then let the active path place
    /// the cursor.
    pub fn render(&self, surface: &mut dyn Surface) {
        for view in self.views.values() {
            view.render(0, 0, surface);
        }
        if let Some(active) = self.active_view() {
            active.has_focus(0, 0, surface);
        }
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .field("active", &self.active)
            .finish()
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Owner of the screen and last handler of every event.
pub trait Controller {
    fn screen(&self) -> &Screen;

    fn screen_mut(&mut self) -> &mut Screen;

    /// Sees an event only if nothing on the focus path stopped it.
    fn handle_event(&mut self, event: &Event, surface: &mut dyn Surface) -> Result<()>;
}

/// Per-view event handler of a controller.
pub type ViewHandler<C> = fn(&mut C, &Event, &mut dyn Surface) -> Result<()>;

/// Table from view name to the controller method handling that view's
/// events. Built once; handlers are plain function pointers so they can be
/// copied out before calling back into the controller:
///
/// ```ignore
/// fn handle_event(&mut self, event: &Event, surface: &mut dyn Surface) -> Result<()> {
///     match self.handlers.for_view(self.screen.active_view_name()) {
///         Some(handler) => handler(self, event, surface),
///         None => Ok(()),
///     }
/// }
/// ```
pub struct ViewHandlers<C> {
    table: IndexMap<String, ViewHandler<C>>,
}

impl<C> ViewHandlers<C> {
    pub fn new() -> Self {
        Self {
            table: IndexMap::new(),
        }
    }

    pub fn with(mut self, view: impl Into<String>, handler: ViewHandler<C>) -> Self {
        self.insert(view, handler);
        self
    }

    pub fn insert(&mut self, view: impl Into<String>, handler: ViewHandler<C>) {
        self.table.insert(view.into(), handler);
    }

    pub fn get(&self, view: &str) -> Option<ViewHandler<C>> {
        self.table.get(view).copied()
    }

    /// Handler for the given active view name, if any.
    pub fn for_view(&self, view: Option<&str>) -> Option<ViewHandler<C>> {
        self.get(view?)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<C> Default for ViewHandlers<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for ViewHandlers<C> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<C> std::fmt::Debug for ViewHandlers<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.table.keys()).finish()
    }
}
