//! Containers: named, ordered children with one active slot.

use indexmap::IndexMap;

use crate::engine::{FocusEntry, FocusStack};
use crate::error::{Error, Result};
use crate::surface::Surface;

use super::drawable::{Drawable, Placement};

/// A drawable that holds other drawables.
///
/// Implementors that want their own `handle_event` wrap a [`View`] and
/// forward `draw`/`has_focus` to it; [`Drawable::as_container`] must return
/// `Some(self)` so the focus path can descend into them.
impl std::fmt::Debug for dyn Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.view(), f)
    }
}

pub trait Container: Drawable {
    fn view(&self) -> &View;

    fn view_mut(&mut self) -> &mut View;
}

/// Name-keyed children in insertion order. A `None` slot is reserved but
/// empty.
#[derive(Default)]
pub struct View {
    placement: Placement,
    components: IndexMap<String, Option<Box<dyn Drawable>>>,
    active: Option<String>,
}

impl View {
    /// An empty view at `(x, y)` with zero size and no active child.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            placement: Placement::new(x, y),
            ..Self::default()
        }
    }

    /// Fix the size instead of deriving it from children.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.placement.set_size(width, height);
        self
    }

    /// Replace position, size and anchoring at once.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Insert or replace the slot `name`. A replaced slot keeps its position.
    pub fn add_component(&mut self, name: impl Into<String>, component: Option<Box<dyn Drawable>>) {
        self.components.insert(name.into(), component);
    }

    pub fn add<D: Drawable>(&mut self, name: impl Into<String>, component: D) {
        self.add_component(name, Some(Box::new(component)));
    }

    /// Register `name` with an empty slot.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.add_component(name, None);
    }

    /// Remove `name` if registered, returning whatever the slot held.
    pub fn remove_component(&mut self, name: &str) -> Option<Box<dyn Drawable>> {
        self.components.shift_remove(name).flatten()
    }

    /// Whether `name` is registered, filled or not.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Number of slots, empty ones included.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// `Ok(None)` for an empty slot, `Err(NotFound)` for an unknown name.
    pub fn get_component(&self, name: &str) -> Result<Option<&dyn Drawable>> {
        match self.components.get(name) {
            Some(slot) => Ok(slot.as_deref()),
            None => Err(Error::component_not_found(name)),
        }
    }

    /// Mutable form of [`get_component`](Self::get_component).
    pub fn get_component_mut(&mut self, name: &str) -> Result<Option<&mut (dyn Drawable + 'static)>> {
        match self.components.get_mut(name) {
            Some(Some(component)) => Ok(Some(component.as_mut())),
            Some(None) => Ok(None),
            None => Err(Error::component_not_found(name)),
        }
    }

    /// Typed lookup. An empty slot or a different concrete type is a
    /// `TypeMismatch`.
    pub fn component<T: Drawable>(&self, name: &str) -> Result<&T> {
        self.get_component(name)?
            .and_then(|c| c.downcast_ref::<T>())
            .ok_or_else(|| type_mismatch::<T>(name))
    }

    /// Mutable form of [`component`](Self::component).
    pub fn component_mut<T: Drawable>(&mut self, name: &str) -> Result<&mut T> {
        self.get_component_mut(name)?
            .and_then(|c| c.downcast_mut::<T>())
            .ok_or_else(|| type_mismatch::<T>(name))
    }

    /// The child in slot `name`, if registered and filled.
    pub fn child(&self, name: &str) -> Option<&dyn Drawable> {
        self.components.get(name)?.as_deref()
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut (dyn Drawable + 'static)> {
        match self.components.get_mut(name) {
            Some(Some(component)) => Some(component.as_mut()),
            _ => None,
        }
    }

    /// All slots in insertion order.
    pub fn components(&self) -> impl Iterator<Item = (&str, Option<&dyn Drawable>)> {
        self.components
            .iter()
            .map(|(name, slot)| (name.as_str(), slot.as_deref()))
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Mark `name` active. The name need not be registered yet; a dangling
    /// active name simply ends the focus path here.
    pub fn set_active(&mut self, name: impl Into<String>) {
        self.active = Some(name.into());
    }

    /// Drop the active name. The focus path then ends at this view.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// The active name, even when it is dangling.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active child, if the name resolves to a filled slot.
    pub fn active_component(&self) -> Option<&dyn Drawable> {
        self.child(self.active.as_deref()?)
    }

    pub fn active_component_mut(&mut self) -> Option<&mut (dyn Drawable + 'static)> {
        let name = self.active.as_deref()?;
        match self.components.get_mut(name) {
            Some(Some(component)) => Some(component.as_mut()),
            _ => None,
        }
    }

    /// Append this container and everything active below it, root first.
    /// Paths are relative to this container.
    pub fn active_component_stack(&self, stack: &mut FocusStack) {
        let mut path = Vec::new();
        self.collect_focus(&mut path, stack);
    }

    fn collect_focus(&self, path: &mut Vec<String>, stack: &mut FocusStack) {
        stack.push(FocusEntry::present(path.clone()));
        let Some(name) = self.active.as_deref() else {
            return;
        };

        path.push(name.to_string());
        match self.child(name) {
            Some(child) => match child.as_container() {
                Some(container) => container.view().collect_focus(path, stack),
                None => stack.push(FocusEntry::present(path.clone())),
            },
            None => stack.push(FocusEntry::absent(path.clone())),
        }
        path.pop();
    }

    // -------------------------------------------------------------------------
    // Geometry and painting
    // -------------------------------------------------------------------------

    /// Grow or shrink to the furthest right/bottom edge of the filled slots.
    pub fn size_to_contents(&mut self) {
        let (width, height) = self
            .components
            .values()
            .flatten()
            .fold((0i32, 0i32), |(w, h), c| (w.max(c.right()), h.max(c.bottom())));
        self.placement.set_size(width, height);
    }

    /// Render every filled slot, in order, inside the absolute origin.
    pub fn draw_children(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        for component in self.components.values().flatten() {
            component.render(x, y, surface);
        }
    }

    /// Forward focus to the active child, with this container's anchored
    /// corner as the child's origin.
    pub fn focus_active(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        if let Some(active) = self.active_component() {
            let (left, top) = self.placement.anchored(x, y);
            active.has_focus(left, top, surface);
        }
    }
}

fn type_mismatch<T>(name: &str) -> Error {
    Error::TypeMismatch {
        name: name.to_string(),
        expected: std::any::type_name::<T>(),
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("placement", &self.placement)
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .field("active", &self.active)
            .finish()
    }
}

impl Drawable for View {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        self.draw_children(x, y, surface);
    }

    fn has_focus(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        self.focus_active(x, y, surface);
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for View {
    fn view(&self) -> &View {
        self
    }

    fn view_mut(&mut self) -> &mut View {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Art, Border, TextField};
    use crate::surface::MemorySurface;
    use crate::view::Bind;

    #[test]
    fn test_size_to_contents() {
        let mut view = View::new(0, 0);
        view.add("a", Border::new(1, 1, 5, 2));
        view.add("b", Border::new(3, 3, 2, 2));
        view.reserve("empty");
        assert_eq!((view.width(), view.height()), (0, 0));

        view.size_to_contents();
        assert_eq!((view.width(), view.height()), (6, 5));
    }

    #[test]
    fn test_size_to_contents_without_children() {
        let mut view = View::new(0, 0).with_size(10, 10);
        view.size_to_contents();
        assert_eq!((view.width(), view.height()), (0, 0));
    }

    #[test]
    fn test_lookup_errors() {
        let mut view = View::new(0, 0);
        view.reserve("slot");
        view.add("art", Art::new(0, 0, "x"));

        assert!(view.get_component("slot").unwrap().is_none());
        assert!(view.get_component("nope").unwrap_err().is_not_found());
        assert!(view.component::<Art>("art").is_ok());
        assert!(matches!(
            view.component::<Border>("art"),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            view.component::<Art>("slot"),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_replace_keeps_order() {
        let mut view = View::new(0, 0);
        view.reserve("first");
        view.reserve("second");
        view.add("first", Art::new(0, 0, "1"));

        let names: Vec<&str> = view.components().map(|(name, _)| name).collect();
        assert_eq!(names, ["first", "second"]);
        assert!(view.child("first").is_some());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut view = View::new(0, 0);
        assert!(view.remove_component("ghost").is_none());
        view.add("a", Art::new(0, 0, "a"));
        assert!(view.remove_component("a").is_some());
        assert!(view.is_empty());
    }

    #[test]
    fn test_focus_stack_shapes() {
        let mut view = View::new(0, 0);
        let mut stack = FocusStack::new();
        view.active_component_stack(&mut stack);
        assert_eq!(stack.len(), 1);

        view.set_active("missing");
        stack.clear();
        view.active_component_stack(&mut stack);
        assert_eq!(stack.len(), 2);
        assert!(!stack.leaf().unwrap().is_present());

        view.add("missing", TextField::new(0, 0));
        stack.clear();
        view.active_component_stack(&mut stack);
        assert!(stack.leaf().unwrap().is_present());
        assert_eq!(stack.leaf().unwrap().name(), Some("missing"));
    }

    #[test]
    fn test_children_render_inside_anchored_origin() {
        let mut surface = MemorySurface::new(20, 6);
        let mut view = View::new(2, 1);
        view.add("art", Art::new(1, 1, "ab"));
        view.add("mid", Art::new(10, 4, "xyz").with_bind(Bind::Center));

        view.render(0, 0, &mut surface);
        assert_eq!(surface.row_text(2), format!("{:<20}", "   ab"));
        assert_eq!(surface.row_text(5), format!("{:<20}", "           xyz"));
    }

    #[test]
    fn test_focus_offsets_by_position() {
        let mut surface = MemorySurface::new(20, 5);
        let mut view = View::new(3, 2);
        view.add("input", TextField::new(4, 1).with_text("ab"));
        view.set_active("input");

        view.has_focus(0, 0, &mut surface);
        assert_eq!(surface.canvas().cursor(), Some((9, 3)));
    }

    #[test]
    fn test_centered_view_focus_matches_drawn_position() {
        let mut surface = MemorySurface::new(20, 4);
        let mut view = View::new(0, 0).with_placement(Placement::new(10, 2).with_bind(Bind::Center));
        view.add("input", TextField::new(0, 0).with_width(4).with_text("ab"));
        view.set_active("input");
        view.size_to_contents();

        view.render(0, 0, &mut surface);
        view.has_focus(0, 0, &mut surface);
        assert_eq!(surface.row_text(2), format!("{:<20}", "        ab"));
        assert_eq!(surface.canvas().cursor(), Some((10, 2)));
    }
}
