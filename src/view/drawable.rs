//! The capability set every screen element shares.
//!
//! A drawable has a parent-relative position, an intrinsic size derived from
//! its content, and an anchoring policy. It renders itself, may react to
//! events, and may claim the terminal cursor while it holds focus.

use std::any::Any;

use crate::error::Result;
use crate::input::Event;
use crate::surface::Surface;

use super::container::Container;

// =============================================================================
// Geometry
// =============================================================================

/// How a drawable's position maps into its parent's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bind {
    /// Position is the top-left corner.
    #[default]
    TopLeft,
    /// Position is the center; half the size is subtracted on render.
    Center,
}

/// Position, size and anchoring of one drawable.
///
/// Size is owned by the drawable: content-mutating methods update it through
/// [`Placement::set_size`], and nothing else should.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub bind: Bind,
    width: i32,
    height: i32,
}

impl Placement {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn with_bind(mut self, bind: Bind) -> Self {
        self.bind = bind;
        self
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Move on either axis, leaving the other untouched.
    pub fn move_to(&mut self, x: Option<i32>, y: Option<i32>) {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
    }

    /// True when the half-open rectangles `[x, right) x [y, bottom)` intersect.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Absolute top-left corner when drawn inside a parent at `origin`.
    pub fn anchored(&self, origin_x: i32, origin_y: i32) -> (i32, i32) {
        match self.bind {
            Bind::TopLeft => (origin_x + self.x, origin_y + self.y),
            Bind::Center => (
                origin_x + self.x - self.width / 2,
                origin_y + self.y - self.height / 2,
            ),
        }
    }
}

// =============================================================================
// Drawable
// =============================================================================

/// Downcasting support for trait objects.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl std::fmt::Debug for dyn Drawable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drawable")
            .field("placement", self.placement())
            .finish_non_exhaustive()
    }
}

pub trait Drawable: AsAny {
    fn placement(&self) -> &Placement;

    fn placement_mut(&mut self) -> &mut Placement;

    /// Paint at an absolute, already anchored position.
    fn draw(&self, x: i32, y: i32, surface: &mut dyn Surface);

    /// Paint inside a parent whose absolute origin is `(origin_x, origin_y)`.
    fn render(&self, origin_x: i32, origin_y: i32, surface: &mut dyn Surface) {
        let (x, y) = self.placement().anchored(origin_x, origin_y);
        self.draw(x, y, surface);
    }

    /// React to an event. Call [`Event::stop_propagation`] to keep it from
    /// later handlers; return `Err(Error::Close(_))` to end the session.
    fn handle_event(&mut self, _event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        Ok(())
    }

    /// Called on the focused path after each render. Leaves that edit or
    /// select place the surface cursor here.
    fn has_focus(&self, _x: i32, _y: i32, _surface: &mut dyn Surface) {}

    fn as_container(&self) -> Option<&dyn Container> {
        None
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        None
    }

    fn x(&self) -> i32 {
        self.placement().x
    }

    fn y(&self) -> i32 {
        self.placement().y
    }

    fn width(&self) -> i32 {
        self.placement().width()
    }

    fn height(&self) -> i32 {
        self.placement().height()
    }

    fn right(&self) -> i32 {
        self.placement().right()
    }

    fn bottom(&self) -> i32 {
        self.placement().bottom()
    }

    fn move_to(&mut self, x: Option<i32>, y: Option<i32>) {
        self.placement_mut().move_to(x, y);
    }

    fn overlaps(&self, other: &dyn Drawable) -> bool {
        self.placement().overlaps(other.placement())
    }
}

impl dyn Drawable {
    pub fn downcast_ref<T: Drawable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Drawable>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    pub fn is_container(&self) -> bool {
        self.as_container().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    struct Dot {
        placement: Placement,
    }

    impl Dot {
        fn new(x: i32, y: i32, bind: Bind) -> Self {
            let mut placement = Placement::new(x, y).with_bind(bind);
            placement.set_size(5, 3);
            Self { placement }
        }
    }

    impl Drawable for Dot {
        fn placement(&self) -> &Placement {
            &self.placement
        }

        fn placement_mut(&mut self) -> &mut Placement {
            &mut self.placement
        }

        fn draw(&self, x: i32, y: i32, surface: &mut dyn Surface) {
            surface.draw_char(x, y, '*', None);
        }
    }

    #[test]
    fn test_top_left_anchoring() {
        let placement = Placement::new(2, 3);
        assert_eq!(placement.anchored(10, 20), (12, 23));
    }

    #[test]
    fn test_center_anchoring_truncates() {
        let mut placement = Placement::new(10, 10).with_bind(Bind::Center);
        placement.set_size(5, 3);
        assert_eq!(placement.anchored(0, 0), (8, 9));
        assert_eq!(placement.anchored(1, 1), (9, 10));
    }

    #[test]
    fn test_render_draws_at_anchored_position() {
        let mut surface = MemorySurface::new(20, 20);
        Dot::new(10, 10, Bind::Center).render(0, 0, &mut surface);
        assert_eq!(surface.cell(8, 9).and_then(|c| c.symbol()), Some('*'));
    }

    #[test]
    fn test_overlaps_half_open() {
        let mut a = Placement::new(0, 0);
        a.set_size(4, 4);
        let mut b = Placement::new(4, 0);
        b.set_size(2, 2);
        assert!(!a.overlaps(&b));
        b.move_to(Some(3), None);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_move_to_partial() {
        let mut dot = Dot::new(1, 2, Bind::TopLeft);
        dot.move_to(None, Some(7));
        assert_eq!((dot.x(), dot.y()), (1, 7));
        assert_eq!((dot.right(), dot.bottom()), (6, 10));
    }

    #[test]
    fn test_downcast() {
        let boxed: Box<dyn Drawable> = Box::new(Dot::new(0, 0, Bind::TopLeft));
        assert!(boxed.downcast_ref::<Dot>().is_some());
        assert!(!boxed.is_container());
    }
}
