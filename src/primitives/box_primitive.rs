//! Rectangle outlines.

use crate::surface::Surface;
use crate::view::{Drawable, Placement};

/// An outline from `(x, y)` to `(x + width, y + height)`, corners inclusive.
#[derive(Debug, Clone, Copy)]
pub struct Border {
    placement: Placement,
}

impl Border {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        let mut placement = Placement::new(x, y);
        placement.set_size(width, height);
        Self { placement }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.placement.set_size(width, height);
    }
}

impl Drawable for Border {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        surface.draw_rect_outline(
            x,
            y,
            x + self.placement.width(),
            y + self.placement.height(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_outline_inside_parent_origin() {
        let mut surface = MemorySurface::new(6, 4);
        Border::new(1, 0, 3, 2).render(1, 1, &mut surface);

        assert_eq!(surface.row_text(0), "      ");
        assert_eq!(surface.row_text(1), "  ┌──┐");
        assert_eq!(surface.row_text(2), "  │  │");
        assert_eq!(surface.row_text(3), "  └──┘");
    }
}
