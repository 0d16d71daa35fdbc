//! Color-pair registry owned by a surface.
//!
//! Handles are slots in this palette. Slot 0 is always the default pair;
//! asking for an already registered pair returns its existing handle.

use indexmap::IndexSet;
use tracing::debug;

use crate::types::{ColorPair, ColorRef, Rgba};

#[derive(Debug, Clone)]
pub struct Palette {
    pairs: IndexSet<ColorPair>,
}

impl Palette {
    /// A palette whose default slot is `fg` on `bg`.
    pub fn new(fg: Rgba, bg: Rgba) -> Self {
        let mut pairs = IndexSet::new();
        pairs.insert(ColorPair::new(fg, bg));
        Self { pairs }
    }

    /// Register `fg` on `bg`, returning its handle.
    pub fn allocate(&mut self, fg: Rgba, bg: Rgba) -> ColorRef {
        let (slot, inserted) = self.pairs.insert_full(ColorPair::new(fg, bg));
        if inserted {
            debug!(slot, ?fg, ?bg, "allocated color pair");
        }
        ColorRef(slot as u16)
    }

    /// The default handle.
    pub fn default_ref(&self) -> ColorRef {
        ColorRef(0)
    }

    /// Resolve a handle. Unknown handles resolve to the default pair.
    pub fn resolve(&self, color: ColorRef) -> ColorPair {
        self.pairs
            .get_index(color.0 as usize)
            .or_else(|| self.pairs.get_index(0))
            .copied()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Rgba::TERMINAL_DEFAULT, Rgba::TERMINAL_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot() {
        let palette = Palette::new(Rgba::WHITE, Rgba::BLACK);
        assert_eq!(palette.default_ref().id(), 0);
        assert_eq!(
            palette.resolve(palette.default_ref()),
            ColorPair::new(Rgba::WHITE, Rgba::BLACK)
        );
    }

    #[test]
    fn test_identical_pairs_share_a_handle() {
        let mut palette = Palette::default();
        let a = palette.allocate(Rgba::WHITE, Rgba::LIGHT_GRAY);
        let b = palette.allocate(Rgba::WHITE, Rgba::LIGHT_GRAY);
        let c = palette.allocate(Rgba::RED, Rgba::LIGHT_GRAY);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_unknown_handle_resolves_to_default() {
        let palette = Palette::new(Rgba::GREEN, Rgba::BLACK);
        assert_eq!(
            palette.resolve(ColorRef(99)),
            ColorPair::new(Rgba::GREEN, Rgba::BLACK)
        );
    }
}
