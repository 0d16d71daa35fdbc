//! Colors and cells shared by surfaces and the renderer.

/// A truecolor value, or a marker in `r`: `-1` for the terminal's own
/// default, `-2` for a 256-color palette index held in `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
        }
    }

    /// Whatever the terminal uses when no color is set.
    pub const TERMINAL_DEFAULT: Self = Self { r: -1, g: -1, b: -1 };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Palette 237. Selected table rows use it.
    pub const LIGHT_GRAY: Self = Self::ansi(237);

    /// A 256-color palette entry. `0..16` are the named colors.
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
        }
    }

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Meaningless unless [`is_ansi`](Self::is_ansi).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Parse `"default"`, `"#rrggbb"` / `"rrggbb"`, or a palette index
    /// `"0"`..`"255"`.
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.eq_ignore_ascii_case("default") {
            return Some(Self::TERMINAL_DEFAULT);
        }
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.is_ascii() {
            return text.parse().ok().map(Self::ansi);
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// A foreground/background pair. The only styling a drawable region gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub fg: Rgba,
    pub bg: Rgba,
}

impl ColorPair {
    pub const fn new(fg: Rgba, bg: Rgba) -> Self {
        Self { fg, bg }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(Rgba::TERMINAL_DEFAULT, Rgba::TERMINAL_DEFAULT)
    }
}

/// Opaque handle to a color pair allocated by a surface's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorRef(pub(crate) u16);

impl ColorRef {
    /// Raw palette slot, useful for logging.
    pub fn id(&self) -> u16 {
        self.0
    }
}

/// One character position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Scalar value, or 0 for the second column of a wide glyph.
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
}

impl Cell {
    /// The cell's character, if it holds one.
    pub fn symbol(&self) -> Option<char> {
        char::from_u32(self.char).filter(|_| self.char != 0)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
        }
    }
}
