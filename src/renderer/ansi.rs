//! Escape sequences written by the diff renderer and the terminal surface.
//!
//! Every function appends to any [`Write`] sink, usually an
//! [`OutputBuffer`](super::OutputBuffer).

use std::io::{Result, Write};

use crate::types::Rgba;

const CSI: &str = "\x1b[";

/// Which half of a cell a color applies to. Selects the SGR code family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plane {
    Fore,
    Back,
}

impl Plane {
    /// `(default, base, bright base, extended)` SGR codes.
    const fn codes(self) -> (u8, u8, u8, u8) {
        match self {
            Plane::Fore => (39, 30, 90, 38),
            Plane::Back => (49, 40, 100, 48),
        }
    }
}

fn color<W: Write>(w: &mut W, plane: Plane, color: Rgba) -> Result<()> {
    let (default, base, bright, extended) = plane.codes();
    if color.is_terminal_default() {
        return write!(w, "{CSI}{default}m");
    }
    if !color.is_ansi() {
        return write!(w, "{CSI}{extended};2;{};{};{}m", color.r, color.g, color.b);
    }
    match color.ansi_index() {
        low @ 0..=7 => write!(w, "{CSI}{}m", base + low),
        high @ 8..=15 => write!(w, "{CSI}{}m", bright + high - 8),
        index => write!(w, "{CSI}{extended};5;{index}m"),
    }
}

/// Absolute move. Coordinates are zero-based; the terminal counts from one.
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> Result<()> {
    write!(w, "{CSI}{};{}H", u32::from(y) + 1, u32::from(x) + 1)
}

#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> Result<()> {
    w.write_all(b"\x1b[?25l")
}

#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> Result<()> {
    w.write_all(b"\x1b[?25h")
}

/// Erase the display and the scrollback, then home the cursor.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> Result<()> {
    w.write_all(b"\x1b[2J\x1b[3J\x1b[H")
}

/// Start a synchronized update (mode 2026). Terminals without support
/// ignore it.
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> Result<()> {
    w.write_all(b"\x1b[?2026h")
}

#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> Result<()> {
    w.write_all(b"\x1b[?2026l")
}

/// SGR 0: drop colors and attributes.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> Result<()> {
    w.write_all(b"\x1b[0m")
}

pub fn fg<W: Write>(w: &mut W, fg: Rgba) -> Result<()> {
    color(w, Plane::Fore, fg)
}

pub fn bg<W: Write>(w: &mut W, bg: Rgba) -> Result<()> {
    color(w, Plane::Back, bg)
}
