//! Terminal setup, input and output through crossterm.
//!
//! Enters raw mode (and optionally the alternate screen) on construction,
//! leaves them on [`Surface::restore`] or on drop, whichever comes first.

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent};
use crossterm::{cursor, execute, terminal};
use tracing::{debug, trace, warn};

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::input::{Translated, translate_key};
use crate::renderer::{DiffRenderer, ansi};

use super::{Canvas, Surface};

/// A terminal mode the surface switched on and must switch off again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Raw,
    AlternateScreen,
}

/// Modes entered so far, in order.
#[derive(Debug, Default)]
struct Modes {
    entered: Vec<Mode>,
}

impl Modes {
    fn enter(&mut self, mode: Mode) {
        self.entered.push(mode);
    }

    fn contains(&self, mode: Mode) -> bool {
        self.entered.contains(&mode)
    }

    fn is_empty(&self) -> bool {
        self.entered.is_empty()
    }

    /// Leave every mode, newest first. Each one is attempted even when an
    /// earlier one fails; the first error is returned.
    fn release(&mut self, mut leave: impl FnMut(Mode) -> io::Result<()>) -> io::Result<()> {
        let mut outcome = Ok(());
        while let Some(mode) = self.entered.pop() {
            let result = leave(mode);
            if outcome.is_ok() {
                outcome = result;
            }
        }
        outcome
    }
}

pub struct TerminalSurface {
    canvas: Canvas,
    renderer: DiffRenderer,
    stdout: Stdout,
    pending: VecDeque<i32>,
    poll_timeout: Duration,
    escape_delay: Duration,
    modes: Modes,
}

impl TerminalSurface {
    /// Take over the terminal.
    ///
    /// The surface owns raw mode from the moment it is enabled, so a failure
    /// later in setup is undone by `Drop`.
    pub fn open(config: &SessionConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut modes = Modes::default();
        modes.enter(Mode::Raw);
        let mut surface = Self {
            canvas: Canvas::new(width, height, config.default_fg, config.default_bg),
            renderer: DiffRenderer::new(),
            stdout: io::stdout(),
            pending: VecDeque::new(),
            poll_timeout: Duration::from_millis(config.poll_timeout_ms),
            escape_delay: Duration::from_millis(config.escape_delay_ms),
            modes,
        };

        if config.alternate_screen {
            execute!(surface.stdout, terminal::EnterAlternateScreen)?;
            surface.modes.enter(Mode::AlternateScreen);
        }
        execute!(surface.stdout, terminal::Clear(terminal::ClearType::All))?;
        debug!(
            width,
            height,
            alternate_screen = surface.modes.contains(Mode::AlternateScreen),
            "terminal opened"
        );
        Ok(surface)
    }

    /// Read at most one terminal event, waiting up to `timeout`.
    fn read_one(&mut self, timeout: Duration) -> Result<Option<i32>> {
        if let Some(code) = self.pending.pop_front() {
            return Ok(Some(code));
        }
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            TermEvent::Key(key) => match translate_key(&key) {
                Translated::Codes(codes) => {
                    trace!(?codes, "key");
                    self.pending.extend(codes);
                    Ok(self.pending.pop_front())
                }
                Translated::Interrupt => Err(Error::Interrupted),
                Translated::Ignored => Ok(None),
            },
            TermEvent::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.canvas.resize(width, height);
                self.renderer.invalidate();
                ansi::clear_screen(&mut self.stdout)?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

impl Surface for TerminalSurface {
    fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn poll_raw(&mut self) -> Result<Option<i32>> {
        self.read_one(self.poll_timeout)
    }

    fn poll_raw_after_escape(&mut self) -> Result<Option<i32>> {
        self.read_one(self.escape_delay)
    }

    fn flush(&mut self) -> Result<()> {
        let cursor = self.canvas.applied_cursor();
        self.renderer
            .render(self.canvas.frame(), cursor, &mut self.stdout)?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if self.modes.is_empty() {
            return Ok(());
        }

        let shown = execute!(self.stdout, cursor::Show);
        let stdout = &mut self.stdout;
        let left = self.modes.release(|mode| match mode {
            Mode::AlternateScreen => execute!(stdout, terminal::LeaveAlternateScreen),
            Mode::Raw => terminal::disable_raw_mode(),
        });
        debug!("terminal restored");
        shown.and(left)?;
        Ok(())
    }

    fn report(&mut self, reason: &str) {
        if writeln!(self.stdout, "{reason}").and_then(|_| self.stdout.flush()).is_err() {
            warn!(reason, "could not report close reason");
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if !self.modes.is_empty() {
            let _ = self.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_modes_release_newest_first() {
        let mut modes = Modes::default();
        modes.enter(Mode::Raw);
        modes.enter(Mode::AlternateScreen);

        let mut left = Vec::new();
        modes
            .release(|mode| {
                left.push(mode);
                Ok(())
            })
            .unwrap();
        assert_eq!(left, [Mode::AlternateScreen, Mode::Raw]);
        assert!(modes.is_empty());
    }

    #[test]
    fn test_failed_step_does_not_skip_raw_mode() {
        let mut modes = Modes::default();
        modes.enter(Mode::Raw);
        modes.enter(Mode::AlternateScreen);

        let mut left = Vec::new();
        let err = modes
            .release(|mode| {
                left.push(mode);
                match mode {
                    Mode::AlternateScreen => Err(io::Error::other("no tty")),
                    Mode::Raw => Ok(()),
                }
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "no tty");
        assert_eq!(left, [Mode::AlternateScreen, Mode::Raw]);
    }

    #[test]
    fn test_partial_setup_releases_only_what_was_entered() {
        let mut modes = Modes::default();
        modes.enter(Mode::Raw);
        assert!(!modes.contains(Mode::AlternateScreen));

        let mut left = Vec::new();
        modes
            .release(|mode| {
                left.push(mode);
                Ok(())
            })
            .unwrap();
        assert_eq!(left, [Mode::Raw]);

        let mut again = 0;
        modes
            .release(|_| {
                again += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(again, 0);
    }
}
