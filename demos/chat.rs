//! Chat Example - a message log above a bordered input line
//!
//! Type and press Enter to post. Ctrl+Q or Escape quits, Ctrl+C interrupts.
//!
//! Reads `trellis.toml` from the working directory if present.
//!
//! Run with: cargo run --example chat

use trellis_tui::input::keys::{KEY_ENTER, KEY_ESC, ctrl, key_name};
use trellis_tui::{
    Art, Border, Controller, Error, Event, Result, Screen, Session, SessionConfig, Surface,
    TerminalSurface, TextField, View, logging,
};

const INPUT_WIDTH: usize = 40;
const LOG_LINES: usize = 8;

struct Chat {
    screen: Screen,
    history: Vec<String>,
}

impl Chat {
    fn new() -> Self {
        let mut main = View::new(1, 1);
        main.add("log", Art::new(0, 0, ""));
        main.add("border", Border::new(0, LOG_LINES as i32, INPUT_WIDTH as i32 + 2, 2));
        main.add(
            "input",
            TextField::new(1, LOG_LINES as i32 + 1)
                .with_width(INPUT_WIDTH)
                .with_max_length(140),
        );
        main.set_active("input");
        main.size_to_contents();

        let mut screen = Screen::new();
        screen.add_view("chat", main);
        Self {
            screen,
            history: Vec::new(),
        }
    }

    fn post(&mut self) -> Result<()> {
        let view = self.screen.view_mut::<View>("chat")?;
        let text = view.component_mut::<TextField>("input")?.take_text();
        if text.trim().is_empty() {
            return Ok(());
        }

        self.history.push(format!("> {text}"));
        let start = self.history.len().saturating_sub(LOG_LINES);
        let shown = self.history[start..].join("\n");
        view.component_mut::<Art>("log")?.set_lines(&shown);
        Ok(())
    }
}

impl Controller for Chat {
    fn screen(&self) -> &Screen {
        &self.screen
    }

    fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn handle_event(&mut self, event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        if event.is_any(&[ctrl('q'), KEY_ESC]) {
            return Err(Error::close(format!("closed with {}", key_name(event.code()))));
        }
        if *event == KEY_ENTER {
            self.post()?;
        }
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = SessionConfig::load("trellis.toml")?;
    logging::init(&config.log)?;

    let surface = TerminalSurface::open(&config)?;
    let mut session = Session::new(surface);
    let mut chat = Chat::new();
    session.run(&mut chat).await?;

    tracing::info!(messages = chat.history.len(), "chat closed");
    Ok(())
}
