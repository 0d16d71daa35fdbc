//! Placement Example - move ships around a board, browse the fleet
//!
//! Arrows move the ship, `r` rotates it, Tab switches between the board and
//! the fleet table (Up/Down select there), `q` quits.
//!
//! Run with: cargo run --example placement

use trellis_tui::input::keys::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_TAB, KEY_UP};
use trellis_tui::{
    Art, Bind, Border, ColumnSpec, Controller, Drawable, Error, Event, Result, Screen, Session, SessionConfig,
    Surface, Table, TableRow, TerminalSurface, View, ViewHandlers, logging,
};

const BOARD_W: i32 = 40;
const BOARD_H: i32 = 14;

const SHIPS: [(&str, &str, &str); 3] = [
    ("Carrier", "[=====[]==[]==]", "/=\\\n|#|\n|#|\n[0]\n\\=/"),
    ("Destroyer", "<==[=()]>", "[=]\n[O]\n[=]"),
    ("Patrol", "<=(|=>", "/ \\\n\\ /"),
];

struct Fleet {
    screen: Screen,
    handlers: ViewHandlers<Fleet>,
    ship: usize,
    vertical: bool,
}

impl Fleet {
    fn new() -> Result<Self> {
        let mut board = View::new(2, 1);
        board.add("frame", Border::new(0, 0, BOARD_W, BOARD_H));
        board.add(
            "title",
            Art::new(BOARD_W / 2, BOARD_H + 2, "TAB: fleet   r: rotate   q: quit").with_bind(Bind::Center),
        );
        board.add("ship", Art::new(2, 2, SHIPS[0].1));

        let mut table = Table::new(0, 0, vec![ColumnSpec::new("Ship", 12)?, ColumnSpec::new("Len", 5)?]);
        table.set_rows(
            SHIPS
                .iter()
                .map(|(name, art, _)| TableRow::from_iter([name.to_string(), art.chars().count().to_string()]))
                .collect(),
        );
        let mut list = View::new(BOARD_W + 6, 1);
        list.add("table", table);
        list.set_active("table");

        let mut screen = Screen::new();
        screen.add_view("board", board);
        screen.add_view("fleet", list);

        Ok(Self {
            screen,
            handlers: ViewHandlers::<Fleet>::new()
                .with("board", Fleet::on_board)
                .with("fleet", Fleet::on_fleet),
            ship: 0,
            vertical: false,
        })
    }

    fn ship_art(&mut self) -> Result<&mut Art> {
        self.screen.view_mut::<View>("board")?.component_mut::<Art>("ship")
    }

    fn on_board(&mut self, event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        let (dx, dy) = match event.code() {
            KEY_LEFT => (-1, 0),
            KEY_RIGHT => (1, 0),
            KEY_UP => (0, -1),
            KEY_DOWN => (0, 1),
            _ if *event == "r" => {
                self.vertical = !self.vertical;
                let (_, horizontal, vertical) = SHIPS[self.ship];
                let lines = if self.vertical { vertical } else { horizontal };
                self.ship_art()?.set_lines(lines);
                return Ok(());
            }
            _ => return Ok(()),
        };

        let ship = self.ship_art()?;
        let x = (ship.x() + dx).clamp(1, BOARD_W - ship.width());
        let y = (ship.y() + dy).clamp(1, BOARD_H - ship.height());
        ship.move_to(Some(x), Some(y));
        Ok(())
    }

    fn on_fleet(&mut self, event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        if *event != "s" {
            return Ok(());
        }
        let selected = self
            .screen
            .view::<View>("fleet")?
            .component::<Table>("table")?
            .selected_index();
        self.ship = selected;
        self.vertical = false;
        self.ship_art()?.set_lines(SHIPS[selected].1);
        self.screen.set_active_view("board")
    }
}

impl Controller for Fleet {
    fn screen(&self) -> &Screen {
        &self.screen
    }

    fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn handle_event(&mut self, event: &Event, surface: &mut dyn Surface) -> Result<()> {
        if *event == "q" {
            return Err(Error::close("bye"));
        }
        if *event == KEY_TAB {
            let next = match self.screen.active_view_name() {
                Some("board") => "fleet",
                _ => "board",
            };
            return self.screen.set_active_view(next);
        }
        match self.handlers.for_view(self.screen.active_view_name()) {
            Some(handler) => handler(self, event, surface),
            None => Ok(()),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = SessionConfig::load("trellis.toml")?;
    logging::init(&config.log)?;

    let mut fleet = Fleet::new()?;
    let mut session = Session::new(TerminalSurface::open(&config)?);
    session.run(&mut fleet).await?;
    Ok(())
}
