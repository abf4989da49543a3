//! Terminal UI for the interactive game.

mod app;
mod input;
mod ui;

pub use app::{Action, App, result_message};
pub use input::{digit_coordinate, move_cursor};
pub use ui::{draw, status_style};

use crate::config::GameConfig;
use crate::orchestrator::GameHandle;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the player quits.
///
/// The terminal is restored even when the game loop fails.
#[instrument(skip(config))]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!(?config, "Starting game TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game_loop(&mut terminal, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Game TUI closed");
    res
}

fn run_game_loop(terminal: &mut Tui, config: &GameConfig) -> Result<()> {
    let first = config.first_player().mark();
    let mut handle = GameHandle::spawn(config);
    let mut app = App::new(first);

    loop {
        while let Some(event) = handle.try_next_event() {
            app.handle_event(event);
        }

        terminal.draw(|frame| draw(frame, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            Some(Action::Submit(request)) => handle.submit(request),
            Some(Action::Restart) => {
                info!("Restarting game");
                handle = GameHandle::spawn(config);
                app = App::new(first);
            }
            Some(Action::Quit) => {
                info!("User quit");
                return Ok(());
            }
            None => {}
        }
    }
}
