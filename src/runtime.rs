// Terminal display driver: owns the render loop, delivers frame requests,
// and feeds key presses to the update function

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifeclock_core::ports::Clock;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{Config, StartupInput};
use crate::tui::{TuiMessage, TuiModel, TuiUpdate, TuiView};

/// How long to wait for input while no frame is requested
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Set up the terminal, run the TUI until the user quits, restore the terminal
pub fn run(config: &Config, startup: &StartupInput, clock: &dyn Clock) -> Result<()> {
    let mut model = TuiModel::from_config(config, startup, clock.now());
    if startup.submit {
        TuiUpdate::submit(&mut model, clock.now());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_main_loop(&mut model, &mut terminal, clock, config.display.frame_interval());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// One iteration per display refresh: deliver due frames, draw, then wait for
/// input for at most one frame interval
pub fn run_main_loop<B: Backend>(
    model: &mut TuiModel,
    terminal: &mut Terminal<B>,
    clock: &dyn Clock,
    frame_interval: Duration,
) -> Result<()> {
    info!("Render loop started ({:?} per frame)", frame_interval);

    loop {
        TuiUpdate::on_frame(model, clock.now());
        terminal.draw(|frame| TuiView::render(model, frame))?;

        let timeout = if model.frames.is_idle() {
            IDLE_POLL
        } else {
            frame_interval
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let message =
                        TuiUpdate::handle_key(model, key.code, key.modifiers, clock.now())?;
                    if message != TuiMessage::None {
                        debug!("Key {:?} -> {:?}", key.code, message);
                    }
                    if message == TuiMessage::Quit {
                        model.should_quit = true;
                    }
                }
            }
        }

        if model.should_quit {
            info!("Quit requested, exiting render loop");
            break;
        }
    }

    // Leaving the loop tears the result view down too
    if model.engine.is_running() {
        TuiUpdate::back(model);
    }
    Ok(())
}
