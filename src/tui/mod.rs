//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into `core::action::Action` values and
//! executes the returned effects through `EffectRunner`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a request in flight): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 250ms and only redraws after an input event or a
//!   background result.

mod component;
mod components;
mod effects;
mod event;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;
use ratatui::widgets::TableState;
use tokio::sync::mpsc;

use crate::core::action::{Action, init, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::inventory::{HttpInventoryClient, InventoryClient};
use crate::tui::effects::EffectRunner;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATING_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of the session state)
pub struct TuiState {
    /// Scroll offset of the inventory table, kept between frames.
    pub table_state: TableState,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            spinner_frame: 0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Non-blinking: set_cursor_position resets the blink timer on every draw.
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn InventoryClient> = Arc::new(HttpInventoryClient::new(
        config.api_base_url.clone(),
        config.api_token.clone(),
    ));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let result = event_loop(&mut terminal, &mut app, &mut tui, client);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    client: Arc<dyn InventoryClient>,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut runner = EffectRunner::new(client, tx);

    let size = terminal.size()?;
    update(
        app,
        Action::Resize {
            width: size.width,
            height: size.height,
        },
    );
    runner.run_all(init(app));

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    while !app.should_quit {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };

        // Process the first event and drain everything pending before the next draw
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            let action = match event {
                TuiEvent::Key(key) => Action::Key(key),
                TuiEvent::Resize { width, height } => Action::Resize { width, height },
            };
            dispatch(app, &mut runner, action);
            if app.should_quit {
                break;
            }
            next = poll_event_immediate()?;
        }

        // Results from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            dispatch(app, &mut runner, action);
        }
    }

    info!("Quit requested, shutting down");
    Ok(())
}

fn dispatch(app: &mut App, runner: &mut EffectRunner, action: Action) {
    debug!("Action: {:?}", action);
    let effects = update(app, action);
    runner.run_all(effects);
}
