//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::controller::Controller;
use crate::event::{map_key, poll_event, Action};
use crate::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI until the user quits
pub async fn run(controller: &mut Controller, title: &str) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_loop(&mut terminal, controller, title).await;

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut Controller,
    title: &str,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, controller.view(), title))?;

        // 250ms keeps the clock ticking without busy-looping
        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(250))? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let action = map_key(controller.view(), key);
            if action != Action::None {
                controller.dispatch(action).await;
            }
        }

        if controller.view().should_quit {
            break;
        }
    }

    Ok(())
}
