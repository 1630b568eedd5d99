use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::RuntimeError;

/// Concrete terminal type handed to the frame loop.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs `body` with the terminal in raw mode on the alternate screen.
///
/// The terminal is restored on every exit path: after `body` returns, when
/// setup fails halfway, and (via the caller's panic hook calling
/// [`restore_terminal`]) on unwind. A restore failure is only surfaced when
/// `body` itself succeeded, so the more interesting error wins.
pub fn with_terminal<T, F>(body: F) -> Result<T, RuntimeError>
where
    F: FnOnce(&mut AppTerminal) -> Result<T, RuntimeError>,
{
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(error.into());
    }

    let outcome = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(RuntimeError::from)
        .and_then(|mut terminal| body(&mut terminal));

    let restored = restore_terminal();
    let value = outcome?;
    restored?;
    Ok(value)
}

/// Leaves raw mode and the alternate screen.
///
/// Exposed for the panic hook, where a still-raw terminal would otherwise
/// swallow the panic message.
pub fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
