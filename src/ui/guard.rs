//! RAII terminal lifecycle management.
//!
//! A guard object configures the terminal for the TUI, and its `Drop`
//! implementation restores it on the way out, whether that is a normal
//! exit or a panic unwind.
use std::io::{Result as IoResult, stdout};
use std::panic::{set_hook, take_hook};

use crossterm::ExecutableCommand as _;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use log::error;
use ratatui::Terminal;
use ratatui::backend::{Backend as RatatuiBackend, CrosstermBackend};

/// RAII wrapper for terminal state.
///
/// Holding an instance guarantees the terminal is returned to its
/// original state when it is dropped.
pub struct TerminalGuard;

impl TerminalGuard
{
    /// Enters raw mode and the alternate screen buffer.
    ///
    /// # Errors
    ///
    /// On failure to enter raw mode or switch screens.
    pub fn new() -> IoResult<Self>
    {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        // Terminal will be borked on failure, at least inform the user
        if let Err(err) = disable_raw_mode()
        {
            error!("Failed to disable raw mode: {err}");
        }

        if let Err(err) = stdout().execute(LeaveAlternateScreen)
        {
            error!("Failed to leave alternate screen: {err}");
        }
    }
}

/// Creates the terminal over a crossterm backend.
///
/// Raw mode and screen switching are the guard's job; this only builds
/// the ratatui handle.
///
/// # Errors
///
/// Returns an error if the backend cannot be created.
pub fn init_tui()
-> IoResult<Terminal<impl RatatuiBackend<Error = std::io::Error>>>
{
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Installs a panic hook that restores the terminal before the default
/// hook prints the panic message, so it lands on a usable screen.
pub fn init_panic_hook()
{
    let original_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        // Best effort; the panic message matters more than these.
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);

        error!("Application panicked: {panic_info}");

        original_hook(panic_info);
    }));
}
