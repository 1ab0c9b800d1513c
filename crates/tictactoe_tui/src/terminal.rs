//! Raw mode and alternate screen handling.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{error, info};

/// Puts the terminal back the way the shell left it when dropped.
///
/// The guard exists before raw mode is switched on, so a failure halfway
/// through [`TerminalGuard::enter`] still restores the terminal.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        let guard = Self { _private: () };
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");
        restore(&mut io::stdout());
    }
}

/// Restores the terminal before the panic message is printed.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore(&mut io::stdout());
        hook(panic);
    }));
}

/// Leaves raw mode, then the alternate screen. A failed step does not
/// skip the next one.
pub fn restore(out: &mut impl Write) {
    if let Err(err) = disable_raw_mode() {
        error!(%err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
        error!(%err, "Failed to leave alternate screen");
    }
}
