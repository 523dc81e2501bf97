use color_eyre::Result;
use ratatui::DefaultTerminal;

/// Scoped terminal takeover: alternate screen and raw mode while alive,
/// normal scroll mode again once dropped.
///
/// `ratatui::try_init` also installs a panic hook that restores the terminal,
/// so a panic mid-tick leaves the shell usable too.
pub struct ScreenGuard {
    terminal: DefaultTerminal,
}

impl ScreenGuard {
    pub fn acquire() -> Result<Self> {
        let terminal = ratatui::try_init()?;
        Ok(ScreenGuard { terminal })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
