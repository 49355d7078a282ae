use is_terminal::IsTerminal;

/// Display formatting options for terminal rendering
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub enable_color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { enable_color: true }
    }
}

impl DisplayOptions {
    /// Colors only when stdout is a terminal
    pub fn for_stdout() -> Self {
        Self {
            enable_color: std::io::stdout().is_terminal(),
        }
    }
}
