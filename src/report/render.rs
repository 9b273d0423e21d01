//! Report rendering.

use std::io::{self, Write};

/// Displays a finished report. Failures are reported, never fatal.
pub trait Renderer: Send + Sync {
    fn render(&self, report: &str) -> io::Result<()>;
}

/// Redraws the report on stdout.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    clear_screen: bool,
}

impl TerminalRenderer {
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, report: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.clear_screen {
            out.write_all(b"\x1b[H\x1b[2J")?;
        }
        out.write_all(report.as_bytes())?;
        out.flush()
    }
}
