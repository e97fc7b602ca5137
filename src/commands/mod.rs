pub mod contributions;

use crate::report::render::DEFAULT_WIDTH;
use std::io::{stdout, IsTerminal};
use terminal_size::{terminal_size, Width};

/// The requested width, else the terminal's, else [`DEFAULT_WIDTH`].
pub fn resolve_width(requested: usize) -> usize {
    let probed = if stdout().is_terminal() {
        terminal_size().map(|(Width(w), _)| w)
    } else {
        None
    };
    pick_width(requested, probed)
}

/// A terminal reporting zero columns counts as unknown.
fn pick_width(requested: usize, probed: Option<u16>) -> usize {
    if requested > 0 {
        return requested;
    }
    match probed {
        Some(w) if w > 0 => usize::from(w),
        _ => DEFAULT_WIDTH,
    }
}

pub fn color_enabled() -> bool {
    stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
