//! Clipboard helper for copying result text
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created per call so no resource is held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails on headless systems without a display server or when the
/// compositor denies access.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
