//! Clipboard access with graceful degradation.
//!
//! Headless sessions (CI, ssh) have no clipboard; every failure mode maps
//! to `None` so callers can fall back without branching on error kinds.

/// Reads text from the system clipboard.
///
/// Returns `None` when no clipboard is available or it holds no text.
pub fn read_text() -> Option<String> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            log::debug!("clipboard unavailable: {err}");
            return None;
        }
    };
    match clipboard.get_text() {
        Ok(text) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(err) => {
            log::debug!("clipboard read failed: {err}");
            None
        }
    }
}
