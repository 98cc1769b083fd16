//! Line-oriented I/O for the interaction shell.
//!
//! - [`Stream`] — any reader/writer pair; piped stdin and tests
//! - [`Terminal`] — interactive prompts (requires `cli` feature)
mod stream;
#[cfg(feature = "cli")]
mod terminal;

pub use stream::*;
#[cfg(feature = "cli")]
pub use terminal::*;

/// Prompt-and-print surface the session talks through.
pub trait Console {
    /// Prompts for one line. `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
    /// Prints a block of text followed by a newline.
    fn say(&mut self, text: &str) -> anyhow::Result<()>;
}
