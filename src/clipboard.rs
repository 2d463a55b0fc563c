//! Clipboard access for copying translations.
//!
//! Two mechanisms are available: the system clipboard (behind the
//! `system-clipboard` feature) and the OSC 52 terminal escape sequence, which
//! asks the terminal emulator to set the clipboard and also works over SSH.
//! `ClipboardChain` tries them in order.

use std::io::{IsTerminal, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use tracing::{debug, warn};

/// Terminals commonly drop OSC 52 payloads above this size.
const OSC52_MAX_ENCODED_LEN: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No usable clipboard mechanism
    #[error("Clipboard not available: {0}")]
    Unsupported(String),

    /// The clipboard exists but refused the write
    #[error("Clipboard write failed: {0}")]
    Failed(String),
}

/// Something text can be copied to.
pub trait Clipboard {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard (X11/Wayland, macOS, Windows).
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use cli_clipboard::{ClipboardContext, ClipboardProvider};

        let mut ctx =
            ClipboardContext::new().map_err(|e| ClipboardError::Unsupported(e.to_string()))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::Failed(e.to_string()))
    }
}

/// Sets the clipboard through the terminal with an OSC 52 escape sequence.
pub struct Osc52Clipboard<W: Write> {
    out: W,
    is_terminal: bool,
}

impl Osc52Clipboard<std::io::Stdout> {
    /// OSC 52 on standard output; unsupported when stdout is not a terminal.
    pub fn stdout() -> Self {
        let out = std::io::stdout();
        let is_terminal = out.is_terminal();
        Self { out, is_terminal }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W, is_terminal: bool) -> Self {
        Self { out, is_terminal }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// The escape sequence that sets the clipboard to `text`.
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.is_terminal {
            return Err(ClipboardError::Unsupported(
                "output is not a terminal".to_string(),
            ));
        }

        let sequence = Self::sequence(text);
        if sequence.len() > OSC52_MAX_ENCODED_LEN {
            return Err(ClipboardError::Failed(format!(
                "text too large for OSC 52 ({} bytes encoded)",
                sequence.len()
            )));
        }

        self.out
            .write_all(sequence.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| ClipboardError::Failed(e.to_string()))
    }
}

/// Tries each clipboard in order until one accepts the text.
///
/// When every mechanism fails, a `Failed` error wins over `Unsupported`: the
/// chain is only unsupported if no mechanism was available at all.
pub struct ClipboardChain {
    clipboards: Vec<Box<dyn Clipboard + Send>>,
}

impl ClipboardChain {
    pub fn new(clipboards: Vec<Box<dyn Clipboard + Send>>) -> Self {
        Self { clipboards }
    }

    /// System clipboard first (when compiled in), then OSC 52 on stdout.
    pub fn platform_default() -> Self {
        let mut clipboards: Vec<Box<dyn Clipboard + Send>> = Vec::new();
        #[cfg(feature = "system-clipboard")]
        clipboards.push(Box::new(SystemClipboard));
        clipboards.push(Box::new(Osc52Clipboard::stdout()));
        Self::new(clipboards)
    }
}

impl Clipboard for ClipboardChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut failed: Option<ClipboardError> = None;
        let mut unsupported: Option<ClipboardError> = None;

        for clipboard in self.clipboards.iter_mut() {
            match clipboard.write_text(text) {
                Ok(()) => {
                    debug!("Copied {} chars via {}", text.chars().count(), clipboard.name());
                    return Ok(());
                }
                Err(e) => {
                    warn!("{} clipboard failed: {}", clipboard.name(), e);
                    match e {
                        ClipboardError::Failed(_) => failed = Some(e),
                        ClipboardError::Unsupported(_) => unsupported = Some(e),
                    }
                }
            }
        }

        Err(failed.or(unsupported).unwrap_or_else(|| {
            ClipboardError::Unsupported("no clipboard mechanism configured".to_string())
        }))
    }
}
