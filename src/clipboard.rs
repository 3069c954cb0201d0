//! Clipboard helpers.
//!
//! The preferred path is the native clipboard via `arboard`. When that is
//! unavailable (headless sessions, no display server) or fails mid-write,
//! the text is piped into a platform copy command instead. Callers only
//! ever see [`ClipboardError`]; the underlying platform errors are logged.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::ClipboardError;

/// One way of getting text onto the system clipboard.
pub trait ClipboardWrite {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Native clipboard via arboard. Construction fails in contexts without
/// clipboard access, which is what routes callers to the fallback.
pub struct NativeClipboard;

impl ClipboardWrite for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            warn!("clipboard init: {e}");
            ClipboardError
        })?;
        clipboard.set_text(text.to_owned()).map_err(|e| {
            warn!("clipboard set: {e}");
            ClipboardError
        })
    }
}

#[cfg(target_os = "linux")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];
#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];
#[cfg(target_os = "windows")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const COPY_COMMANDS: &[(&str, &[&str])] = &[];

/// Legacy fallback: pipe the text into the first platform copy command that
/// accepts it.
pub struct CommandClipboard;

impl CommandClipboard {
    fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // The child is always reaped, whether or not the write succeeded;
        // taking stdin out of the struct closes the pipe before the wait.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;
        Ok(status.success())
    }
}

impl ClipboardWrite for CommandClipboard {
    fn name(&self) -> &'static str {
        "command"
    }

    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in COPY_COMMANDS {
            match Self::pipe_to(program, args, text) {
                Ok(true) => {
                    debug!("Copied via {program}");
                    return Ok(());
                }
                Ok(false) => warn!("{program} exited unsuccessfully"),
                Err(e) => debug!("{program} unavailable: {e}"),
            }
        }
        Err(ClipboardError)
    }
}

/// Ordered chain of clipboard writers.
///
/// A writer that fails falls through to the next one; only when the whole
/// chain is exhausted does the caller get a [`ClipboardError`].
pub struct Copier {
    writers: Vec<Box<dyn ClipboardWrite>>,
}

impl Copier {
    pub fn new(writers: Vec<Box<dyn ClipboardWrite>>) -> Self {
        Self { writers }
    }

    /// Default chain: native clipboard first, command fallback second.
    pub fn detect() -> Self {
        Self::new(vec![Box::new(NativeClipboard), Box::new(CommandClipboard)])
    }

    pub fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        for writer in &self.writers {
            match writer.write(text) {
                Ok(()) => {
                    debug!("Copied {} bytes via {} writer", text.len(), writer.name());
                    return Ok(());
                }
                Err(_) => warn!("{} clipboard writer failed, trying next", writer.name()),
            }
        }
        warn!("All clipboard writers failed");
        Err(ClipboardError)
    }
}

/// Copy `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    Copier::detect().copy(text)
}
