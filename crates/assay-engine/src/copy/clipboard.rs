#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard backend available")]
    NoBackend,
    #[error("Failed to start clipboard command `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Clipboard command `{command}` exited with {status}")]
    CommandFailed { command: String, status: String },
}

/// Platform capability for writing text to the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, content: &str) -> Result<(), ClipboardError>;
}
