use assay_engine::{Clipboard, ClipboardError};
use std::env;
use std::io::Write;
use std::process::{Child, Command, Stdio};

/// Clipboard backed by a command that reads the text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

/// Known clipboard commands, tried in order.
const CANDIDATES: [(&str, &[&str]); 5] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip.exe", &[]),
];

impl CommandClipboard {
    /// Splits a configured command line on whitespace.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Finds the first known clipboard command on `PATH`.
    pub fn detect() -> Option<Self> {
        let path = env::var_os("PATH")?;
        let dirs: Vec<_> = env::split_paths(&path).collect();
        let wayland = env::var_os("WAYLAND_DISPLAY").is_some();

        CANDIDATES
            .iter()
            .filter(|(program, _)| wayland || *program != "wl-copy")
            .find(|(program, _)| dirs.iter().any(|d| d.join(program).is_file()))
            .map(|(program, args)| Self {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            })
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, content: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                command: self.display(),
                source,
            })?;

        feed(&mut child, content)?;

        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                command: self.display(),
                status: status.to_string(),
            });
        }
        log::debug!("copied {} bytes via {}", content.len(), self.program);
        Ok(())
    }
}

/// Writes `content` to the child's stdin and closes it.
///
/// A failed write kills and reaps the child before the error is returned.
fn feed(child: &mut Child, content: &str) -> Result<(), ClipboardError> {
    let Some(mut stdin) = child.stdin.take() else {
        return Ok(());
    };
    if let Err(e) = stdin.write_all(content.as_bytes()) {
        drop(stdin);
        let _ = child.kill();
        let _ = child.wait();
        return Err(e.into());
    }
    Ok(())
}

/// The clipboard the viewer copies into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemClipboard {
    Command(CommandClipboard),
    Unavailable,
}

impl SystemClipboard {
    /// Uses the configured command if any, otherwise auto-detects one.
    pub fn resolve(configured: Option<&str>) -> Self {
        let found = match configured {
            Some(command) => CommandClipboard::from_command_line(command),
            None => CommandClipboard::detect(),
        };
        match found {
            Some(clipboard) => SystemClipboard::Command(clipboard),
            None => {
                log::info!("no clipboard command found; copying is disabled");
                SystemClipboard::Unavailable
            }
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, content: &str) -> Result<(), ClipboardError> {
        match self {
            SystemClipboard::Command(clipboard) => clipboard.write_text(content),
            SystemClipboard::Unavailable => Err(ClipboardError::NoBackend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_command_line() {
        let clipboard = CommandClipboard::from_command_line("xclip -selection clipboard").unwrap();
        assert_eq!(clipboard.program, "xclip");
        assert_eq!(clipboard.args, vec!["-selection", "clipboard"]);
        assert_eq!(clipboard.display(), "xclip -selection clipboard");
    }

    #[test]
    fn empty_command_line_is_rejected() {
        assert_eq!(CommandClipboard::from_command_line("   "), None);
    }

    #[test]
    fn configured_command_wins() {
        assert_eq!(
            SystemClipboard::resolve(Some("pbcopy")),
            SystemClipboard::Command(CommandClipboard {
                program: "pbcopy".into(),
                args: vec![]
            })
        );
    }

    #[test]
    fn unavailable_clipboard_reports_no_backend() {
        let err = SystemClipboard::Unavailable.write_text("x").unwrap_err();
        assert!(matches!(err, ClipboardError::NoBackend));
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let mut clipboard =
            CommandClipboard::from_command_line("assay-no-such-clipboard-binary").unwrap();
        let err = clipboard.write_text("x").unwrap_err();
        assert!(matches!(err, ClipboardError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn command_receives_text_on_stdin() {
        let mut clipboard = CommandClipboard::from_command_line("cat").unwrap();
        clipboard.write_text("echo ok").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_reported() {
        let mut clipboard = CommandClipboard::from_command_line("false").unwrap();
        let err = clipboard.write_text("x").unwrap_err();
        assert!(matches!(err, ClipboardError::CommandFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failed_write_reaps_the_command() {
        let mut child = Command::new("true")
            .stdin(Stdio::piped())
            .spawn()
            .unwrap();
        let payload = "x".repeat(1 << 20);

        let err = feed(&mut child, &payload).unwrap_err();

        assert!(matches!(err, ClipboardError::Io(_)));
        assert!(child.try_wait().unwrap().is_some());
    }
}
