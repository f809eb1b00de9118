// crates/chickenhead-cli/src/services/editor.rs - Editor Integration Service
//
// Opens a snippet either with the editor from the rc file or, when none is
// configured, with whatever the OS associates with the file.
//
// EDITOR SELECTION:
// 1. Editor from ~/.chickenheadrc (or CHICKENHEAD_EDITOR)
// 2. Platform opener: xdg-open (Linux/BSD), open (macOS), cmd /C start (Windows)

use chickenhead_core::{ChickenheadError, ExternalCommand, Launcher, Result};
use std::path::Path;
use tracing::debug;

/// Handles text editor operations
pub struct EditorService;

impl EditorService {
    /// Build the command that opens `path`
    ///
    /// The editor setting may carry arguments (`"code --wait"`); it is split on
    /// whitespace and the path goes last.
    pub fn command_for(path: &Path, editor: Option<&str>) -> ExternalCommand {
        match editor {
            Some(editor) => {
                let mut words = editor.split_whitespace();
                // editor() never hands out an empty string
                let program = words.next().unwrap_or(editor);
                ExternalCommand::new(program).args(words).arg(path)
            }
            None => Self::default_opener(path),
        }
    }

    /// Open the file and block until the editor exits
    ///
    /// A launch failure or a non-zero exit is reported as an external tool
    /// error; the file itself is left as it is.
    pub fn open_file(launcher: &dyn Launcher, path: &Path, editor: Option<&str>) -> Result<()> {
        let command = Self::command_for(path, editor);
        debug!(%command, "opening snippet");

        match launcher.run(&command) {
            Ok(outcome) if outcome.success() => return Ok(()),
            Ok(outcome) => debug!(code = ?outcome.code, "editor exited with failure"),
            Err(e) => debug!(error = %e, "editor failed to start"),
        }

        Err(ChickenheadError::ExternalTool(match editor {
            Some(editor) => format!(
                "can't open {} with {}. please check your settings.",
                path.display(),
                editor
            ),
            None => format!("can't open {}. please check your settings.", path.display()),
        }))
    }

    #[cfg(target_os = "macos")]
    fn default_opener(path: &Path) -> ExternalCommand {
        ExternalCommand::new("open").arg(path)
    }

    #[cfg(windows)]
    fn default_opener(path: &Path) -> ExternalCommand {
        ExternalCommand::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    fn default_opener(path: &Path) -> ExternalCommand {
        ExternalCommand::new("xdg-open").arg(path)
    }
}
