// crates/chickenhead-cli/src/services/process.rs - Launcher backed by real child processes

use chickenhead_core::{ExitOutcome, ExternalCommand, Launcher};
use std::env;
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Spawns programs with std::process and waits for them
///
/// PROCESS HANDLING:
/// - stdin/stdout/stderr are inherited, so editors get the terminal
/// - blocks until the child exits
/// - output is never captured or rewritten
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn is_available(&self, program: &str) -> bool {
        let Some(paths) = env::var_os("PATH") else {
            return false;
        };

        env::split_paths(&paths).any(|dir| is_executable(&dir.join(program)))
    }

    fn run(&self, command: &ExternalCommand) -> io::Result<ExitOutcome> {
        debug!(%command, "launching");
        let mut child = Command::new(&command.program);
        let status = child.args(&command.args).status()?;
        debug!(code = ?status.code(), "child exited");

        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_run_reports_exit_code() {
        let launcher = SystemLauncher;
        let exit_zero = ExternalCommand::new("sh").args(["-c", "exit 0"]);
        assert!(launcher.run(&exit_zero).unwrap().success());

        let exit_three = ExternalCommand::new("sh").args(["-c", "exit 3"]);
        let failed = launcher.run(&exit_three).unwrap();
        assert_eq!(failed.code, Some(3));
    }

    #[test]
    fn test_run_missing_program_is_err() {
        let result = SystemLauncher.run(&ExternalCommand::new("chickenhead-no-such-program"));
        assert!(result.is_err());
    }

    #[test]
    fn test_is_available() {
        assert!(SystemLauncher.is_available("sh"));
        assert!(!SystemLauncher.is_available("chickenhead-no-such-program"));
    }
}
