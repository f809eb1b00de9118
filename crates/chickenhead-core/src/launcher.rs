// crates/chickenhead-core/src/launcher.rs - Capability for running external programs
//
// Editing and searching are delegated to other programs (an editor, `pt` or
// `ag`). Command logic only describes WHAT to run; a Launcher decides HOW. The
// CLI plugs in a process-backed implementation, tests plug in a recorder.

use std::ffi::OsString;
use std::fmt;
use std::io;

/// A program plus its arguments, ready to be launched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a launched program finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, `None` if the program was killed by a signal
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external programs synchronously
///
/// The child shares the parent's stdin, stdout and stderr; `run` blocks until
/// it exits. Output is never captured.
pub trait Launcher {
    /// Whether `program` can be found on the search path
    fn is_available(&self, program: &str) -> bool;

    /// Run the command to completion
    ///
    /// An `Err` means the program could not be started at all.
    fn run(&self, command: &ExternalCommand) -> io::Result<ExitOutcome>;
}
