// crates/chickenhead-core/src/lib.rs - Core library for the chickenhead snippet manager
//
// MODULES:
// - snippet:  identifier -> path resolution (pure)
// - store:    file operations on resolved snippets
// - config:   rc file loading
// - launcher: abstraction over running external programs
// - error:    shared error type

pub mod config;
pub mod error;
pub mod launcher;
pub mod snippet;
pub mod store;

pub use config::{Config, ConfigError, ConfigManager};
pub use error::{ChickenheadError, Result};
pub use launcher::{ExitOutcome, ExternalCommand, Launcher};
pub use snippet::{Snippet, resolve, validate_identifier};
pub use store::{ListFilter, SnippetStore};
