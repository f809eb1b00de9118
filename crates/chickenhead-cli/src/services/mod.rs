// crates/chickenhead-cli/src/services/mod.rs - Service layer modules
pub mod editor;
pub mod process;
pub mod searcher;

pub use editor::EditorService;
pub use process::SystemLauncher;
pub use searcher::SearchService;
