// crates/chickenhead-cli/src/services/searcher.rs - Content search via pt or ag
//
// chickenhead does not grep snippets itself. It hands the query to the
// platinum searcher (pt) or the silver searcher (ag), whichever is installed
// first, and lets it print straight to the terminal.

use chickenhead_core::{ChickenheadError, ExternalCommand, Launcher, Result};
use std::path::Path;
use tracing::debug;

/// Search tools in order of preference
pub const SEARCH_TOOLS: [&str; 2] = ["pt", "ag"];

const NO_SEARCH_TOOL: &str = "the_platinum_searcher(pt) or the_silver_searcher(ag) is required.";

pub struct SearchService;

impl SearchService {
    /// Build the search command for the first available tool
    pub fn command_for(
        launcher: &dyn Launcher,
        query: &str,
        root: &Path,
    ) -> Result<ExternalCommand> {
        let tool = SEARCH_TOOLS
            .into_iter()
            .find(|tool| launcher.is_available(tool))
            .ok_or_else(|| ChickenheadError::ExternalTool(NO_SEARCH_TOOL.into()))?;

        let command = match tool {
            "pt" => ExternalCommand::new(tool).arg("-i"),
            _ => ExternalCommand::new(tool),
        };
        Ok(command.arg(query).arg(root))
    }

    /// Run the search, streaming results to the terminal
    ///
    /// Both tools exit non-zero when nothing matches, so the exit status is
    /// logged but never treated as a failure.
    pub fn run(launcher: &dyn Launcher, query: &str, root: &Path) -> Result<()> {
        let command = Self::command_for(launcher, query, root)?;

        let outcome = launcher.run(&command).map_err(|e| {
            ChickenheadError::ExternalTool(format!("failed to run {}: {e}", command.program))
        })?;
        debug!(code = ?outcome.code, "search finished");

        Ok(())
    }
}
