// crates/chickenhead-cli/src/main.rs - CLI Application Entry Point
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │     Services        │
//                        │ (config + store) │    │ (editor, pt/ag)     │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// chickenhead add go/http/server        # create and open in editor
// cat loop.sh | chickenhead a -s shell/loop.sh
// chickenhead list http                 # go/http/server
// chickenhead view go/http/server
// chickenhead search ListenAndServe
// chickenhead delete -f shell/loop.sh
// ```

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod cli; // Command-line interface definitions
mod commands; // Command implementations
mod context; // Configuration and dependency injection
mod services; // Editor, search tool, process launching
mod stdin; // Reading snippet bodies and confirmations

use cli::{Cli, Commands};
use context::Context;

/// Environment variable controlling log output, e.g. `CHICKENHEAD_LOG=debug`
const LOG_ENV: &str = "CHICKENHEAD_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Completions don't need a snippet directory
    #[cfg(feature = "completions")]
    if let Commands::Completions { shell } = cli.command {
        use clap::CommandFactory;
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "chickenhead", &mut io::stdout());
        return Ok(());
    }

    let ctx = Context::new()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Add { name, from_stdin } => {
            commands::add::handle(&ctx, name.as_deref(), from_stdin, &mut stdin.lock())
        }
        Commands::Delete { name, force } => {
            let mut input = stdin.lock();
            commands::delete::handle(&ctx, name.as_deref(), force, &mut input, &mut stdout)
        }
        Commands::Edit { name } => commands::edit::handle(&ctx, name.as_deref()),
        Commands::List { filter, json } => {
            commands::list::handle(&ctx, filter.as_deref(), json, &mut stdout)
        }
        Commands::View { name } => commands::view::handle(&ctx, name.as_deref(), &mut stdout),
        Commands::Search { query } => commands::search::handle(&ctx, query.as_deref()),
        #[cfg(feature = "completions")]
        Commands::Completions { .. } => unreachable!(), // Already handled above
    }
}

/// Send tracing output to stderr so it never mixes with snippet contents
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
