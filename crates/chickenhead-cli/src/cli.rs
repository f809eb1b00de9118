use clap::{Parser, Subcommand};

/// Main CLI structure
#[derive(Parser)]
#[command(name = "chickenhead")]
#[command(about = "simple CLI snippet tool.")]
#[command(version)]
pub struct Cli {
    /// Log what chickenhead is doing to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Snippet subcommands
///
/// Snippet names are slash-separated: `go/http/server` is the snippet
/// `server` in the group `go/http`.
#[derive(Subcommand)]
pub enum Commands {
    /// add a new snippet
    #[command(visible_alias = "a")]
    Add {
        /// Snippet name, e.g. `shell/loop.sh`
        name: Option<String>,

        /// read contents from Standard Input
        #[arg(short = 's', long = "stdin")]
        from_stdin: bool,
    },

    /// delete a snippet
    #[command(visible_alias = "d")]
    Delete {
        /// Snippet name
        name: Option<String>,

        /// force delete
        #[arg(short, long)]
        force: bool,
    },

    /// edit a snippet
    #[command(visible_alias = "e")]
    Edit {
        /// Snippet name
        name: Option<String>,
    },

    /// list up available snippets
    #[command(visible_alias = "l")]
    List {
        /// Only show snippets whose path matches this pattern
        filter: Option<String>,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// view a snippet
    #[command(visible_alias = "v")]
    View {
        /// Snippet name
        name: Option<String>,
    },

    /// search snippets
    #[command(visible_alias = "s")]
    Search {
        /// Text to look for inside snippets
        query: Option<String>,
    },

    /// Print a shell completion script
    #[cfg(feature = "completions")]
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
