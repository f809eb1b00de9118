// crates/chickenhead-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per subcommand. Every handler:
// - validates its argument before touching the disk
// - checks existence up front where the command needs it
// - returns errors instead of exiting; main() reports them

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod view;

use chickenhead_core::{ChickenheadError, Result, Snippet, validate_identifier};

use crate::context::Context;

/// Validate a snippet name argument and resolve it
fn resolve_name(ctx: &Context, name: Option<&str>) -> Result<Snippet> {
    let name = name.unwrap_or_default();
    validate_identifier(name)?;
    Ok(ctx.store.resolve(name))
}

/// Like [`resolve_name`], but the snippet must already exist
fn resolve_existing(ctx: &Context, name: Option<&str>) -> Result<Snippet> {
    let snippet = resolve_name(ctx, name)?;
    if !ctx.store.exists(&snippet) {
        return Err(ChickenheadError::NotFound(snippet.path().to_path_buf()));
    }
    Ok(snippet)
}
