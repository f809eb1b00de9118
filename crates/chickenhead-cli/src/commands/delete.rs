// crates/chickenhead-cli/src/commands/delete.rs - Remove a snippet

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::context::Context;

/// Delete a snippet, asking first unless `force` is set
///
/// Answering anything but `y` leaves the snippet alone and is not an error.
pub fn handle(
    ctx: &Context,
    name: Option<&str>,
    force: bool,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let snippet = super::resolve_existing(ctx, name)?;

    if !force {
        let question = format!("sure you want to delete {snippet}");
        if !crate::stdin::confirm(&question, input, out)? {
            debug!(%snippet, "delete declined");
            return Ok(());
        }
    }

    ctx.store.delete(&snippet)?;
    writeln!(out, "{snippet} has been deleted.")?;

    Ok(())
}
