use anyhow::Result;
use std::io::Write;

use crate::context::Context;

/// Print a snippet's contents exactly as stored
pub fn handle(ctx: &Context, name: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let snippet = super::resolve_existing(ctx, name)?;
    let contents = ctx.store.read_contents(&snippet)?;
    out.write_all(contents.as_bytes())?;
    out.flush()?;
    Ok(())
}
