use anyhow::Result;

use crate::context::Context;
use crate::services::EditorService;

/// Open an existing snippet in the editor and wait for it to close
pub fn handle(ctx: &Context, name: Option<&str>) -> Result<()> {
    let snippet = super::resolve_existing(ctx, name)?;
    EditorService::open_file(ctx.launcher(), snippet.path(), ctx.config().editor())?;
    Ok(())
}
