// crates/chickenhead-cli/src/commands/add.rs - Create a new snippet
//
// Two ways in:
//   chickenhead add go/http/server       # empty file, then the editor
//   echo hi | chickenhead add -s greet   # body taken from stdin

use anyhow::Result;
use std::io::Read;
use tracing::debug;

use chickenhead_core::ChickenheadError;

use crate::context::Context;
use crate::services::EditorService;

pub fn handle(
    ctx: &Context,
    name: Option<&str>,
    from_stdin: bool,
    input: &mut dyn Read,
) -> Result<()> {
    let snippet = super::resolve_name(ctx, name)?;

    if ctx.store.exists(&snippet) {
        let path = snippet.path().to_path_buf();
        return Err(ChickenheadError::AlreadyExists(path).into());
    }

    if from_stdin {
        let contents = crate::stdin::read_all(input)?;
        ctx.store.write(&snippet, &contents)?;
        let bytes = contents.len();
        debug!(path = %snippet.path().display(), bytes, "snippet written from stdin");
    } else {
        // Close the fresh file before the editor gets it
        drop(ctx.store.create(&snippet)?);
        debug!(path = %snippet.path().display(), "empty snippet created");
        EditorService::open_file(ctx.launcher(), snippet.path(), ctx.config().editor())?;
    }

    Ok(())
}
