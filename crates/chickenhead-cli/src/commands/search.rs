// crates/chickenhead-cli/src/commands/search.rs - Snippet content search
//
// Matches are printed by the external tool itself; nothing is buffered here.

use anyhow::Result;

use chickenhead_core::ChickenheadError;

use crate::context::Context;
use crate::services::SearchService;

pub fn handle(ctx: &Context, query: Option<&str>) -> Result<()> {
    let query = query.unwrap_or_default();
    if query.is_empty() {
        let message = "please enter search query".to_string();
        return Err(ChickenheadError::Validation(message).into());
    }

    SearchService::run(ctx.launcher(), query, ctx.store.root())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::{RecordingLauncher, context};
    use std::ffi::OsString;

    #[test]
    fn test_search_runs_tool_against_root() {
        let launcher = RecordingLauncher {
            available: vec!["ag".to_string()],
            ..Default::default()
        };
        let (_temp, ctx) = context("", launcher.clone());

        handle(&ctx, Some("TODO")).unwrap();

        let ran = launcher.ran.borrow();
        assert_eq!(ran[0].program, "ag");
        let root = ctx.store.root().as_os_str().to_owned();
        assert_eq!(ran[0].args, [OsString::from("TODO"), root]);
    }

    #[test]
    fn test_search_requires_query() {
        let (_temp, ctx) = context("", RecordingLauncher::default());
        for query in [None, Some("")] {
            let err = handle(&ctx, query).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ChickenheadError>(),
                Some(ChickenheadError::Validation(_))
            ));
        }
    }
}
