use anyhow::Result;
use std::io::Write;

use chickenhead_core::ListFilter;

use crate::context::Context;

/// List snippets under the root, one relative path per line
///
/// - Human-readable: `go/http/server`
/// - Machine-readable: `--json` prints a JSON array of the same paths
pub fn handle(
    ctx: &Context,
    filter: Option<&str>,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let filter = filter
        .filter(|pattern| !pattern.is_empty())
        .map(ListFilter::new)
        .transpose()?;

    let snippets = ctx.store.list(filter.as_ref())?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&snippets)?)?;
    } else {
        for snippet in snippets {
            writeln!(out, "{snippet}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::{RecordingLauncher, context};

    fn listed(ctx: &Context, filter: Option<&str>, json: bool) -> String {
        let mut out = Vec::new();
        handle(ctx, filter, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn seeded() -> (tempfile::TempDir, Context) {
        let (temp, ctx) = context("", RecordingLauncher::default());
        for id in ["foo.txt", "bar/baz", "bar/foo/qux", "zap"] {
            ctx.store.write(&ctx.store.resolve(id), b"").unwrap();
        }
        (temp, ctx)
    }

    #[test]
    fn test_list_everything() {
        let (_temp, ctx) = seeded();
        assert_eq!(
            listed(&ctx, None, false),
            "bar/baz\nbar/foo/qux\nfoo.txt\nzap\n"
        );
    }

    #[test]
    fn test_list_with_filter() {
        let (_temp, ctx) = seeded();
        assert_eq!(listed(&ctx, Some("foo"), false), "bar/foo/qux\nfoo.txt\n");
    }

    #[test]
    fn test_empty_filter_lists_everything() {
        let (_temp, ctx) = seeded();
        assert_eq!(listed(&ctx, Some(""), false), listed(&ctx, None, false));
    }

    #[test]
    fn test_list_json() {
        let (_temp, ctx) = seeded();
        let printed = listed(&ctx, Some("^bar/"), true);
        let parsed: Vec<String> = serde_json::from_str(&printed).unwrap();
        assert_eq!(parsed, ["bar/baz", "bar/foo/qux"]);
    }
}
