//! lang-merge: merge translated dictionaries into `.lang` templates
//!
//! Rewrites a template with translated values while keeping its comments,
//! blank lines, ordering and untouched continuation blocks intact.

use anyhow::Result;

fn main() -> Result<()> {
    lang_merge::cli::run()
}
