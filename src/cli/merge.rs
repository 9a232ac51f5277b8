//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::write_or_print;
use crate::dictionary::load_dictionary;
use crate::merge::merge_with_report;
use crate::template::{FileTemplate, TemplateSource};

#[derive(Args)]
pub struct MergeArgs {
    /// Template .lang file whose formatting is preserved
    #[arg(short, long, value_name = "FILE")]
    pub template: PathBuf,

    /// Translation dictionary (.json, .yaml or .yml)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Write the merged file here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print a JSON merge report to stderr
    #[arg(long)]
    pub report: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let template = FileTemplate { path: args.template.clone() }.load()?;

    let (merged, report) = merge_with_report(&template, &dictionary);
    tracing::info!("replaced {} of {} entries", report.replaced, report.entries);

    write_or_print(args.output.as_deref(), &merged)?;

    if args.report {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        eprintln!("{json}");
    }
    Ok(())
}
