//! Inspect command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::dictionary::load_dictionary;
use crate::merge::{coverage, scan_template, Coverage, LineKind, TemplateLine};
use crate::template::{FileTemplate, TemplateSource};

/// How many untranslated or unused keys to list before summarizing.
const KEY_LIST_LIMIT: usize = 20;

#[derive(Args)]
pub struct InspectArgs {
    /// Template .lang file to analyze
    #[arg(short, long, value_name = "FILE")]
    pub template: PathBuf,

    /// Dictionary to measure coverage against
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Default, Serialize)]
struct TemplateStats {
    physical_lines: usize,
    entries: usize,
    continuation_lines: usize,
    comments: usize,
    blank: usize,
    other: usize,
    /// Keys that start more than one logical entry, with their line numbers.
    duplicate_keys: BTreeMap<String, Vec<usize>>,
}

fn template_stats(units: &[TemplateLine]) -> TemplateStats {
    let mut stats = TemplateStats::default();
    let mut seen: BTreeMap<String, Vec<usize>> = BTreeMap::new();

    for unit in units {
        stats.physical_lines += unit.span;
        match unit.kind {
            LineKind::Blank => stats.blank += 1,
            LineKind::Comment => stats.comments += 1,
            LineKind::Other => stats.other += 1,
            LineKind::Entry => {
                stats.entries += 1;
                stats.continuation_lines += unit.span - 1;
            }
        }
        if let Some(key) = &unit.key {
            seen.entry(key.clone()).or_default().push(unit.line);
        }
    }

    stats.duplicate_keys = seen.into_iter().filter(|(_, lines)| lines.len() > 1).collect();
    stats
}

pub fn run(args: InspectArgs) -> Result<()> {
    let template = FileTemplate { path: args.template.clone() }.load()?;
    let stats = template_stats(&scan_template(&template));

    let cov = match &args.dictionary {
        Some(path) => Some(coverage(&template, &load_dictionary(path)?)),
        None => None,
    };

    if args.json {
        let value = serde_json::json!({ "template": stats, "coverage": cov });
        println!("{}", serde_json::to_string_pretty(&value).context("Failed to serialize")?);
        return Ok(());
    }

    println!("Template: {}", args.template.display());
    println!("  Physical lines: {}", stats.physical_lines);
    println!("  Entries: {}", stats.entries);
    println!("  Continuation lines: {}", stats.continuation_lines);
    println!("  Comments: {}", stats.comments);
    println!("  Blank lines: {}", stats.blank);
    println!("  Other lines: {}", stats.other);
    if !stats.duplicate_keys.is_empty() {
        println!("Duplicate keys:");
        for (key, lines) in &stats.duplicate_keys {
            let lines = lines.iter().map(|l| l.to_string()).collect::<Vec<_>>().join(", ");
            println!("  {} (lines {})", key, lines);
        }
    }

    if let Some(cov) = &cov {
        print_coverage(cov);
    }
    Ok(())
}

fn print_coverage(cov: &Coverage) {
    let total = cov.translated.len() + cov.untranslated.len();
    println!("Coverage:");
    println!(
        "  Translated: {}/{} ({}%)",
        cov.translated.len(),
        total,
        (cov.ratio() * 100.0).round() as u64
    );
    print_key_list("Untranslated keys", &cov.untranslated);
    print_key_list("Unused dictionary keys", &cov.unused);
}

fn print_key_list(title: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    println!("{}: {}", title, keys.len());
    for key in keys.iter().take(KEY_LIST_LIMIT) {
        println!("  {}", key);
    }
    if keys.len() > KEY_LIST_LIMIT {
        println!("  ... and {} more", keys.len() - KEY_LIST_LIMIT);
    }
}
