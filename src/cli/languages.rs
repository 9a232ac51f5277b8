//! Languages command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::load_cli_config;

#[derive(Args)]
pub struct LanguagesArgs {
    /// Path to config file (lang-merge.toml or lang-merge.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: LanguagesArgs) -> Result<()> {
    let config = load_cli_config(args.config.as_deref())?;
    for lang in &config.languages {
        println!("{}\t{}", lang.code, lang.label());
    }
    Ok(())
}
