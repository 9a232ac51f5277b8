//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use super::guided::choose_language;
use super::utils::load_cli_config;
use crate::config::{merge_cli_with_config, CliOverrides};
use crate::convert::{convert_all, ConvertOptions, ConvertPlan, DirSink, Scope, ScopeInputs};
use crate::domain::Config;

#[derive(Args)]
pub struct ConvertArgs {
    /// Client dictionary (client.json)
    #[arg(long, value_name = "FILE")]
    pub client_json: Option<PathBuf>,

    /// Client template (client.lang); the fallback template is used when omitted
    #[arg(long, value_name = "FILE")]
    pub client_lang: Option<PathBuf>,

    /// Server dictionary (server.json)
    #[arg(long, value_name = "FILE")]
    pub server_json: Option<PathBuf>,

    /// Server template (server.lang); the fallback template is used when omitted
    #[arg(long, value_name = "FILE")]
    pub server_lang: Option<PathBuf>,

    /// Pick up client.json, client.lang, server.json and server.lang from this directory
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory holding the fallback client.lang and server.lang
    #[arg(long, value_name = "DIR", env = "LANG_MERGE_TEMPLATE_DIR")]
    pub template_dir: Option<PathBuf>,

    /// Directory for translated output files
    #[arg(short = 'o', long, value_name = "DIR", env = "LANG_MERGE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Language code written to meta.lang (e.g. pt-BR)
    #[arg(short = 'l', long, value_name = "CODE")]
    pub language: Option<String>,

    /// Do not write meta.lang
    #[arg(long)]
    pub no_meta: bool,

    /// Accept input files whose names differ from the canonical ones
    #[arg(long)]
    pub lenient_names: bool,

    /// Never prompt for a language
    #[arg(long)]
    pub quick: bool,

    /// Print the conversion summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to config file (lang-merge.toml or lang-merge.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let file_config = load_cli_config(args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            template_dir: args.template_dir.clone(),
            output_dir: args.output_dir.clone(),
            language: args.language.clone(),
            lenient_names: args.lenient_names,
            no_meta: args.no_meta,
        },
    );

    let interactive =
        !args.quick && std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    let language = resolve_language(&config, interactive)?;

    let input_dir = args.input_dir.as_deref();
    let plan = ConvertPlan {
        client: scope_inputs(Scope::Client, args.client_json, args.client_lang, input_dir),
        server: scope_inputs(Scope::Server, args.server_json, args.server_lang, input_dir),
        language,
        options: ConvertOptions {
            template_dir: config.template_dir.clone(),
            strict_names: config.strict_names,
        },
    };

    let sink = DirSink::new(config.output_dir.clone());
    let summary = convert_all(&plan, &sink)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{json}");
        return Ok(());
    }

    for outcome in &summary.scopes {
        println!(
            "{}: {}/{} entries translated -> {}",
            outcome.scope.name(),
            outcome.report.replaced,
            outcome.report.entries,
            outcome.output.display()
        );
    }
    if let Some(meta) = &summary.meta {
        println!("meta: {}", meta.display());
    }
    Ok(())
}

/// Explicit paths win; otherwise look for the canonical name in `input_dir`.
fn scope_inputs(
    scope: Scope,
    dictionary: Option<PathBuf>,
    template: Option<PathBuf>,
    input_dir: Option<&Path>,
) -> ScopeInputs {
    let discover = |name: &str| input_dir.map(|dir| dir.join(name)).filter(|p| p.is_file());
    ScopeInputs {
        dictionary: dictionary.or_else(|| discover(scope.dictionary_file_name())),
        template: template.or_else(|| discover(scope.template_file_name())),
    }
}

fn resolve_language(config: &Config, interactive: bool) -> Result<Option<String>> {
    if !config.write_meta {
        return Ok(None);
    }
    match &config.language {
        Some(code) => {
            if config.find_language(code).is_none() {
                tracing::warn!("language '{}' is not in the configured catalogue", code);
            }
            Ok(Some(code.clone()))
        }
        None if interactive => choose_language(&config.languages),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn input_dir_supplies_canonical_files() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("client.json"), "{}").expect("write");
        fs::write(tmp.path().join("client.lang"), "").expect("write");

        let client = scope_inputs(Scope::Client, None, None, Some(tmp.path()));
        assert_eq!(client.dictionary, Some(tmp.path().join("client.json")));
        assert_eq!(client.template, Some(tmp.path().join("client.lang")));

        let server = scope_inputs(Scope::Server, None, None, Some(tmp.path()));
        assert!(server.dictionary.is_none());
        assert!(server.template.is_none());
    }

    #[test]
    fn explicit_paths_beat_input_dir() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("client.json"), "{}").expect("write");

        let explicit = PathBuf::from("elsewhere/client.json");
        let inputs = scope_inputs(Scope::Client, Some(explicit.clone()), None, Some(tmp.path()));
        assert_eq!(inputs.dictionary, Some(explicit));
    }

    #[test]
    fn language_is_skipped_when_meta_disabled() {
        let config = Config {
            language: Some("pt-BR".to_string()),
            write_meta: false,
            ..Config::default()
        };
        assert_eq!(resolve_language(&config, false).expect("language"), None);
    }

    #[test]
    fn configured_language_is_used_without_prompt() {
        let config = Config { language: Some("pt-BR".to_string()), ..Config::default() };
        assert_eq!(resolve_language(&config, false).expect("language").as_deref(), Some("pt-BR"));
        assert_eq!(resolve_language(&Config::default(), false).expect("language"), None);
    }
}
