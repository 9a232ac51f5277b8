//! Scope conversion workflow.
//!
//! A run covers the `client` and `server` scopes. Each scope with a dictionary
//! is merged into its template (user-supplied or the fallback) and written as
//! `<scope>.translated.lang`; a `meta.lang` naming the language follows.

use serde::Serialize;
use std::path::{Path, PathBuf};

pub mod sink;

pub use sink::{DirSink, Sink};

use crate::dictionary::load_dictionary;
use crate::domain::META_FILE_NAME;
use crate::error::{ConvertError, ConvertResult};
use crate::merge::{merge_with_report, MergeReport};
use crate::template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Client,
    Server,
}

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::Client, Scope::Server];

    pub fn name(self) -> &'static str {
        match self {
            Scope::Client => "client",
            Scope::Server => "server",
        }
    }

    pub fn dictionary_file_name(self) -> &'static str {
        match self {
            Scope::Client => "client.json",
            Scope::Server => "server.json",
        }
    }

    /// Name of both the user template and the bundled fallback.
    pub fn template_file_name(self) -> &'static str {
        match self {
            Scope::Client => "client.lang",
            Scope::Server => "server.lang",
        }
    }

    pub fn output_file_name(self) -> &'static str {
        match self {
            Scope::Client => "client.translated.lang",
            Scope::Server => "server.translated.lang",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Dictionary,
    Template,
}

impl InputKind {
    pub fn expected_name(self, scope: Scope) -> &'static str {
        match self {
            InputKind::Dictionary => scope.dictionary_file_name(),
            InputKind::Template => scope.template_file_name(),
        }
    }
}

/// Check that an input file carries the canonical name for its slot.
pub fn validate_input_name(
    scope: Scope,
    kind: InputKind,
    path: &Path,
    strict: bool,
) -> ConvertResult<()> {
    if !strict {
        return Ok(());
    }
    let expected = kind.expected_name(scope);
    let found = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if found != expected {
        return Err(ConvertError::UnexpectedFileName {
            expected,
            found: path.display().to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct ScopeInputs {
    pub dictionary: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub template_dir: PathBuf,
    pub strict_names: bool,
}

#[derive(Debug, Clone)]
pub struct ConvertPlan {
    pub client: ScopeInputs,
    pub server: ScopeInputs,
    /// Language code for `meta.lang`; no meta file when absent.
    pub language: Option<String>,
    pub options: ConvertOptions,
}

impl ConvertPlan {
    pub fn inputs(&self, scope: Scope) -> &ScopeInputs {
        match scope {
            Scope::Client => &self.client,
            Scope::Server => &self.server,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScopeOutcome {
    pub scope: Scope,
    pub template: String,
    pub output: PathBuf,
    pub report: MergeReport,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertSummary {
    pub scopes: Vec<ScopeOutcome>,
    pub meta: Option<PathBuf>,
}

/// Convert one scope. Returns `Ok(None)` when the scope has no dictionary.
pub fn convert_scope(
    scope: Scope,
    inputs: &ScopeInputs,
    options: &ConvertOptions,
    sink: &dyn Sink,
) -> ConvertResult<Option<ScopeOutcome>> {
    let Some(dictionary_path) = inputs.dictionary.as_deref() else {
        tracing::debug!("{}: no dictionary, skipping", scope.name());
        return Ok(None);
    };

    let dictionary = load_dictionary(dictionary_path)?;
    let source = template::resolve(
        inputs.template.as_deref(),
        &options.template_dir,
        scope.template_file_name(),
    );
    let template_text = source.load()?;

    let (merged, report) = merge_with_report(&template_text, &dictionary);
    tracing::info!(
        "{}: replaced {} of {} entries using {}",
        scope.name(),
        report.replaced,
        report.entries,
        source.describe()
    );
    if !report.unused_keys.is_empty() {
        tracing::debug!(
            "{}: {} dictionary keys not present in template: {}",
            scope.name(),
            report.unused_keys.len(),
            report.unused_keys.join(", ")
        );
    }

    let output = sink.write(scope.output_file_name(), &merged)?;
    Ok(Some(ScopeOutcome { scope, template: source.describe(), output, report }))
}

/// Run every scope of `plan`, then write `meta.lang` when a language is set.
pub fn convert_all(plan: &ConvertPlan, sink: &dyn Sink) -> ConvertResult<ConvertSummary> {
    for scope in Scope::ALL {
        let inputs = plan.inputs(scope);
        if let Some(path) = &inputs.dictionary {
            validate_input_name(scope, InputKind::Dictionary, path, plan.options.strict_names)?;
        }
        if let Some(path) = &inputs.template {
            validate_input_name(scope, InputKind::Template, path, plan.options.strict_names)?;
        }
    }

    if Scope::ALL.iter().all(|scope| plan.inputs(*scope).dictionary.is_none()) {
        return Err(ConvertError::NothingToConvert);
    }

    let mut summary = ConvertSummary::default();
    for scope in Scope::ALL {
        if let Some(outcome) = convert_scope(scope, plan.inputs(scope), &plan.options, sink)? {
            summary.scopes.push(outcome);
        }
    }

    if let Some(language) = plan.language.as_deref() {
        summary.meta = Some(sink.write(META_FILE_NAME, &meta_contents(language))?);
    }

    Ok(summary)
}

pub fn meta_contents(language: &str) -> String {
    format!("name = {language}")
}
