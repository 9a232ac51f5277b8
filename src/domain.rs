//! Shared domain types: configuration and the language catalogue.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TEMPLATE_DIR: &str = "source";
pub const META_FILE_NAME: &str = "meta.lang";

/// A target language offered for `meta.lang`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub code: String,
    /// Translation completeness, 0-100.
    #[serde(default)]
    pub percent: u8,
}

impl Language {
    pub fn label(&self) -> String {
        format!("{} ({}%)", self.name, self.percent)
    }
}

pub fn default_languages() -> Vec<Language> {
    vec![Language {
        name: "Português Brasileiro".to_string(),
        code: "pt-BR".to_string(),
        percent: 100,
    }]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the fallback `client.lang` / `server.lang`.
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Language code written to `meta.lang`.
    pub language: Option<String>,
    /// Require inputs to carry their canonical file names.
    pub strict_names: bool,
    pub write_meta: bool,
    pub languages: Vec<Language>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            output_dir: PathBuf::from("."),
            language: None,
            strict_names: true,
            write_meta: true,
            languages: default_languages(),
        }
    }
}

impl Config {
    pub fn find_language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.code == code)
    }
}
