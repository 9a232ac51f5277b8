//! Translation dictionaries (`client.json`, `server.json`).
//!
//! A dictionary is a flat object mapping template keys to translated strings.
//! Keys are kept exactly as decoded.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::DictionaryError;
use crate::merge::Replacements;
use crate::utils::read_text;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn from_json_str(content: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(content).map_err(|e| DictionaryError::Malformed(e.to_string()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, DictionaryError> {
        // An empty YAML document decodes to null rather than a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| DictionaryError::Malformed(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Replacements for Dictionary {
    fn replacement(&self, key: &str) -> Option<&str> {
        self.get(key)
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Load a dictionary file, choosing the decoder by extension.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, DictionaryError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let decode: fn(&str) -> Result<Dictionary, DictionaryError> = match ext.as_str() {
        "json" => Dictionary::from_json_str,
        "yaml" | "yml" => Dictionary::from_yaml_str,
        _ => {
            return Err(DictionaryError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: ext,
            })
        }
    };

    let (content, encoding) = read_text(path)
        .map_err(|source| DictionaryError::Io { path: path.to_path_buf(), source })?;

    let dictionary = decode(&content)?;
    tracing::debug!(
        "loaded {} dictionary entries from {} ({})",
        dictionary.len(),
        path.display(),
        encoding
    );
    Ok(dictionary)
}
