//! Interactive language selection for `meta.lang`.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::domain::Language;

const SKIP_LABEL: &str = "None (do not write meta.lang)";

/// Ask which language the converted files target. `None` skips `meta.lang`.
pub fn choose_language(languages: &[Language]) -> Result<Option<String>> {
    if languages.is_empty() {
        return Ok(None);
    }

    let items = menu_items(languages);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose target language")
        .default(0)
        .items(&items)
        .interact()?;

    Ok(languages.get(selection).map(|lang| lang.code.clone()))
}

fn menu_items(languages: &[Language]) -> Vec<String> {
    let mut items: Vec<String> = languages.iter().map(Language::label).collect();
    items.push(SKIP_LABEL.to_string());
    items
}
