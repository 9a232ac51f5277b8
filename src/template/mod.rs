//! Template sources.
//!
//! A template is either supplied by the user or taken from the bundled
//! fallback directory (`<template_dir>/<scope>.lang`).

use std::path::{Path, PathBuf};

use crate::error::TemplateError;
use crate::utils::read_text;

pub trait TemplateSource {
    fn load(&self) -> Result<String, TemplateError>;

    /// Human-readable origin, for logs and summaries.
    fn describe(&self) -> String;
}

/// A template file chosen by the user.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    pub path: PathBuf,
}

impl TemplateSource for FileTemplate {
    fn load(&self) -> Result<String, TemplateError> {
        read_template(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The default template shipped for a scope.
#[derive(Debug, Clone)]
pub struct FallbackTemplate {
    pub dir: PathBuf,
    pub file_name: &'static str,
}

impl FallbackTemplate {
    pub fn path(&self) -> PathBuf {
        self.dir.join(self.file_name)
    }
}

impl TemplateSource for FallbackTemplate {
    fn load(&self) -> Result<String, TemplateError> {
        let path = self.path();
        tracing::info!("no template supplied, using fallback {}", path.display());
        read_template(&path)
    }

    fn describe(&self) -> String {
        format!("{} (fallback)", self.path().display())
    }
}

/// Pick the user template when given, the fallback otherwise.
pub fn resolve(
    user: Option<&Path>,
    fallback_dir: &Path,
    fallback_name: &'static str,
) -> Box<dyn TemplateSource> {
    match user {
        Some(path) => Box::new(FileTemplate { path: path.to_path_buf() }),
        None => Box::new(FallbackTemplate {
            dir: fallback_dir.to_path_buf(),
            file_name: fallback_name,
        }),
    }
}

fn read_template(path: &Path) -> Result<String, TemplateError> {
    let (content, _) = read_text(path)
        .map_err(|source| TemplateError::Unavailable { path: path.to_path_buf(), source })?;
    Ok(content)
}
