//! Output sinks for merged files.

use std::path::PathBuf;

use crate::error::{ConvertError, ConvertResult};

/// Destination for named output files.
pub trait Sink {
    /// Persist `content` under `file_name`, returning where it went.
    fn write(&self, file_name: &str, content: &str) -> ConvertResult<PathBuf>;
}

/// Writes outputs into a directory, creating it when needed.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Sink for DirSink {
    fn write(&self, file_name: &str, content: &str) -> ConvertResult<PathBuf> {
        let path = self.dir.join(file_name);
        std::fs::create_dir_all(&self.dir)
            .map_err(|source| ConvertError::Write { path: self.dir.clone(), source })?;
        std::fs::write(&path, content)
            .map_err(|source| ConvertError::Write { path: path.clone(), source })?;
        tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}
