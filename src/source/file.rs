use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;
use crate::source::CardSource;

/// Local dataset file (the bundled `cards.json`)
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl CardSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("reading dataset from {}", self.display);
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(bytes)
    }

    fn name(&self) -> &str {
        "file"
    }

    fn location(&self) -> &str {
        &self.display
    }
}
