pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use file::FileSource;
pub use http::HttpSource;

/// Trait for dataset byte sources (bundled file, remote URL, ...)
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Fetch the raw dataset bytes
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Get source name for logging
    fn name(&self) -> &str;

    /// Human-readable location (path or URL)
    fn location(&self) -> &str;
}
