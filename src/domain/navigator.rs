use anyhow::Result;
use async_trait::async_trait;

/// Opens a catalog URL. Returns the resolved target that was opened.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, url: &str) -> Result<String>;
}
