use crate::backend::types::ChatRequest;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for chat backends
/// A REST service, a completion endpoint or a test double all answer with plain text
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one message with its history and return the assistant's text
    async fn complete(&self, request: &ChatRequest) -> Result<String>;

    /// Get the name of the backend
    fn backend_name(&self) -> &'static str;
}
