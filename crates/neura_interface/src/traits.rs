//! Trait definitions for text-generation backends.

use crate::GenerateRequest;
use async_trait::async_trait;
use neura_error::NeuraResult;
use std::sync::Arc;

/// A backend that turns a prompt into plain text.
///
/// Implementations return the model output already normalized to trimmed,
/// non-empty text; provider failures are reported as errors, never retried here.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `req`.
    async fn generate(&self, req: &GenerateRequest) -> NeuraResult<String>;

    /// Provider name (e.g., "pollinations", "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T> TextGenerator for Arc<T>
where
    T: TextGenerator + ?Sized,
{
    async fn generate(&self, req: &GenerateRequest) -> NeuraResult<String> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
