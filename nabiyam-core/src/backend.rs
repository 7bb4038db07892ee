use crate::responder::Responder;
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can turn a user message into bot text.
///
/// The engine only talks to this trait, so front-ends and tests can swap
/// the keyword responder for a stub.
#[async_trait]
pub trait ReplyBackend: Send + Sync {
    async fn reply(&self, text: &str) -> Result<String>;
}

/// Backend over the static keyword [`Responder`].
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordBackend;

#[async_trait]
impl ReplyBackend for KeywordBackend {
    async fn reply(&self, text: &str) -> Result<String> {
        let category = Responder::classify(text);
        tracing::debug!("Classified message as {}", category);
        Ok(Responder::render(category))
    }
}
