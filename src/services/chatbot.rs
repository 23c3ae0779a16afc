use std::sync::Arc;

use super::{GenerationError, TextGenerator};
use crate::persona::build_prompt;

/// Answers chat messages in the voice of the configured persona.
pub struct ChatService {
    persona: Arc<str>,
    generator: Arc<dyn TextGenerator>,
}

impl ChatService {
    pub fn new(persona: impl Into<Arc<str>>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            persona: persona.into(),
            generator,
        }
    }

    // One upstream call per message, no retry.
    pub async fn generate_reply(&self, user_msg: &str) -> Result<String, GenerationError> {
        let prompt = build_prompt(&self.persona, user_msg);
        self.generator.generate(&prompt).await
    }
}
