// src/state.rs
use std::sync::Arc;

use crate::services::{TextGenerator, chatbot::ChatService};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub chat: ChatService,
}

impl AppState {
    pub fn new(persona: impl Into<Arc<str>>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            chat: ChatService::new(persona, generator),
        }
    }
}
