//! Conversation - View Model

use contracts::chat::SessionState;
use leptos::prelude::*;

/// Signals owned by the conversation view for the lifetime of the UI
/// session. `is_loading` gates the input controls, so at most one
/// request is in flight at a time.
#[derive(Clone, Copy)]
pub struct ConversationVm {
    pub session: RwSignal<SessionState>,
    pub draft: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
}

impl ConversationVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::new()),
            draft: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
        }
    }
}

impl Default for ConversationVm {
    fn default() -> Self {
        Self::new()
    }
}
