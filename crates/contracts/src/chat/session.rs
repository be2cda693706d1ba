//! Pure session-state transitions for the conversation view.
//!
//! The view owns one `SessionState` for the lifetime of the UI session
//! and mutates it only through these methods, so the interaction model
//! stays testable without a DOM.

use super::api::{ChatReply, UploadResult};
use super::message::Message;

/// Fixed text shown when the chat request cannot reach the server.
pub const CONNECT_ERROR_TEXT: &str = "could not connect to the server";

/// Fixed text shown when the upload request cannot reach the server.
pub const UPLOAD_NETWORK_ERROR_TEXT: &str = "Error de red al subir archivo";

/// Trim raw input; whitespace-only input is rejected.
pub fn normalize_input(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Conversation state for one UI session. The message list only
/// grows; nothing is reordered or deleted. Not persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub messages: Vec<Message>,
    pub uploaded_files: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the user's message. Called before the request is
    /// issued, so the user message is always visible before any
    /// response-derived message.
    pub fn push_user(&mut self, text: String) {
        self.messages.push(Message::user(text));
    }

    /// A non-empty reply appends a bot message; a missing or empty
    /// reply changes nothing (the caller logs the anomaly). Returns
    /// whether a message was appended.
    pub fn apply_chat_reply(&mut self, reply: &ChatReply) -> bool {
        match reply.reply_text() {
            Some(text) => {
                self.messages.push(Message::bot(text));
                true
            }
            None => false,
        }
    }

    pub fn apply_chat_failure(&mut self) {
        self.messages.push(Message::bot(CONNECT_ERROR_TEXT));
    }

    /// An accepted upload records the server-reported filename
    /// (falling back to the local file name) and announces it; a
    /// rejected one surfaces the raw response body as a system
    /// message and leaves the uploaded-files list untouched.
    pub fn apply_upload_result(&mut self, result: &UploadResult, local_name: &str) {
        if result.is_accepted() {
            let filename = result
                .filename
                .clone()
                .unwrap_or_else(|| local_name.to_string());
            self.uploaded_files.push(filename.clone());
            self.messages
                .push(Message::system(format!("Archivo cargado: {}", filename)));
        } else {
            self.messages.push(Message::system(format!(
                "Error al subir: {}",
                result.to_raw_json()
            )));
        }
    }

    pub fn apply_upload_failure(&mut self) {
        self.messages.push(Message::system(UPLOAD_NETWORK_ERROR_TEXT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatRole;

    fn reply(json: &str) -> ChatReply {
        serde_json::from_str(json).unwrap()
    }

    fn upload(json: &str) -> UploadResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("  hola  "), Some("hola".to_string()));
        assert_eq!(normalize_input(""), None);
        assert_eq!(normalize_input("   \t\n"), None);
    }

    #[test]
    fn test_user_message_precedes_bot_reply() {
        let mut state = SessionState::new();
        state.push_user("hi".to_string());
        assert!(state.apply_chat_reply(&reply(r#"{"reply":"X"}"#)));

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0], Message::user("hi"));
        assert_eq!(state.messages[1], Message::bot("X"));
    }

    #[test]
    fn test_missing_reply_appends_nothing() {
        let mut state = SessionState::new();
        state.push_user("hi".to_string());
        assert!(!state.apply_chat_reply(&reply("{}")));
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_empty_reply_appends_nothing() {
        let mut state = SessionState::new();
        assert!(!state.apply_chat_reply(&reply(r#"{"reply":""}"#)));
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_chat_failure_appends_fixed_text() {
        let mut state = SessionState::new();
        state.push_user("hi".to_string());
        state.apply_chat_failure();

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1], Message::bot(CONNECT_ERROR_TEXT));
    }

    #[test]
    fn test_accepted_upload_records_server_filename() {
        let mut state = SessionState::new();
        state.apply_upload_result(&upload(r#"{"ok":true,"filename":"a.txt"}"#), "local.txt");

        assert_eq!(state.uploaded_files, vec!["a.txt".to_string()]);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, ChatRole::System);
        assert_eq!(state.messages[0].text, "Archivo cargado: a.txt");
    }

    #[test]
    fn test_accepted_upload_falls_back_to_local_name() {
        let mut state = SessionState::new();
        state.apply_upload_result(&upload(r#"{"ok":true}"#), "local.txt");

        assert_eq!(state.uploaded_files, vec!["local.txt".to_string()]);
        assert_eq!(state.messages[0].text, "Archivo cargado: local.txt");
    }

    #[test]
    fn test_rejected_upload_surfaces_raw_response() {
        let mut state = SessionState::new();
        state.apply_upload_result(&upload(r#"{"ok":false,"error":"too large"}"#), "local.txt");

        assert!(state.uploaded_files.is_empty());
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, ChatRole::System);
        assert!(state.messages[0].text.starts_with("Error al subir: "));
        assert!(state.messages[0].text.contains(r#""ok":false"#));
        assert!(state.messages[0].text.contains("too large"));
    }

    #[test]
    fn test_upload_failure_appends_fixed_text() {
        let mut state = SessionState::new();
        state.apply_upload_failure();
        assert_eq!(state.messages[0], Message::system(UPLOAD_NETWORK_ERROR_TEXT));
    }

    #[test]
    fn test_messages_only_grow() {
        let mut state = SessionState::new();
        state.push_user("one".to_string());
        state.apply_chat_reply(&reply(r#"{"reply":"two"}"#));
        state.push_user("three".to_string());
        state.apply_chat_failure();

        let texts: Vec<&str> = state.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three", CONNECT_ERROR_TEXT]);
    }
}
