//! Wire DTOs for the two backend exchanges.
//!
//! The backend response shapes are not contractually guaranteed, so
//! both reply types keep unrecognized fields in a flattened `extra`
//! map and reproduce them on re-serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST {origin}/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response of `POST {origin}/chat`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatReply {
    /// The reply text, if present and non-empty. An empty string is
    /// treated the same as a missing field.
    pub fn reply_text(&self) -> Option<&str> {
        self.reply.as_deref().filter(|s| !s.is_empty())
    }
}

/// Response of `POST {origin}/upload-file`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UploadResult {
    pub fn is_accepted(&self) -> bool {
        self.ok == Some(true)
    }

    /// Raw response body as shown to the user when the upload is
    /// rejected. Unrecognized fields are included.
    pub fn to_raw_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_body() {
        let dto = ChatRequest {
            message: "hola".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"message":"hola"}"#
        );
    }

    #[test]
    fn test_chat_reply_with_reply() {
        let data: ChatReply = serde_json::from_str(r#"{"reply":"X"}"#).unwrap();
        assert_eq!(data.reply_text(), Some("X"));
    }

    #[test]
    fn test_chat_reply_missing_or_empty() {
        let data: ChatReply = serde_json::from_str("{}").unwrap();
        assert_eq!(data.reply_text(), None);

        let data: ChatReply = serde_json::from_str(r#"{"reply":""}"#).unwrap();
        assert_eq!(data.reply_text(), None);
    }

    #[test]
    fn test_chat_reply_keeps_unknown_fields() {
        let data: ChatReply = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(data.reply_text(), None);
        assert_eq!(data.extra["error"], "boom");
    }

    #[test]
    fn test_upload_result_tolerates_missing_fields() {
        let data: UploadResult = serde_json::from_str("{}").unwrap();
        assert!(!data.is_accepted());
        assert_eq!(data.filename, None);
    }

    #[test]
    fn test_upload_result_raw_json_preserves_extra() {
        let data: UploadResult =
            serde_json::from_str(r#"{"ok":false,"error":"too large"}"#).unwrap();
        let raw = data.to_raw_json();
        assert!(raw.contains(r#""ok":false"#));
        assert!(raw.contains(r#""error":"too large""#));
        // Absent optional fields are not invented on re-serialization.
        assert!(!raw.contains("filename"));
    }
}
