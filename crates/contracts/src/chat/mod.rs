//! Conversation data contracts shared across the workspace.
//!
//! - message.rs: roles and session messages
//! - api.rs: wire DTOs for the chat and upload endpoints
//! - session.rs: pure session-state transitions

pub mod api;
pub mod message;
pub mod session;

pub use api::{ChatReply, ChatRequest, UploadResult};
pub use message::{ChatRole, Message};
pub use session::{normalize_input, SessionState};
