//! Conversation UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions (transport adapter)
//! - view_model.rs: ConversationVm with RwSignals
//! - view.rs: Main component ConversationView

mod model;
mod view;
mod view_model;

pub use view::ConversationView;
pub use view_model::ConversationVm;
