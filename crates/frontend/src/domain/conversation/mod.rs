pub mod ui;

pub use ui::ConversationView;
