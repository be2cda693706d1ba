use crate::domain::conversation::ConversationView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConversationView />
    }
}
