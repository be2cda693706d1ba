//! Conversation - View Component

use super::model::{send_chat_message, upload_file};
use super::view_model::ConversationVm;
use contracts::chat::{normalize_input, ChatRole};
use leptos::prelude::*;

fn role_class(role: ChatRole) -> String {
    format!("msg_{}", role.as_str())
}

#[component]
#[allow(non_snake_case)]
pub fn ConversationView() -> impl IntoView {
    let vm = ConversationVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view whenever the list grows
    Effect::new(move |_| {
        vm.session.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    // Send action: reject empty input silently, append the user
    // message before the request goes out, then resolve the outcome.
    let handle_send = Callback::new(move |_: ()| {
        let Some(text) = normalize_input(&vm.draft.get()) else {
            return;
        };

        vm.session.update(|s| s.push_user(text.clone()));
        vm.draft.set(String::new());
        vm.is_loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            match send_chat_message(&text).await {
                Ok(reply) => {
                    if reply.reply_text().is_some() {
                        vm.session.update(|s| {
                            s.apply_chat_reply(&reply);
                        });
                    } else {
                        // Server answered without a usable reply; the
                        // conversation is left as-is.
                        log::warn!(
                            "Server error: {}",
                            serde_json::to_string(&reply).unwrap_or_default()
                        );
                    }
                }
                Err(e) => {
                    vm.session.update(|s| s.apply_chat_failure());
                    log::error!("Network error: {e}");
                }
            }
            vm.is_loading.set(false);
        });
    });

    // Upload action: one file per selection; the picker value is reset
    // after every attempt so the same file can be re-selected.
    let handle_file_change = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };
        let local_name = file.name();

        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match upload_file(file).await {
                Ok(result) => {
                    vm.session.update(|s| s.apply_upload_result(&result, &local_name));
                }
                Err(e) => {
                    vm.session.update(|s| s.apply_upload_failure());
                    log::error!("Upload network error: {e}");
                }
            }
            vm.is_loading.set(false);
            input.set_value("");
        });
    };

    view! {
        <section class="chat">
            <div class="app-container">
                <h1>"Chat bot"</h1>
                <div class="chat-window" node_ref=messages_container_ref>
                    {move || {
                        vm.session
                            .with(|s| s.messages.is_empty())
                            .then(|| {
                                view! {
                                    <div class="msg_system">"Hi, how may I assist you today?"</div>
                                }
                            })
                    }}
                    <For
                        each=move || {
                            vm.session.get().messages.into_iter().enumerate().collect::<Vec<_>>()
                        }
                        key=|(i, _)| *i
                        let:entry
                    >
                        {{
                            let (_, msg) = entry;
                            view! {
                                <div class=role_class(msg.role)>
                                    <span>{msg.text.clone()}</span>
                                </div>
                            }
                        }}
                    </For>
                </div>

                <div class="composer">
                    <input
                        class="input-chat"
                        placeholder="Try asking me anything..."
                        prop:value=move || vm.draft.get()
                        disabled=move || vm.is_loading.get()
                        on:input=move |ev| vm.draft.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                handle_send.run(());
                            }
                        }
                    />
                    <label class="upload-file-button">
                        <span>
                            "+"
                            <input
                                class="input-file"
                                type="file"
                                disabled=move || vm.is_loading.get()
                                on:change=handle_file_change
                            />
                        </span>
                    </label>
                    <button
                        disabled=move || vm.is_loading.get()
                        on:click=move |_| handle_send.run(())
                    >
                        <span>{move || if vm.is_loading.get() { "..." } else { ">" }}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}
