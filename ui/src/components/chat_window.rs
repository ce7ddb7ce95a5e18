//! Active conversation pane

use crate::api;
use crate::components::{ChatInput, MessageBubble, TypingIndicator};
use crate::state::AppState;
use leptos::prelude::*;
use su_rag::types::ChatMeta;

#[component]
pub fn ChatWindow() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (window, chats) = (state.window, state.chats);

    let active_chat = move || {
        let id = window.with(|w| w.active().map(str::to_string))?;
        chats.with(|l| l.get(&id).cloned())
    };

    let on_send = {
        let state = state.clone();
        move |text: String| api::send_message(state.clone(), text)
    };
    let enabled = Signal::derive(move || window.with(|w| w.accepts_input()));

    view! {
        <section class="flex-1 flex flex-col min-w-0 bg-slate-50 text-slate-900">
            <Show
                when=move || window.with(|w| w.active().is_some())
                fallback=|| view! {
                    <div class="flex-1 flex flex-col items-center justify-center text-slate-500">
                        <h5 class="text-2xl mb-2">"Welcome to Seattle University RAG"</h5>
                        <p>"Select a chat or create a new one to start"</p>
                    </div>
                }
            >
                {
                    let state = state.clone();
                    move || active_chat().map(|chat| view! { <ChatHeader chat=chat state=state.clone() /> })
                }

                <div class="flex-1 overflow-y-auto p-4 flex flex-col gap-3">
                    {move || {
                        window
                            .with(|w| w.display_messages())
                            .into_iter()
                            .map(|message| view! { <MessageBubble message=message /> })
                            .collect_view()
                    }}
                    <Show when=move || window.with(|w| w.is_awaiting_reply())>
                        <TypingIndicator />
                    </Show>
                </div>

                <ChatInput on_send=on_send.clone() enabled=enabled />
            </Show>
        </section>
    }
}

#[component]
fn ChatHeader(chat: ChatMeta, state: AppState) -> impl IntoView {
    let name = if chat.user_name.trim().is_empty() {
        "Unknown User".to_string()
    } else {
        chat.user_name.clone()
    };
    let started = chat
        .created_at_utc()
        .map(|d| format!("Started on {}", d.format("%Y-%m-%d %H:%M")))
        .unwrap_or_default();
    let id = chat.id.clone();

    view! {
        <header class="flex items-center gap-3 px-4 py-3 bg-red-700 text-white">
            <span class="w-10 h-10 rounded-full bg-white text-red-700 flex items-center justify-center font-semibold">
                {chat.initial().to_string()}
            </span>
            <div class="flex-1 min-w-0">
                <p class="truncate font-semibold">{name}</p>
                <p class="text-xs opacity-80">{started}</p>
            </div>
            <button title="Delete" on:click=move |_| api::delete_chat(state.clone(), id.clone())>
                "✕"
            </button>
        </header>
    }
}
