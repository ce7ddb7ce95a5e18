//! Chat list panel

use crate::api;
use crate::state::AppState;
use leptos::prelude::*;
use su_rag::types::ChatMeta;

#[component]
pub fn ChatList() -> impl IntoView {
    let state = expect_context::<AppState>();
    let chats = state.chats;

    let visible = move || {
        chats.with(|list| list.filtered().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <section class="w-80 shrink-0 flex flex-col border-r border-slate-300 bg-white text-slate-900">
            <header class="flex items-center justify-between px-4 py-3 border-b border-slate-300">
                <h6 class="text-lg font-medium">"Chats"</h6>
                <button
                    title="Show favorites only"
                    class=move || {
                        if chats.with(|l| l.favorites_only()) { "text-amber-500" } else { "text-slate-400" }
                    }
                    on:click=move |_| chats.update(|l| l.toggle_favorites_only())
                >
                    "★"
                </button>
            </header>

            <ul class="flex-1 overflow-y-auto">
                <For each=visible key=|chat| (chat.id.clone(), chat.favorite) let:chat>
                    <ChatRow chat=chat state=state.clone() />
                </For>
            </ul>
        </section>
    }
}

#[component]
fn ChatRow(chat: ChatMeta, state: AppState) -> impl IntoView {
    let id = chat.id.clone();
    let window = state.window;
    let is_active = {
        let id = id.clone();
        move || window.with(|w| w.active() == Some(id.as_str()))
    };

    let title = if chat.user_name.trim().is_empty() {
        "Unnamed Chat".to_string()
    } else {
        chat.user_name.clone()
    };
    let date = chat
        .created_at_utc()
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    let on_select = {
        let (state, id) = (state.clone(), id.clone());
        move |_| api::select_chat(state.clone(), id.clone())
    };
    let on_favorite = {
        let (state, id, favorite) = (state.clone(), id.clone(), chat.favorite);
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            api::toggle_favorite(state.clone(), id.clone(), !favorite);
        }
    };
    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        api::delete_chat(state.clone(), id.clone());
    };

    view! {
        <li
            on:click=on_select
            class=move || format!(
                "flex items-center gap-3 px-4 py-3 cursor-pointer hover:bg-slate-100 {}",
                if is_active() { "bg-slate-100" } else { "" }
            )
        >
            <span class="w-9 h-9 rounded-full bg-red-700 text-white flex items-center justify-center font-medium">
                {chat.initial().to_string()}
            </span>
            <div class="flex-1 min-w-0">
                <p class="truncate font-medium">{title}</p>
                <p class="text-xs text-slate-500">{date}</p>
            </div>
            <button
                title="Favorite"
                class=if chat.favorite { "text-amber-500" } else { "text-slate-400" }
                on:click=on_favorite
            >
                {if chat.favorite { "★" } else { "☆" }}
            </button>
            <button title="Delete" class="text-slate-400 hover:text-red-700" on:click=on_delete>
                "✕"
            </button>
        </li>
    }
}
