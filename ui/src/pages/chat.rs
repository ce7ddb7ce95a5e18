//! Chat page: navigation, chat list, active conversation

use crate::api;
use crate::components::{ChatList, ChatWindow, Sidebar};
use crate::state::AppState;
use leptos::prelude::*;

#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Load chats once per mount
    api::load_chats(state);

    view! {
        <div class="h-screen flex">
            <Sidebar />
            <ChatList />
            <ChatWindow />
        </div>
    }
}
