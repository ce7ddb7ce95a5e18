//! Navigation rail

use crate::api;
use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use su_rag::auth::{nav_items, Route};

/// Navigation links, "New Chat" and "Logout".
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let items = nav_items(state.is_admin());

    let new_chat = {
        let state = state.clone();
        let navigate = navigate.clone();
        move |_| {
            api::create_chat(state.clone());
            navigate(Route::Chat.path(), Default::default());
        }
    };

    let logout = move |_| {
        state.sign_out();
        navigate(Route::Login.path(), Default::default());
    };

    view! {
        <aside class="w-20 shrink-0 flex flex-col items-center gap-2 py-4 bg-red-800 text-white">
            <button on:click=new_chat title="New Chat" class="sidebar-btn mb-4">"+"</button>

            {items
                .into_iter()
                .map(|item| {
                    let active = move || pathname.get() == item.href;
                    view! {
                        <a
                            href=item.href
                            class=move || {
                                if active() { "sidebar-link sidebar-link-active" } else { "sidebar-link" }
                            }
                        >
                            {item.label}
                        </a>
                    }
                })
                .collect_view()}

            <div class="flex-1"></div>
            <button on:click=logout title="Logout" class="sidebar-btn">"Logout"</button>
        </aside>
    }
}
