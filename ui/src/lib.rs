//! SU-RAG Chat UI
//!
//! Browser front end for the Seattle University RAG assistant. The state
//! machines live in the `su-rag` crate; this crate renders them and talks to
//! the backend through `gloo-net`.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use pages::{chat::ChatPage, login::LoginPage, profile::ProfilePage, settings::SettingsPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppState::new());

    view! {
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <Routes fallback=|| view! { <Redirect path="/login" /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/chat") view=|| view! { <Protected><ChatPage /></Protected> } />
                    <Route path=path!("/chat/*any") view=|| view! { <Protected><ChatPage /></Protected> } />
                    <Route path=path!("/profile") view=|| view! { <Protected><ProfilePage /></Protected> } />
                    <Route path=path!("/settings") view=|| view! { <Protected><SettingsPage /></Protected> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Render `children` only while a token is held, otherwise go to login.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();
    let authenticated = state.authenticated;

    view! {
        <Show
            when=move || authenticated.get()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
