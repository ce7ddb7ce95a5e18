//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-red-700 rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-red-700 rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-red-700 rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Spinner shown inside buttons while a request runs.
#[component]
pub fn LoadingSpinner(#[prop(default = "w-5 h-5")] size: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"
            ></path>
        </svg>
    }
}

/// Assistant-side bubble shown while a reply is outstanding.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start message-appear">
            <div class="px-4 py-3 bg-slate-200 rounded-2xl rounded-tl-sm">
                <LoadingDots />
            </div>
        </div>
    }
}
