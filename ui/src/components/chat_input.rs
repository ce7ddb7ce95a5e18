//! Chat input component

use leptos::prelude::*;

/// Message box with Enter to send and Shift+Enter for a newline.
#[component]
pub fn ChatInput(
    /// Called with the text as typed; blank input is never sent
    on_send: impl Fn(String) + Clone + 'static,
    /// False while no chat is open
    #[prop(into)]
    enabled: Signal<bool>,
) -> impl IntoView {
    let value = RwSignal::new(String::new());

    let submit = move || {
        if !enabled.get_untracked() {
            return;
        }
        let text = value.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        value.set(String::new());
        on_send(text);
    };

    let on_keydown = {
        let submit = submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                submit();
            }
        }
    };

    view! {
        <div class="flex items-end gap-3 p-4 border-t border-slate-300 bg-white">
            <textarea
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=on_keydown
                placeholder="Type your message…"
                disabled=move || !enabled.get()
                rows="1"
                class="flex-1 px-4 py-3 border border-slate-300 rounded-xl resize-none
                       focus:outline-none focus:ring-2 focus:ring-red-700
                       disabled:opacity-50 disabled:cursor-not-allowed"
                style="max-height: 200px;"
            ></textarea>

            <button
                aria-label="Send message"
                on:click=move |_| submit()
                disabled=move || !enabled.get() || value.get().trim().is_empty()
                class="p-3 bg-red-700 hover:bg-red-800 disabled:bg-slate-400
                       disabled:cursor-not-allowed rounded-xl transition-colors"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="w-5 h-5 text-white"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </div>
    }
}
