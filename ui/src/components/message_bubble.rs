//! Chat message bubble

use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};
use su_rag::types::Message;

/// Render assistant markdown to HTML.
fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// One message. User text is shown as typed; assistant text as markdown.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let is_user = message.is_user();

    let body = if is_user {
        view! { <div class="whitespace-pre-wrap break-words">{message.text}</div> }.into_any()
    } else {
        view! { <div class="markdown break-words" inner_html=render_markdown(&message.text)></div> }
            .into_any()
    };

    view! {
        <div class=format!(
            "flex message-appear {}",
            if is_user { "justify-end" } else { "justify-start" }
        )>
            <div class=format!(
                "px-4 py-3 rounded-2xl max-w-[75%] {}",
                if is_user {
                    "bg-red-700 text-white rounded-tr-sm"
                } else {
                    "bg-slate-200 text-slate-900 rounded-tl-sm"
                }
            )>
                {body}
            </div>
        </div>
    }
}
