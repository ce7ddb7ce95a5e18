//! Settings page: account summary and document upload

use crate::api;
use crate::components::LoadingSpinner;
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use su_rag::account::UploadForm;
use su_rag::api::ChatBackend;
use su_rag::auth::Route;
use su_rag::types::UserProfile;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let profile = RwSignal::new(Option::<UserProfile>::None);
    let upload = RwSignal::new(UploadForm::new());

    {
        let state = state.clone();
        spawn_local(async move {
            let result = match state.session.bearer() {
                Ok(token) => state.backend().profile(&token).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(p) => profile.set(Some(p)),
                Err(e) => tracing::warn!("Failed to load profile: {}", e),
            }
        });
    }

    let on_files = move |ev: web_sys::Event| {
        let Some(files) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
        else {
            return;
        };
        spawn_local(async move {
            match api::read_files(files).await {
                Ok(documents) => upload.update(|f| f.select_files(documents)),
                Err(e) => tracing::warn!("Failed to read selected files: {}", e),
            }
        });
    };

    let on_upload = move |_| {
        let Some(documents) = upload.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let state = state.clone();
        spawn_local(async move {
            let result = match state.session.bearer() {
                Ok(token) => state.backend().upload_documents(&token, &documents).await,
                Err(e) => Err(e),
            };
            upload.update(|f| {
                f.finish(result);
            });
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-8 text-slate-900 bg-white min-h-screen">
            <div class="flex items-center gap-4 mb-6">
                <button class="btn" on:click=move |_| navigate(Route::Chat.path(), Default::default())>
                    "←"
                </button>
                <h4 class="text-3xl">"Settings"</h4>
            </div>

            <div class="card p-6 mb-6">
                <h6 class="text-lg font-medium mb-2">"Profile Information"</h6>
                {move || profile.get().map(|p| {
                    let name = if p.name.trim().is_empty() { "Not specified".to_string() } else { p.name };
                    view! {
                        <p><strong>"Name: "</strong>{name}</p>
                        <p><strong>"Email: "</strong>{p.email}</p>
                        <p><strong>"Role: "</strong>{p.role}</p>
                    }
                })}
            </div>

            <div class="card p-6">
                <h6 class="text-lg font-medium mb-2">"Document Upload"</h6>
                <p class="text-sm text-slate-500 mb-4">
                    "Upload PDF documents to be processed and indexed. Documents will be associated with your profile details."
                </p>
                <label class="btn inline-block cursor-pointer mb-2">
                    "Select PDF Documents"
                    <input type="file" accept="application/pdf" multiple class="hidden" on:change=on_files />
                </label>
                <Show when=move || upload.with(|f| !f.files().is_empty())>
                    <p class="text-sm mt-1">
                        "Selected files: " {move || upload.with(|f| f.selected_names())}
                    </p>
                </Show>

                <button
                    class="btn btn-primary mt-4"
                    disabled=move || upload.with(|f| f.files().is_empty() || f.is_uploading())
                    on:click=on_upload
                >
                    {move || if upload.with(|f| f.is_uploading()) {
                        view! { <LoadingSpinner /> }.into_any()
                    } else {
                        "Upload Documents".into_any()
                    }}
                </button>

                {move || upload.with(|f| {
                    f.status().message().map(|text| (text.to_string(), f.status().is_error()))
                }).map(|(text, is_error)| view! {
                    <p class=if is_error { "alert alert-error mt-4" } else { "alert alert-success mt-4" }>
                        {text}
                    </p>
                })}
            </div>
        </div>
    }
}
