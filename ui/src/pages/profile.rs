//! Profile page

use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use su_rag::account::ProfileEditor;
use su_rag::api::ChatBackend;
use su_rag::auth::Route;
use su_rag::types::UserProfile;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let editor = RwSignal::new(ProfileEditor::new());

    {
        let state = state.clone();
        spawn_local(async move {
            let result = match state.session.bearer() {
                Ok(token) => state.backend().profile(&token).await,
                Err(e) => Err(e),
            };
            editor.update(|ed| {
                ed.apply_loaded(result);
            });
        });
    }

    let on_save = move |_| {
        let Some(profile) = editor.try_update(|ed| ed.begin_save()).flatten() else {
            return;
        };
        let state = state.clone();
        spawn_local(async move {
            let result = match state.session.bearer() {
                Ok(token) => state.backend().update_profile(&token, &profile).await,
                Err(e) => Err(e),
            };
            editor.update(|ed| {
                ed.apply_saved(result);
            });
        });
    };

    let field = move |get: fn(&UserProfile) -> String| {
        move || editor.with(|ed| ed.profile().map(get).unwrap_or_default())
    };

    view! {
        <div class="max-w-xl mx-auto p-6 text-slate-900 bg-white min-h-screen">
            <button
                class="btn mb-4"
                on:click=move |_| navigate(Route::Chat.path(), Default::default())
            >
                "Back to Chat"
            </button>
            <h4 class="text-2xl font-semibold mb-4">"Profile"</h4>

            {move || editor.with(|ed| ed.error().map(str::to_string)).map(|err| view! {
                <p class="text-sm text-red-600 mb-4">{err}</p>
            })}

            <Show when=move || editor.with(|ed| ed.profile().is_some())>
                <div class="flex flex-col gap-4">
                    <label class="flex flex-col gap-1">
                        "Name"
                        <input
                            class="input"
                            prop:value=field(|p| p.name.clone())
                            on:input=move |ev| editor.update(|ed| ed.set_name(event_target_value(&ev)))
                        />
                    </label>
                    <label class="flex flex-col gap-1">
                        "Email"
                        <input class="input" disabled prop:value=field(|p| p.email.clone()) />
                    </label>
                    <label class="flex flex-col gap-1">
                        "Role"
                        <input class="input" disabled prop:value=field(|p| p.role.clone()) />
                    </label>
                    <label class="flex flex-col gap-1">
                        "Degree"
                        <input
                            class="input"
                            prop:value=field(|p| p.degree.clone().unwrap_or_default())
                            on:input=move |ev| editor.update(|ed| ed.set_degree(event_target_value(&ev)))
                        />
                    </label>
                    <label class="flex flex-col gap-1">
                        "Department"
                        <input
                            class="input"
                            prop:value=field(|p| p.department.clone().unwrap_or_default())
                            on:input=move |ev| editor.update(|ed| ed.set_department(event_target_value(&ev)))
                        />
                    </label>

                    <button
                        class="btn btn-primary"
                        disabled=move || editor.with(|ed| ed.is_saving())
                        on:click=on_save.clone()
                    >
                        {move || if editor.with(|ed| ed.is_saving()) { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
