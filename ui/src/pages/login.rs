//! Combined login/signup page

use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use su_rag::account::{authenticate, AuthMode, LoginForm};
use su_rag::auth::Route;
use su_rag::types::SignupRole;

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::new());
    let is_loading = RwSignal::new(false);
    let is_signup = move || form.with(|f| f.mode == AuthMode::Signup);

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let Some(request) = form.try_update(|f| f.begin()) else {
            return;
        };
        let state = state.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            is_loading.set(true);
            let result = authenticate(&state.backend(), &request).await;
            is_loading.set(false);

            let signed_in = form
                .try_update(|f| f.finish(&state.session, result))
                .unwrap_or(false);
            if signed_in {
                state.authenticated.set(true);
                navigate(Route::Chat.path(), Default::default());
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-100 p-4">
            <div class="w-full max-w-md">
                <h2 class="text-center text-5xl font-bold text-slate-900 mb-4">"Seattle University"</h2>

                <div class="bg-white rounded-lg shadow-lg p-8">
                    <h1 class="text-center text-3xl text-slate-900 mb-6">
                        {move || form.with(|f| f.mode.title())}
                    </h1>

                    <form on:submit=on_submit class="flex flex-col gap-4">
                        <Show when=is_signup>
                            <input
                                type="text"
                                placeholder="Full Name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                class="input"
                            />
                        </Show>

                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            class="input"
                        />

                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            class="input"
                        />

                        <Show when=is_signup>
                            <select
                                class="input"
                                prop:value=move || form.with(|f| f.role.as_str())
                                on:change=move |ev| {
                                    let role = event_target_value(&ev)
                                        .parse::<SignupRole>()
                                        .unwrap_or_default();
                                    form.update(|f| f.role = role);
                                }
                            >
                                <option value="user">"User"</option>
                                <option value="admin">"Admin"</option>
                            </select>
                        </Show>

                        {move || form.with(|f| f.error().map(str::to_string)).map(|err| view! {
                            <p class="text-sm text-red-600">{err}</p>
                        })}

                        <button
                            type="submit"
                            disabled=move || is_loading.get()
                            class="btn btn-primary w-full"
                        >
                            {move || form.with(|f| f.mode.title())}
                        </button>
                    </form>

                    <p class="text-center text-sm text-slate-600 mt-4">
                        {move || form.with(|f| f.mode.switch_prompt())}
                        <a
                            href="#"
                            class="text-red-700 font-medium"
                            on:click=move |ev| {
                                ev.prevent_default();
                                form.update(|f| f.toggle_mode());
                            }
                        >
                            {move || form.with(|f| f.mode.toggled().title())}
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
