use dimfolio::{AuthMode, Credentials};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_services;
use crate::web::router::use_router;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let services = use_services();
    let router = use_router();
    let secret_mode = services.auth_mode == AuthMode::Secret;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password.get().is_empty() || (!secret_mode && email.get().is_empty()) {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        let credentials = if secret_mode {
            Credentials::Secret(password.get())
        } else {
            Credentials::Password {
                email: email.get(),
                password: password.get(),
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let auth = services.auth();
        spawn_local(async move {
            match auth.login(credentials).await {
                Ok(true) => router.navigate(&dimfolio::AppRoute::auth_success_redirect().to_path()),
                Ok(false) => set_error_msg.set(Some("Incorrect secret.".to_string())),
                Err(e) => set_error_msg.set(Some(e.message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Admin"</h1>
                    <p class="text-base-content/70">"Sign in to edit the portfolio"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show when=move || !secret_mode>
                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="admin@example.com"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                />
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">
                                    {if secret_mode { "Admin Secret" } else { "Password" }}
                                </span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
