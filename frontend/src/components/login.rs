use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::validation;
use studere_shared::{LoginRequest, RegisterRequest};
use tracing::warn;

use crate::api::use_api;
use crate::auth::{login, register, use_auth};
use crate::components::feedback::ErrorAlert;
use crate::components::icons::BookOpen;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();

    let (mode, set_mode) = signal(Mode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let session_expired = move || auth.state.with(|s| s.session_expired);

    let switch_mode = move |next: Mode| {
        set_mode.set(next);
        set_error_msg.set(None);
        set_notice.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let current_mode = mode.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();

        let checked = match current_mode {
            Mode::Login => validation::check(&LoginRequest {
                email: email.clone(),
                password: password.clone(),
            }),
            Mode::Register => validation::check(&RegisterRequest {
                email: email.clone(),
                password: password.clone(),
            }),
        };
        if let Err(msg) = checked {
            set_error_msg.set(Some(msg));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);
        set_notice.set(None);

        let client = api.client();
        spawn_local(async move {
            match current_mode {
                Mode::Login => {
                    // 成功后路由服务会自动跳转到仪表盘
                    if let Err(e) = login(&auth, &client, LoginRequest { email, password }).await {
                        warn!(error = %e, "login failed");
                        set_error_msg.set(Some(match e.status() {
                            Some(400) | Some(401) => "Invalid email or password.".to_string(),
                            _ => e.user_message(),
                        }));
                    }
                }
                Mode::Register => match register(&client, RegisterRequest { email, password }).await {
                    Ok(()) => {
                        set_password.set(String::new());
                        set_mode.set(Mode::Login);
                        set_notice.set(Some("Account created. You can log in now.".to_string()));
                    }
                    Err(e) => {
                        warn!(error = %e, "registration failed");
                        set_error_msg.set(Some(e.user_message()));
                    }
                },
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <BookOpen attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Studere"</h1>
                        <p class="text-base-content/70">
                            {move || match mode.get() {
                                Mode::Login => "Log in to manage your studies",
                                Mode::Register => "Create a new account",
                            }}
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || session_expired() && mode.get() == Mode::Login>
                            <div role="alert" class="alert alert-warning text-sm py-2">
                                <span>"Your session has expired. Please log in again."</span>
                            </div>
                        </Show>
                        <Show when=move || notice.get().is_some()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>{move || notice.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <ErrorAlert message=error_msg />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
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
                                {move || match (is_submitting.get(), mode.get()) {
                                    (true, _) => view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any(),
                                    (false, Mode::Login) => "Login".into_any(),
                                    (false, Mode::Register) => "Register".into_any(),
                                }}
                            </button>
                        </div>
                        <div class="text-center text-sm">
                            {move || match mode.get() {
                                Mode::Login => view! {
                                    "No account yet? "
                                    <a class="link link-primary" on:click=move |_| switch_mode(Mode::Register)>"Register"</a>
                                }.into_any(),
                                Mode::Register => view! {
                                    "Already registered? "
                                    <a class="link link-primary" on:click=move |_| switch_mode(Mode::Login)>"Back to login"</a>
                                }.into_any(),
                            }}
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
