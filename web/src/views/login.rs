use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::{use_navigate, use_query_map}};
use thaw::*;

use crate::db::entities::LoginData;
use crate::error::user_message;
use crate::server::login_user;
use crate::utils::auth::{safe_redirect, use_session};

const DEMO_ACCOUNTS: [(&str, &str, &str); 2] = [
    ("Client", "alex@example.com", "password123"),
    ("Admin", "admin@inkwell.studio", "admin123"),
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();
    let session = use_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled =
        Memo::new(move |_| email.get().trim().is_empty() || password.get().is_empty());

    let submit_login = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        error_message.set(None);

        let login_data = LoginData {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match login_user(login_data).await {
                Ok(logged_in) => {
                    let role = logged_in.role;
                    session.login(logged_in);
                    let destination = safe_redirect(query_map.get_untracked().get("redirect"), role);
                    navigate(&destination, Default::default());
                }
                Err(e) => {
                    leptos::logging::warn!("Login failed: {}", e);
                    error_message.set(Some(user_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Welcome Back"</h1>
                    <p>"Sign in to manage your appointments"</p>
                </div>

                <form on:submit={
                    let submit_login = submit_login.clone();
                    move |ev| {
                        ev.prevent_default();
                        submit_login();
                    }
                }>
                    <div class="auth-form-group">
                        <label class="auth-label">"Email"</label>
                        <Input
                            class="auth-input"
                            placeholder="you@example.com"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>

                    <div class="auth-form-group">
                        <label class="auth-label">"Password"</label>
                        <div class="auth-input-wrapper">
                            <Input
                                class="auth-input"
                                placeholder="Password"
                                input_type=Signal::derive(move || if password_visible.get() { InputType::Text } else { InputType::Password })
                                value=password
                            />
                            <button
                                type="button"
                                class="auth-password-toggle"
                                on:click=move |_| password_visible.update(|visible| *visible = !*visible)
                            >
                                {move || if password_visible.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <div class="auth-form-row">
                        <A href="/forgot-password" attr:class="auth-link">"Forgot password?"</A>
                    </div>

                    {move || error_message.get().map(|msg| view! {
                        <div class="auth-error-message">{msg}</div>
                    })}

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        loading=Signal::from(loading)
                        disabled=Signal::from(is_button_disabled)
                    >
                        "Sign In"
                    </Button>
                </form>

                <div class="auth-demo">
                    <p class="auth-demo__title">"Demo accounts"</p>
                    {DEMO_ACCOUNTS.iter().map(|(label, demo_email, demo_password)| {
                        let shown_email = demo_email.to_string();
                        let demo_email = demo_email.to_string();
                        let demo_password = demo_password.to_string();
                        view! {
                            <button
                                type="button"
                                class="auth-demo__account"
                                on:click=move |_| {
                                    email.set(demo_email.clone());
                                    password.set(demo_password.clone());
                                }
                            >
                                <strong>{*label}</strong>
                                " · "
                                {shown_email}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
