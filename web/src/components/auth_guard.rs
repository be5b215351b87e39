use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::db::entities::UserRole;
use crate::utils::auth::use_session;

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-loading-title">"🔐 Verifying access..."</div>
                <div class="auth-guard-loading-subtitle">
                    "Please wait while we check your session"
                </div>
            </div>
        </div>
    }
}

/// Shown in place of a protected page; sends the visitor to login and back.
#[component]
pub fn LoginPrompt(role: UserRole) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    let (title, text) = match role {
        UserRole::Client => (
            "Sign in to see your appointments",
            "Log in with your client account to view, track and cancel your bookings.",
        ),
        UserRole::Admin => (
            "Staff area",
            "This section is for studio administrators. Please log in with an admin account.",
        ),
    };

    let go_to_login = move |_| {
        let path = location.pathname.get_untracked();
        navigate(
            &format!("/login?redirect={}", urlencoding::encode(&path)),
            Default::default(),
        );
    };

    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-denied-title">{title}</div>
                <p class="auth-guard-denied-subtitle">{text}</p>
                <button class="btn btn-primary" on:click=go_to_login>"🔐 Log in"</button>
                <a href="/" class="auth-guard-home-link">"Back to home"</a>
            </div>
        </div>
    }
}

/// Renders `children` only for a session with `role`.
#[component]
pub fn AuthGuard(role: UserRole, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.loaded.get()
            fallback=move || view! { <LoadingState/> }
        >
            <Show
                when=move || session.has_role(role)
                fallback=move || view! { <LoginPrompt role=role/> }
                clone:children
            >
                {children()}
            </Show>
        </Show>
    }
}
