use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::error::user_message;
use crate::server::request_password_reset;
use crate::state::validation::validate_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let field_error = RwSignal::new(Option::<String>::None);
    let sent_to = RwSignal::new(Option::<String>::None);

    let reset_action = Action::new(|email: &String| {
        let email = email.clone();
        async move { request_password_reset(email.clone()).await.map(|_| email) }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(address) => sent_to.set(Some(address)),
                Err(e) => field_error.set(Some(user_message(&e))),
            }
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked().trim().to_string();
        match validate_email(&value) {
            Ok(()) => {
                field_error.set(None);
                reset_action.dispatch(value);
            }
            Err(message) => field_error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <Show
                    when=move || sent_to.get().is_some()
                    fallback=move || view! {
                        <div class="auth-header">
                            <h1>"Reset your password"</h1>
                            <p>"Enter the email you signed up with and we'll send you a reset link."</p>
                        </div>

                        <form on:submit=submit>
                            <div class="auth-form-group">
                                <label class="auth-label">"Email"</label>
                                <Input
                                    class="auth-input"
                                    placeholder="you@example.com"
                                    input_type=InputType::Email
                                    value=email
                                />
                                {move || field_error.get().map(|msg| view! {
                                    <div class="field-error">{msg}</div>
                                })}
                            </div>

                            <Button
                                class="auth-submit-btn"
                                button_type=ButtonType::Submit
                                appearance=ButtonAppearance::Primary
                                loading=Signal::derive(move || reset_action.pending().get())
                            >
                                "Send reset link"
                            </Button>
                        </form>
                    }
                >
                    <div class="auth-success">
                        <div class="auth-success-icon">"✉"</div>
                        <h1>"Check your inbox"</h1>
                        <p>
                            "If an account exists for "
                            <strong>{move || sent_to.get().unwrap_or_default()}</strong>
                            ", you'll receive a link to reset your password in the next few minutes."
                        </p>
                        <button
                            class="btn btn-link"
                            on:click=move |_| {
                                sent_to.set(None);
                                email.set(String::new());
                            }
                        >
                            "Use a different email"
                        </button>
                    </div>
                </Show>

                <div class="auth-footer">
                    <A href="/login">"← Back to login"</A>
                </div>
            </div>
        </div>
    }
}
