use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(
    message: Option<String>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {title.map(|title| view! { <strong class="message-title">{title}" "</strong> })}
            {message.unwrap_or_else(|| "Something went wrong. Please try again.".to_string())}
        </MessageBar>
    }
}

#[component]
pub fn SuccessView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Success>
            {message}
        </MessageBar>
    }
}
