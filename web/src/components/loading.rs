use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(
    message: Option<String>,
    /// Smaller spinner for use inside cards and panels.
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let size = if compact { SpinnerSize::Small } else { SpinnerSize::Large };
    view! {
        <div class=if compact { "loading-container loading-container--compact" } else { "loading-container" }>
            <Spinner size=size />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading, please wait...".to_string())}
            </p>
        </div>
    }
}
