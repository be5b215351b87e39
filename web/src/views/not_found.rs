use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page with a way back into the site
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found__card">
                <div class="not-found__code">"404"</div>
                <h1>"Page Not Found"</h1>
                <p>"Looks like this page got lost in the ink! It doesn't exist or may have been moved."</p>

                <div class="not-found__actions">
                    <button
                        class="btn btn-primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/", Default::default())
                        }
                    >
                        "🏠 Go Home"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/artists", Default::default())
                        }
                    >
                        "🎨 Browse Artists"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/book", Default::default())
                        }
                    >
                        "📅 Book a Session"
                    </button>
                </div>

                <p class="not-found__help">
                    "Still lost? "
                    <a href="mailto:hello@inkwell.studio">"Drop us a line"</a>
                    " | "
                    <button
                        class="btn btn-link"
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Ok(history) = window.history() {
                                    let _ = history.back();
                                }
                            }
                        }
                    >
                        "⬅️ Go Back"
                    </button>
                </p>
            </div>
        </div>
    }
}
