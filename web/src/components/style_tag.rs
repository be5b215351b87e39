use leptos::prelude::*;

#[component]
pub fn StyleTag(
    #[prop(into)] name: String,
    #[prop(optional)] active: bool,
) -> impl IntoView {
    view! {
        <span class=if active { "style-tag style-tag--active" } else { "style-tag" }>
            {name}
        </span>
    }
}
