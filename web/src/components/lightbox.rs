use leptos::prelude::*;

use crate::state::gallery::Lightbox;

#[derive(Clone, Debug, PartialEq)]
pub struct LightboxItem {
    pub image_url: String,
    pub title: String,
    pub caption: String,
}

/// Full-screen viewer over `items`. Opening and closing goes through `state`
/// so the grid that launched it stays in charge of which image is shown.
#[component]
pub fn ImageLightbox(
    #[prop(into)] items: Signal<Vec<LightboxItem>>,
    state: RwSignal<Lightbox>,
) -> impl IntoView {
    let current = Memo::new(move |_| {
        state
            .get()
            .index
            .and_then(|index| items.with(|items| items.get(index).cloned()))
    });
    let count = move || items.with(|items| items.len());

    view! {
        <Show when=move || current.get().is_some()>
            <div class="lightbox-overlay" on:click=move |_| state.update(|s| s.close())>
                <div class="lightbox" on:click=|ev| ev.stop_propagation()>
                    <button class="lightbox__close" aria-label="Close" on:click=move |_| state.update(|s| s.close())>
                        "✕"
                    </button>
                    <button class="lightbox__nav lightbox__nav--prev" aria-label="Previous image" on:click=move |_| {
                        let len = count();
                        state.update(|s| s.prev(len));
                    }>
                        "‹"
                    </button>
                    {move || current.get().map(|item| view! {
                        <figure class="lightbox__figure">
                            <img src=item.image_url alt=item.title.clone() class="lightbox__image"/>
                            <figcaption>
                                <strong>{item.title}</strong>
                                <p>{item.caption}</p>
                            </figcaption>
                        </figure>
                    })}
                    <button class="lightbox__nav lightbox__nav--next" aria-label="Next image" on:click=move |_| {
                        let len = count();
                        state.update(|s| s.next(len));
                    }>
                        "›"
                    </button>
                    <div class="lightbox__counter">
                        {move || format!("{} / {}", state.get().index.map(|i| i + 1).unwrap_or(0), count())}
                    </div>
                </div>
            </div>
        </Show>
    }
}
