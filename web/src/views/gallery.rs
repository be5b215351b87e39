use leptos::prelude::*;

use crate::components::{ErrorView, ImageLightbox, LightboxItem, LoadingView};
use crate::db::entities::GalleryCategory;
use crate::error::user_message;
use crate::server::get_gallery;
use crate::state::gallery::{filter_gallery, Lightbox};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let images = Resource::new(|| (), |_| async move { get_gallery().await });

    let category = RwSignal::new(Option::<GalleryCategory>::None);
    let lightbox = RwSignal::new(Lightbox::default());

    let visible = Memo::new(move |_| match images.get() {
        Some(Ok(all)) => filter_gallery(&all, category.get()),
        _ => Vec::new(),
    });
    let lightbox_items = Signal::derive(move || {
        visible
            .get()
            .into_iter()
            .map(|image| LightboxItem {
                image_url: image.image_url,
                title: image.title,
                caption: image.description,
            })
            .collect::<Vec<_>>()
    });

    Effect::new(move |_| {
        category.track();
        lightbox.update(|l| l.close());
    });

    let category_button = move |value: Option<GalleryCategory>, label: &'static str| {
        view! {
            <button
                class=move || if category.get() == value { "style-filter__btn active" } else { "style-filter__btn" }
                on:click=move |_| category.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1>"Gallery"</h1>
                <p>"Healed work, fresh ink, jewellery and a look around the studio."</p>
            </div>

            <div class="style-filter">
                {category_button(None, "All")}
                {GalleryCategory::ALL
                    .into_iter()
                    .map(|c| category_button(Some(c), c.label()))
                    .collect_view()}
            </div>

            <Suspense fallback=move || view! { <LoadingView message=Some("Loading gallery...".to_string())/> }>
                {move || images.get().map(|result| match result {
                    Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
                    Ok(_) => view! {
                        <div class="gallery-grid">
                            {move || visible.get().into_iter().enumerate().map(|(index, image)| view! {
                                <button
                                    class="gallery-grid__item"
                                    on:click=move |_| {
                                        let len = visible.with_untracked(|v| v.len());
                                        lightbox.update(|l| l.open(index, len));
                                    }
                                >
                                    <img src=image.image_url alt=image.title.clone() loading="lazy"/>
                                    <div class="gallery-grid__overlay">
                                        <span class="gallery-grid__category">{image.category.label()}</span>
                                        <span class="gallery-grid__title">{image.title}</span>
                                    </div>
                                </button>
                            }).collect_view()}
                        </div>
                    }.into_any(),
                })}
            </Suspense>

            <ImageLightbox items=lightbox_items state=lightbox/>
        </div>
    }
}
