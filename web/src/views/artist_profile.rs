use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};

use crate::components::{ErrorView, ImageLightbox, LightboxItem, LoadingView, StyleTag};
use crate::db::entities::ArtistProfile;
use crate::error::user_message;
use crate::server::get_artist_profile;
use crate::state::gallery::{artwork_styles, filter_artworks, Lightbox};

#[component]
pub fn ArtistProfilePage() -> impl IntoView {
    let params = use_params_map();
    let artist_id = move || {
        params.with(|params| {
            params
                .get("id")
                .and_then(|id| id.parse::<i32>().ok())
                .unwrap_or(0)
        })
    };

    let profile = Resource::new(artist_id, |id| async move { get_artist_profile(id).await });

    view! {
        <div class="page-container">
            <A href="/artists" attr:class="back-link">"← All artists"</A>
            <Suspense fallback=move || view! { <LoadingView message=Some("Loading artist...".to_string())/> }>
                {move || profile.get().map(|result| match result {
                    Ok(profile) => view! { <ProfileContent profile=profile/> }.into_any(),
                    Err(e) => view! {
                        <ErrorView title="Artist unavailable" message=Some(user_message(&e))/>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ProfileContent(profile: ArtistProfile) -> impl IntoView {
    let ArtistProfile { artist, artworks } = profile;
    let styles = artwork_styles(&artworks);
    let artworks = StoredValue::new(artworks);

    let active_style = RwSignal::new(Option::<String>::None);
    let lightbox = RwSignal::new(Lightbox::default());

    let visible = Memo::new(move |_| {
        let style = active_style.get();
        artworks.with_value(|all| filter_artworks(all, style.as_deref()))
    });
    let lightbox_items = Signal::derive(move || {
        visible
            .get()
            .into_iter()
            .map(|artwork| LightboxItem {
                image_url: artwork.image_url,
                title: artwork.title,
                caption: artwork.description,
            })
            .collect::<Vec<_>>()
    });

    // A new filter changes what the indices point at
    Effect::new(move |_| {
        active_style.track();
        lightbox.update(|l| l.close());
    });

    let artwork_count = artworks.with_value(|all| all.len());

    view! {
        <section class="profile-header">
            <img src=artist.avatar_url.clone() alt=artist.name.clone() class="profile-header__avatar"/>
            <div class="profile-header__info">
                <h1>{artist.name.clone()}</h1>
                <div class="profile-header__tags">
                    {artist.specialties.iter().map(|s| view! { <StyleTag name=s.clone()/> }).collect_view()}
                </div>
                <p class="profile-header__bio">{artist.bio.clone()}</p>
                {artist.instagram.clone().map(|handle| {
                    let href = format!("https://instagram.com/{}", handle.trim_start_matches('@'));
                    view! {
                        <a
                            class="profile-header__instagram"
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {handle}
                        </a>
                    }
                })}
            </div>
            <A href=format!("/book?artist={}", artist.id) attr:class="btn btn-primary btn-large">
                {format!("Book with {}", artist.name.split_whitespace().next().unwrap_or(&artist.name))}
            </A>
        </section>

        <section class="profile-stats">
            <div class="stat-card">
                <span class="stat-card__value">{format!("{:.1}", artist.rating)}</span>
                <span class="stat-card__label">"Rating"</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__value">{artist.review_count}</span>
                <span class="stat-card__label">"Reviews"</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__value">{artist.years_experience}</span>
                <span class="stat-card__label">"Years experience"</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__value">{artwork_count}</span>
                <span class="stat-card__label">"Portfolio pieces"</span>
            </div>
        </section>

        <section class="portfolio">
            <div class="portfolio__header">
                <h2>"Portfolio"</h2>
                <div class="style-filter">
                    <button
                        class=move || if active_style.get().is_none() { "style-filter__btn active" } else { "style-filter__btn" }
                        on:click=move |_| active_style.set(None)
                    >
                        "All"
                    </button>
                    {styles.into_iter().map(|style| {
                        let label = style.clone();
                        let is_active = {
                            let style = style.clone();
                            move || active_style.get().as_deref() == Some(style.as_str())
                        };
                        view! {
                            <button
                                class=move || if is_active() { "style-filter__btn active" } else { "style-filter__btn" }
                                on:click=move |_| active_style.set(Some(style.clone()))
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No pieces in this style yet."</p> }
            >
                <div class="portfolio__grid">
                    {move || visible.get().into_iter().enumerate().map(|(index, artwork)| view! {
                        <button
                            class="portfolio__item"
                            on:click=move |_| {
                                let len = visible.with_untracked(|v| v.len());
                                lightbox.update(|l| l.open(index, len));
                            }
                        >
                            <img src=artwork.image_url alt=artwork.title.clone() loading="lazy"/>
                            <span class="portfolio__caption">{artwork.title}" · "{artwork.style}</span>
                        </button>
                    }).collect_view()}
                </div>
            </Show>
        </section>

        <ImageLightbox items=lightbox_items state=lightbox/>
    }
}
