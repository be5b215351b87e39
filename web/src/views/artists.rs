use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::components::{ErrorView, LoadingView, StyleTag};
use crate::db::entities::{Artist, ServiceKind};
use crate::error::user_message;
use crate::server::get_artists;
use crate::state::gallery::{filter_artists, specialties};

#[component]
fn ArtistCard(artist: Artist) -> impl IntoView {
    let offers = artist
        .offers
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <div class="artist-card">
            <A href=format!("/artists/{}", artist.id) attr:class="artist-card__link">
                <img src=artist.avatar_url.clone() alt=artist.name.clone() class="artist-card__avatar"/>
                <h3>{artist.name.clone()}</h3>
            </A>
            <div class="artist-card__rating">
                {format!("★ {:.1}", artist.rating)}
                <span class="artist-card__reviews">{format!(" ({} reviews)", artist.review_count)}</span>
            </div>
            <div class="artist-card__offers">{offers}</div>
            <div class="artist-card__tags">
                {artist.specialties.iter().map(|s| view! { <StyleTag name=s.clone()/> }).collect_view()}
            </div>
            <div class="artist-card__actions">
                <A href=format!("/artists/{}", artist.id) attr:class="btn btn-secondary">"View Portfolio"</A>
                <A href=format!("/book?artist={}", artist.id) attr:class="btn btn-primary">"Book"</A>
            </div>
        </div>
    }
}

#[component]
pub fn ArtistsPage() -> impl IntoView {
    let artists = Resource::new(|| (), |_| async move { get_artists().await });

    let search = RwSignal::new(String::new());
    let specialty = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());

    let clear_filters = move |_: leptos::ev::MouseEvent| {
        search.set(String::new());
        specialty.set(String::new());
        kind.set(String::new());
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1>"Our Artists"</h1>
                <p>"Browse the team and find the right hands for your next piece."</p>
            </div>

            <Suspense fallback=move || view! { <LoadingView message=Some("Loading artists...".to_string())/> }>
                {move || artists.get().map(|result| match result {
                    Ok(roster) => {
                        let specialty_options = specialties(&roster);
                        let roster = StoredValue::new(roster);
                        let filtered = Memo::new(move |_| {
                            let specialty = specialty.get();
                            let specialty = (!specialty.is_empty()).then_some(specialty);
                            roster.with_value(|roster| {
                                filter_artists(
                                    roster,
                                    specialty.as_deref(),
                                    ServiceKind::from_slug(&kind.get()),
                                    &search.get(),
                                )
                            })
                        });

                        view! {
                            <div class="filter-bar">
                                <Input
                                    class="filter-bar__search"
                                    placeholder="Search by name or style"
                                    value=search
                                />
                                <select
                                    class="filter-bar__select"
                                    prop:value=move || specialty.get()
                                    on:change=move |ev| specialty.set(event_target_value(&ev))
                                >
                                    <option value="">"All styles"</option>
                                    {specialty_options.into_iter().map(|s| view! {
                                        <option value=s.clone()>{s.clone()}</option>
                                    }).collect_view()}
                                </select>
                                <select
                                    class="filter-bar__select"
                                    prop:value=move || kind.get()
                                    on:change=move |ev| kind.set(event_target_value(&ev))
                                >
                                    <option value="">"Any service"</option>
                                    {[ServiceKind::Tattoo, ServiceKind::Piercing, ServiceKind::TouchUp].into_iter().map(|k| view! {
                                        <option value=k.slug()>{k.label()}</option>
                                    }).collect_view()}
                                </select>
                                <Button appearance=ButtonAppearance::Subtle on_click=clear_filters>
                                    "Clear"
                                </Button>
                            </div>

                            <p class="result-count">
                                {move || match filtered.get().len() {
                                    1 => "1 artist".to_string(),
                                    n => format!("{} artists", n),
                                }}
                            </p>

                            <Show
                                when=move || !filtered.get().is_empty()
                                fallback=|| view! {
                                    <div class="empty-state">
                                        <p>"No artists match those filters."</p>
                                    </div>
                                }
                            >
                                <div class="artist-grid">
                                    <For
                                        each=move || filtered.get()
                                        key=|artist| artist.id
                                        children=|artist| view! { <ArtistCard artist=artist/> }
                                    />
                                </div>
                            </Show>
                        }.into_any()
                    }
                    Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}
