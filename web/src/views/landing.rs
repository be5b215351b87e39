use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ErrorView, LoadingView, StyleTag};
use crate::error::user_message;
use crate::server::{get_artists, get_services};
use crate::state::appointments::format_price;
use crate::state::gallery::featured_artists;

#[component]
pub fn LandingPage() -> impl IntoView {
    let services = Resource::new(|| (), |_| async move { get_services().await });
    let artists = Resource::new(|| (), |_| async move { get_artists().await });

    view! {
        <div class="landing">
            <section class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">"Art that stays with you"</h1>
                    <p class="hero__subtitle">
                        "Custom tattoos, flash and professional piercing in a clean, welcoming studio."
                    </p>
                    <div class="hero__actions">
                        <A href="/book" attr:class="btn btn-primary btn-large">"Book an Appointment"</A>
                        <A href="/artists" attr:class="btn btn-secondary btn-large">"Meet the Artists"</A>
                    </div>
                </div>
            </section>

            <section class="landing-section">
                <h2 class="section-title">"Services"</h2>
                <Suspense fallback=move || view! { <LoadingView message=Some("Loading services...".to_string()) compact=true/> }>
                    {move || services.get().map(|result| match result {
                        Ok(services) => view! {
                            <div class="services-grid">
                                {services.into_iter().map(|service| view! {
                                    <div class="service-card">
                                        <span class="service-card__kind">{service.kind.label()}</span>
                                        <h3>{service.name.clone()}</h3>
                                        <p>{service.description.clone()}</p>
                                        <div class="service-card__meta">
                                            <span>{format!("{} min", service.duration_minutes)}</span>
                                            <span class="service-card__price">
                                                {if service.base_price > 0.0 { "from " } else { "" }}
                                                {format_price(service.base_price)}
                                            </span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_any(),
                        Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
                    })}
                </Suspense>
            </section>

            <section class="landing-section landing-section--alt">
                <h2 class="section-title">"Featured Artists"</h2>
                <Suspense fallback=move || view! { <LoadingView message=Some("Loading artists...".to_string()) compact=true/> }>
                    {move || artists.get().map(|result| match result {
                        Ok(artists) => view! {
                            <div class="artist-grid">
                                {featured_artists(&artists, 3).into_iter().map(|artist| view! {
                                    <A href=format!("/artists/{}", artist.id) attr:class="artist-card">
                                        <img src=artist.avatar_url.clone() alt=artist.name.clone() class="artist-card__avatar"/>
                                        <h3>{artist.name.clone()}</h3>
                                        <div class="artist-card__rating">
                                            {format!("★ {:.1} ({} reviews)", artist.rating, artist.review_count)}
                                        </div>
                                        <div class="artist-card__tags">
                                            {artist.specialties.iter().map(|s| view! { <StyleTag name=s.clone()/> }).collect_view()}
                                        </div>
                                    </A>
                                }).collect_view()}
                            </div>
                            <div class="section-footer">
                                <A href="/artists" attr:class="btn btn-link">"See all artists →"</A>
                            </div>
                        }.into_any(),
                        Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
                    })}
                </Suspense>
            </section>

            <section class="cta">
                <h2>"Ready for your next piece?"</h2>
                <p>"Pick a service, choose your artist and grab a time that suits you. It takes two minutes."</p>
                <A href="/book" attr:class="btn btn-primary btn-large">"Start Booking"</A>
            </section>
        </div>
    }
}
