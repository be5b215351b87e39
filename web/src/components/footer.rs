use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer__container">
                <div class="footer__column">
                    <div class="footer__brand">"Inkwell"</div>
                    <p class="footer__tagline">"Custom tattoos and professional piercing since 2012."</p>
                </div>

                <div class="footer__column">
                    <h4>"Studio"</h4>
                    <A href="/artists" attr:class="footer__link">"Our Artists"</A>
                    <A href="/gallery" attr:class="footer__link">"Gallery"</A>
                    <A href="/book" attr:class="footer__link">"Book an Appointment"</A>
                </div>

                <div class="footer__column">
                    <h4>"Hours"</h4>
                    <p>"Mon – Sat: 10am – 7pm"</p>
                    <p>"Sunday: closed"</p>
                </div>

                <div class="footer__column">
                    <h4>"Visit"</h4>
                    <p>"214 Alder Street, Portland, OR"</p>
                    <a href="mailto:hello@inkwell.studio" class="footer__link">"hello@inkwell.studio"</a>
                    <a href="tel:+15035550142" class="footer__link">"(503) 555-0142"</a>
                </div>
            </div>

            <div class="footer__bottom">
                <span>"© " {year} " Inkwell Tattoo & Piercing"</span>
                <A href="/login" attr:class="footer__link footer__link--muted">"Staff login"</A>
            </div>
        </footer>
    }
}
