use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::db::entities::UserRole;
use crate::utils::auth::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        menu_open.set(false);
        navigate("/", Default::default());
    };

    // Close the mobile menu whenever the route changes
    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Inkwell"
                    </A>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>

                <div class=move || if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }>
                    <A href="/artists" attr:class="navbar__link">
                        "Artists"
                    </A>
                    <A href="/gallery" attr:class="navbar__link">
                        "Gallery"
                    </A>

                    {move || match session.session.get() {
                        Some(current) if current.role == UserRole::Admin => view! {
                            <A href="/admin/dashboard" attr:class="navbar__link">
                                "Dashboard"
                            </A>
                            <A href="/admin/reports" attr:class="navbar__link">
                                "Reports"
                            </A>
                            <A href="/admin/staff" attr:class="navbar__link">
                                "Staff"
                            </A>
                            <span class="navbar__user">{current.display_name}</span>
                            <button class="navbar__link navbar__link--button" on:click=logout.clone()>
                                "Log out"
                            </button>
                        }.into_any(),
                        Some(current) => view! {
                            <A href="/my-appointments" attr:class="navbar__link">
                                "My Appointments"
                            </A>
                            <A href="/book" attr:class="navbar__link navbar__link--cta">
                                "Book Now"
                            </A>
                            <span class="navbar__user">{current.display_name}</span>
                            <button class="navbar__link navbar__link--button" on:click=logout.clone()>
                                "Log out"
                            </button>
                        }.into_any(),
                        None => view! {
                            <A href="/login" attr:class="navbar__link">
                                "Log in"
                            </A>
                            <A href="/book" attr:class="navbar__link navbar__link--cta">
                                "Book Now"
                            </A>
                        }.into_any(),
                    }}
                </div>
            </div>
        </nav>
    }
}
