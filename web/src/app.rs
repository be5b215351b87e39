use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::{Footer, Navbar};
use crate::config::get_config;
use crate::utils::auth::provide_session_context;
use crate::views::{
    admin::{dashboard::AdminDashboardPage, reports::ReportsPage, staff::StaffPage},
    artist_profile::ArtistProfilePage,
    artists::ArtistsPage,
    booking::BookingPage,
    client_dashboard::ClientDashboardPage,
    forgot_password::ForgotPasswordPage,
    gallery::GalleryPage,
    landing::LandingPage,
    login::LoginPage,
    not_found::NotFoundPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let studio_name = get_config().studio_name.clone();

    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <meta name="application-name" content=studio_name/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/inkwell.css"/>
        <Title text="Inkwell Tattoo & Piercing"/>
        <Meta name="description" content="Book tattoos and piercings with the Inkwell team."/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/") view=LandingPage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                        <Route path=path!("/artists") view=ArtistsPage/>
                        <Route path=path!("/artists/:id") view=ArtistProfilePage/>
                        <Route path=path!("/gallery") view=GalleryPage/>
                        <Route path=path!("/book") view=BookingPage/>
                        <Route path=path!("/my-appointments") view=ClientDashboardPage/>
                        <Route path=path!("/admin/dashboard") view=AdminDashboardPage/>
                        <Route path=path!("/admin/reports") view=ReportsPage/>
                        <Route path=path!("/admin/staff") view=StaffPage/>
                    </Routes>
                </main>
                <Footer/>
            </Router>
        </ConfigProvider>
    }
}
