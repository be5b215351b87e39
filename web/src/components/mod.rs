pub mod auth_guard;
pub mod calendar;
pub mod error;
pub mod footer;
pub mod lightbox;
pub mod loading;
pub mod navbar;
pub mod status_badge;
pub mod style_tag;

// Re-export commonly used components
pub use auth_guard::AuthGuard;
pub use calendar::Calendar;
pub use error::{ErrorView, SuccessView};
pub use footer::Footer;
pub use lightbox::{ImageLightbox, LightboxItem};
pub use loading::LoadingView;
pub use navbar::Navbar;
pub use status_badge::StatusBadge;
pub use style_tag::StyleTag;
