pub mod admin;
pub mod artist_profile;
pub mod artists;
pub mod booking;
pub mod client_dashboard;
pub mod forgot_password;
pub mod gallery;
pub mod landing;
pub mod login;
pub mod not_found;
