use serde::{Deserialize, Serialize};

pub use inkwell_types::*;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Admin,
}

impl UserRole {
    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::Client => "/my-appointments",
            UserRole::Admin => "/admin/dashboard",
        }
    }
}

/// What the browser keeps after a successful login.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// A demo login baked into the mock data.
#[derive(Clone, Debug)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewAppointment {
    pub service_id: i32,
    pub artist_id: i32,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub description: Option<String>,
    pub placement: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArtistProfile {
    pub artist: Artist,
    pub artworks: Vec<Artwork>,
}
