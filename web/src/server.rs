use leptos::prelude::*;
use leptos::server;

use crate::db::entities::{
    Appointment, Artist, ArtistProfile, GalleryImage, LoginData, NewAppointment, Report,
    ReportStatus, Service, Session, StaffMember,
};
use crate::db::store;
use crate::error::AppError;
use crate::state::booking::available_slots;
use crate::state::calendar::parse_iso_date;
use crate::state::validation::validate_email;

/// Every call waits a little so loading states are visible, as they would be
/// against a real backend.
async fn simulate_latency() {
    #[cfg(feature = "ssr")]
    {
        let delay = crate::config::get_config().mock_latency;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[server]
pub async fn get_services() -> Result<Vec<Service>, ServerFnError> {
    simulate_latency().await;
    Ok(store::read(|s| s.services()))
}

#[server]
pub async fn get_artists() -> Result<Vec<Artist>, ServerFnError> {
    simulate_latency().await;
    Ok(store::read(|s| s.artists()))
}

#[server]
pub async fn get_artist_profile(artist_id: i32) -> Result<ArtistProfile, ServerFnError> {
    simulate_latency().await;
    store::read(|s| s.artist_profile(artist_id)).map_err(|e| {
        tracing::warn!(artist_id, error = %e, "Artist profile lookup failed");
        e.into()
    })
}

#[server]
pub async fn get_gallery() -> Result<Vec<GalleryImage>, ServerFnError> {
    simulate_latency().await;
    Ok(store::read(|s| s.gallery()))
}

#[server]
pub async fn get_available_times(artist_id: i32, date: String) -> Result<Vec<String>, ServerFnError> {
    simulate_latency().await;
    let day = parse_iso_date(&date)
        .ok_or_else(|| AppError::Validation(format!("Invalid date: {}", date)))?;
    let booked = store::read(|s| s.booked_times(artist_id, &date));
    Ok(available_slots(&booked, day, now()))
}

#[server]
pub async fn submit_booking(request: NewAppointment) -> Result<Appointment, ServerFnError> {
    simulate_latency().await;
    match store::write(|s| s.create_appointment(request, now())) {
        Ok(appointment) => {
            tracing::info!(
                appointment_id = appointment.id,
                artist_id = appointment.artist_id,
                date = %appointment.date,
                time = %appointment.time,
                "Booking request created"
            );
            Ok(appointment)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Booking request rejected");
            Err(e.into())
        }
    }
}

#[server]
pub async fn get_my_appointments(email: String) -> Result<Vec<Appointment>, ServerFnError> {
    simulate_latency().await;
    Ok(store::read(|s| s.appointments_for(&email)))
}

#[server]
pub async fn cancel_appointment(appointment_id: i32, email: String) -> Result<Appointment, ServerFnError> {
    simulate_latency().await;
    let cancelled = store::write(|s| s.cancel_appointment(appointment_id, &email, now().date()))?;
    tracing::info!(appointment_id, "Appointment cancelled by client");
    Ok(cancelled)
}

#[server]
pub async fn get_reports() -> Result<Vec<Report>, ServerFnError> {
    simulate_latency().await;
    Ok(store::read(|s| s.reports()))
}

#[server]
pub async fn update_report_status(report_id: i32, status: ReportStatus) -> Result<Report, ServerFnError> {
    simulate_latency().await;
    let report = store::write(|s| s.update_report_status(report_id, status))?;
    tracing::info!(report_id, status = status.slug(), "Report status updated");
    Ok(report)
}

#[server]
pub async fn get_staff() -> Result<Vec<StaffMember>, ServerFnError> {
    simulate_latency().await;
    Ok(store::read(|s| s.staff()))
}

#[server]
pub async fn login_user(login: LoginData) -> Result<Session, ServerFnError> {
    simulate_latency().await;
    validate_email(&login.email).map_err(AppError::Validation)?;
    if login.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()).into());
    }

    match store::read(|s| s.authenticate(&login.email, &login.password)) {
        Ok(session) => {
            tracing::info!(email = %session.email, role = ?session.role, "User logged in");
            Ok(session)
        }
        Err(e) => {
            tracing::warn!(email = %login.email, "Failed login attempt");
            Err(e.into())
        }
    }
}

/// Always succeeds for a well-formed address so the form does not reveal
/// which emails have accounts.
#[server]
pub async fn request_password_reset(email: String) -> Result<(), ServerFnError> {
    simulate_latency().await;
    validate_email(&email).map_err(AppError::Validation)?;
    if store::read(|s| s.has_account(&email)) {
        tracing::info!(email = %email.trim(), "Password reset link issued");
    } else {
        tracing::debug!("Password reset requested for unknown address");
    }
    Ok(())
}
