use chrono::{NaiveDate, NaiveDateTime};
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::entities::{
    Account, Appointment, AppointmentStatus, Artist, ArtistProfile, Artwork, GalleryImage,
    NewAppointment, Report, ReportStatus, Service, Session, StaffMember,
};
use super::mock_data;
use crate::error::{AppError, AppResult};
use crate::state::appointments::is_cancellable;
use crate::state::booking::{is_studio_slot, slot_is_open};
use crate::state::calendar::{is_closed, parse_iso_date};
use crate::state::validation::{require, validate_email, validate_phone};

static STORE: OnceLock<RwLock<Store>> = OnceLock::new();

fn store() -> &'static RwLock<Store> {
    STORE.get_or_init(|| RwLock::new(Store::seeded(chrono::Local::now().date_naive())))
}

/// Runs `f` against the process-wide mock data.
pub fn read<T>(f: impl FnOnce(&Store) -> T) -> T {
    let guard: RwLockReadGuard<'_, Store> = store().read().unwrap_or_else(|e| e.into_inner());
    f(&guard)
}

pub fn write<T>(f: impl FnOnce(&mut Store) -> T) -> T {
    let mut guard: RwLockWriteGuard<'_, Store> = store().write().unwrap_or_else(|e| e.into_inner());
    f(&mut guard)
}

/// The in-memory arrays every page reads from. Changes live as long as the
/// server process.
#[derive(Debug, Clone)]
pub struct Store {
    services: Vec<Service>,
    artists: Vec<Artist>,
    artworks: Vec<Artwork>,
    gallery: Vec<GalleryImage>,
    appointments: Vec<Appointment>,
    reports: Vec<Report>,
    staff: Vec<StaffMember>,
    accounts: Vec<Account>,
}

impl Store {
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            services: mock_data::services(),
            artists: mock_data::artists(),
            artworks: mock_data::artworks(),
            gallery: mock_data::gallery(),
            appointments: mock_data::appointments(today),
            reports: mock_data::reports(),
            staff: mock_data::staff(),
            accounts: mock_data::accounts(),
        }
    }

    pub fn services(&self) -> Vec<Service> {
        self.services.clone()
    }

    pub fn service(&self, id: i32) -> AppResult<Service> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Service {}", id)))
    }

    pub fn artists(&self) -> Vec<Artist> {
        self.artists.clone()
    }

    pub fn artist(&self, id: i32) -> AppResult<Artist> {
        self.artists
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Artist {}", id)))
    }

    pub fn artist_profile(&self, id: i32) -> AppResult<ArtistProfile> {
        Ok(ArtistProfile {
            artist: self.artist(id)?,
            artworks: self.artworks_for(id),
        })
    }

    pub fn artworks_for(&self, artist_id: i32) -> Vec<Artwork> {
        self.artworks
            .iter()
            .filter(|a| a.artist_id == artist_id)
            .cloned()
            .collect()
    }

    pub fn gallery(&self) -> Vec<GalleryImage> {
        self.gallery.clone()
    }

    pub fn staff(&self) -> Vec<StaffMember> {
        self.staff.clone()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.clone()
    }

    pub fn appointments_for(&self, email: &str) -> Vec<Appointment> {
        let email = email.trim();
        self.appointments
            .iter()
            .filter(|a| a.client_email.eq_ignore_ascii_case(email))
            .cloned()
            .collect()
    }

    /// Start times on `date` that an open appointment already holds.
    pub fn booked_times(&self, artist_id: i32, date: &str) -> Vec<String> {
        self.appointments
            .iter()
            .filter(|a| a.artist_id == artist_id && a.date == date && a.status.holds_slot())
            .map(|a| a.time.clone())
            .collect()
    }

    pub fn create_appointment(&mut self, request: NewAppointment, now: NaiveDateTime) -> AppResult<Appointment> {
        let today = now.date();
        require(&request.client_name, "Name").map_err(AppError::Validation)?;
        validate_email(&request.client_email).map_err(AppError::Validation)?;
        validate_phone(request.client_phone.as_deref().unwrap_or_default())
            .map_err(AppError::Validation)?;

        let date = parse_iso_date(&request.date)
            .ok_or_else(|| AppError::Validation(format!("Invalid date: {}", request.date)))?;
        if date < today {
            return Err(AppError::Validation("Appointments cannot be booked in the past".to_string()));
        }
        if is_closed(date) {
            return Err(AppError::Validation("The studio is closed on Sundays".to_string()));
        }
        if !is_studio_slot(&request.time) {
            return Err(AppError::Validation(format!("{} is outside studio hours", request.time)));
        }
        if !slot_is_open(&request.time, date, now) {
            return Err(AppError::Validation(format!("The {} slot has already started", request.time)));
        }

        let service = self.service(request.service_id)?;
        let artist = self.artist(request.artist_id)?;
        if !artist.offers(service.kind) {
            return Err(AppError::Validation(format!(
                "{} does not offer {}",
                artist.name, service.name
            )));
        }

        if self.booked_times(artist.id, &request.date).contains(&request.time) {
            return Err(AppError::SlotUnavailable {
                date: request.date,
                time: request.time,
            });
        }

        let notes = [request.placement.as_deref().map(|p| format!("Placement: {}", p)), request.description]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let appointment = Appointment {
            id: self.appointments.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            client_name: request.client_name.trim().to_string(),
            client_email: request.client_email.trim().to_lowercase(),
            artist_id: artist.id,
            artist_name: artist.name,
            service: service.kind,
            service_name: service.name,
            date: request.date,
            time: request.time,
            status: AppointmentStatus::Pending,
            price: service.base_price,
            notes: (!notes.is_empty()).then(|| notes.join("\n")),
        };

        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Only the client who owns the appointment can cancel it, and only
    /// while it is still pending or confirmed.
    /// Only the owner may cancel, and only a Pending or Confirmed appointment
    /// that is not already behind `today`.
    pub fn cancel_appointment(&mut self, id: i32, email: &str, today: NaiveDate) -> AppResult<Appointment> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id && a.client_email.eq_ignore_ascii_case(email.trim()))
            .ok_or_else(|| AppError::NotFound(format!("Appointment {}", id)))?;

        if !is_cancellable(appointment, today) {
            return Err(AppError::InvalidTransition {
                from: appointment.status.label().to_string(),
                to: AppointmentStatus::Cancelled.label().to_string(),
            });
        }

        appointment.status = AppointmentStatus::Cancelled;
        Ok(appointment.clone())
    }

    pub fn update_report_status(&mut self, id: i32, status: ReportStatus) -> AppResult<Report> {
        let report = self
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Report {}", id)))?;

        if !report.status.can_transition_to(status) {
            return Err(AppError::InvalidTransition {
                from: report.status.label().to_string(),
                to: status.label().to_string(),
            });
        }

        report.status = status;
        Ok(report.clone())
    }

    pub fn authenticate(&self, email: &str, password: &str) -> AppResult<Session> {
        self.accounts
            .iter()
            .find(|account| account.email.eq_ignore_ascii_case(email.trim()) && account.password == password)
            .map(|account| Session {
                email: account.email.clone(),
                display_name: account.display_name.clone(),
                role: account.role,
            })
            .ok_or(AppError::Unauthorized)
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.accounts
            .iter()
            .any(|account| account.email.eq_ignore_ascii_case(email.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::entities::UserRole;
    use crate::db::mock_data::DEMO_CLIENT_EMAIL;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_hms_opt(9, 30, 0).unwrap()
    }

    fn request() -> NewAppointment {
        NewAppointment {
            service_id: 1,
            artist_id: 1,
            date: "2026-10-21".to_string(),
            time: "15:00".to_string(),
            client_name: "Alex Rivera".to_string(),
            client_email: "ALEX@example.com".to_string(),
            client_phone: Some("(555) 123-4567".to_string()),
            description: Some("Fern on the forearm".to_string()),
            placement: Some("forearm".to_string()),
        }
    }

    #[test]
    fn test_create_appointment() {
        let mut store = Store::seeded(today());
        let before = store.appointments_for(DEMO_CLIENT_EMAIL).len();

        let created = store.create_appointment(request(), now()).unwrap();
        assert_eq!(created.status, AppointmentStatus::Pending);
        assert_eq!(created.artist_name, "Mara Quinn");
        assert_eq!(created.price, 250.0);
        assert_eq!(created.id, 10);
        assert_eq!(created.notes.as_deref(), Some("Placement: forearm\nFern on the forearm"));
        assert_eq!(store.appointments_for(DEMO_CLIENT_EMAIL).len(), before + 1);
        assert!(store.booked_times(1, "2026-10-21").contains(&"15:00".to_string()));
    }

    #[test]
    fn test_double_booking_is_rejected() {
        let mut store = Store::seeded(today());
        store.create_appointment(request(), now()).unwrap();
        let err = store.create_appointment(request(), now()).unwrap_err();
        assert_eq!(
            err,
            AppError::SlotUnavailable {
                date: "2026-10-21".to_string(),
                time: "15:00".to_string()
            }
        );
    }

    #[test]
    fn test_cancelled_slot_frees_up() {
        let mut store = Store::seeded(today());
        let created = store.create_appointment(request(), now()).unwrap();
        store.cancel_appointment(created.id, DEMO_CLIENT_EMAIL, today()).unwrap();
        assert!(store.booked_times(1, "2026-10-21").is_empty());
        assert!(store.create_appointment(request(), now()).is_ok());
    }

    #[test]
    fn test_create_validations() {
        let mut store = Store::seeded(today());

        let mut past = request();
        past.date = "2026-10-18".to_string();
        assert!(matches!(store.create_appointment(past, now()), Err(AppError::Validation(_))));

        let mut sunday = request();
        sunday.date = "2026-10-25".to_string();
        assert!(matches!(store.create_appointment(sunday, now()), Err(AppError::Validation(_))));

        let mut late = request();
        late.time = "21:00".to_string();
        assert!(matches!(store.create_appointment(late, now()), Err(AppError::Validation(_))));

        let mut piercing_with_tattooer = request();
        piercing_with_tattooer.service_id = 3;
        assert!(matches!(
            store.create_appointment(piercing_with_tattooer, now()),
            Err(AppError::Validation(_))
        ));

        let mut ghost = request();
        ghost.artist_id = 99;
        assert_eq!(
            store.create_appointment(ghost, now()).unwrap_err(),
            AppError::NotFound("Artist 99".to_string())
        );
    }

    #[test]
    fn test_cancel_rules() {
        let mut store = Store::seeded(today());
        // Appointment 1 belongs to the demo client, 6 to someone else
        assert!(matches!(store.cancel_appointment(6, DEMO_CLIENT_EMAIL, today()), Err(AppError::NotFound(_))));

        let cancelled = store.cancel_appointment(1, DEMO_CLIENT_EMAIL, today()).unwrap();
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
        assert!(matches!(
            store.cancel_appointment(1, DEMO_CLIENT_EMAIL, today()),
            Err(AppError::InvalidTransition { .. })
        ));

        // Completed appointments stay completed
        assert!(matches!(
            store.cancel_appointment(3, DEMO_CLIENT_EMAIL, today()),
            Err(AppError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_started_slots_today_are_rejected() {
        let mut store = Store::seeded(today());
        let afternoon = today().and_hms_opt(14, 20, 0).unwrap();

        let mut started = request();
        started.date = "2026-10-19".to_string();
        started.time = "14:00".to_string();
        assert!(matches!(
            store.create_appointment(started.clone(), afternoon),
            Err(AppError::Validation(_))
        ));

        started.time = "10:00".to_string();
        assert!(matches!(
            store.create_appointment(started.clone(), afternoon),
            Err(AppError::Validation(_))
        ));

        started.time = "15:00".to_string();
        assert!(store.create_appointment(started, afternoon).is_ok());
    }

    #[test]
    fn test_stale_appointment_cannot_be_cancelled() {
        let mut store = Store::seeded(today());
        // Appointment 1 is five days out and still Confirmed
        let day_after = today() + chrono::Duration::days(6);
        assert_eq!(
            store.cancel_appointment(1, DEMO_CLIENT_EMAIL, day_after).unwrap_err(),
            AppError::InvalidTransition {
                from: "Confirmed".to_string(),
                to: "Cancelled".to_string()
            }
        );

        let same_day = today() + chrono::Duration::days(5);
        assert!(store.cancel_appointment(1, DEMO_CLIENT_EMAIL, same_day).is_ok());
    }

    #[test]
    fn test_report_transitions() {
        let mut store = Store::seeded(today());
        let updated = store.update_report_status(1, ReportStatus::Investigating).unwrap();
        assert_eq!(updated.status, ReportStatus::Investigating);
        assert_eq!(store.reports()[0].status, ReportStatus::Investigating);

        let err = store.update_report_status(1, ReportStatus::Pending).unwrap_err();
        assert_eq!(
            err,
            AppError::InvalidTransition {
                from: "Investigating".to_string(),
                to: "Pending".to_string()
            }
        );
        assert!(matches!(
            store.update_report_status(404, ReportStatus::Resolved),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_authenticate() {
        let store = Store::seeded(today());
        let session = store.authenticate(" Admin@Inkwell.Studio ", "admin123").unwrap();
        assert_eq!(session.role, UserRole::Admin);
        assert_eq!(store.authenticate(DEMO_CLIENT_EMAIL, "wrong"), Err(AppError::Unauthorized));
        assert!(store.has_account("jordan@example.com"));
        assert!(!store.has_account("nobody@example.com"));
    }

    #[test]
    fn test_artist_profile() {
        let store = Store::seeded(today());
        let profile = store.artist_profile(3).unwrap();
        assert_eq!(profile.artist.name, "Kenji Mori");
        assert_eq!(profile.artworks.len(), 3);
        assert!(store.artist_profile(42).is_err());
    }
}
