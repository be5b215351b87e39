use chrono::{NaiveDate, NaiveTime, Timelike};

use super::calendar::{is_closed, parse_iso_date};
use super::validation::{non_blank, require, validate_email, validate_phone};
use crate::db::entities::{Artist, NewAppointment, Service};

pub const OPENING_HOUR: u32 = 10;
pub const CLOSING_HOUR: u32 = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStep {
    Service,
    Artist,
    DateTime,
    Details,
    Confirmed,
}

impl BookingStep {
    pub const WIZARD: [BookingStep; 4] = [
        BookingStep::Service,
        BookingStep::Artist,
        BookingStep::DateTime,
        BookingStep::Details,
    ];

    pub fn number(&self) -> usize {
        match self {
            BookingStep::Service => 1,
            BookingStep::Artist => 2,
            BookingStep::DateTime => 3,
            BookingStep::Details => 4,
            BookingStep::Confirmed => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::Service => "Choose a service",
            BookingStep::Artist => "Pick your artist",
            BookingStep::DateTime => "Select date & time",
            BookingStep::Details => "Your details",
            BookingStep::Confirmed => "Booking requested",
        }
    }

    /// `Details` only moves on through a successful submit, never via `next`.
    pub fn next(&self) -> Self {
        match self {
            BookingStep::Service => BookingStep::Artist,
            BookingStep::Artist => BookingStep::DateTime,
            BookingStep::DateTime => BookingStep::Details,
            BookingStep::Details => BookingStep::Details,
            BookingStep::Confirmed => BookingStep::Confirmed,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            BookingStep::Service => BookingStep::Service,
            BookingStep::Artist => BookingStep::Service,
            BookingStep::DateTime => BookingStep::Artist,
            BookingStep::Details => BookingStep::DateTime,
            BookingStep::Confirmed => BookingStep::Confirmed,
        }
    }

    pub fn progress_percentage(&self) -> f64 {
        let done = self.number().saturating_sub(1).min(Self::WIZARD.len());
        (done as f64 / Self::WIZARD.len() as f64) * 100.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingDraft {
    pub service: Option<Service>,
    pub artist: Option<Artist>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub description: String,
    pub placement: String,
}

impl BookingDraft {
    /// A new service keeps the artist only when they still offer it.
    pub fn select_service(&mut self, service: Service) {
        if let Some(artist) = &self.artist {
            if !artist.offers(service.kind) {
                self.artist = None;
                self.time = None;
            }
        }
        self.service = Some(service);
    }

    pub fn select_artist(&mut self, artist: Artist) {
        if self.artist.as_ref().map(|a| a.id) != Some(artist.id) {
            self.time = None;
        }
        self.artist = Some(artist);
    }

    pub fn select_date(&mut self, date: String) {
        if self.date.as_deref() != Some(date.as_str()) {
            self.time = None;
        }
        self.date = Some(date);
    }

    pub fn select_time(&mut self, time: String) {
        self.time = Some(time);
    }

    /// Messages that keep the wizard from leaving `step`. Dates before `today`
    /// are refused the same way the calendar refuses to select them.
    pub fn step_errors(&self, step: BookingStep, today: NaiveDate) -> Vec<String> {
        let mut errors = Vec::new();
        match step {
            BookingStep::Service => {
                if self.service.is_none() {
                    errors.push("Please choose a service".to_string());
                }
            }
            BookingStep::Artist => match (&self.artist, &self.service) {
                (None, _) => errors.push("Please pick an artist".to_string()),
                (Some(artist), Some(service)) if !artist.offers(service.kind) => errors.push(format!(
                    "{} does not offer {} appointments",
                    artist.name,
                    service.kind.label().to_lowercase()
                )),
                _ => {}
            },
            BookingStep::DateTime => {
                match self.date.as_deref().and_then(parse_iso_date) {
                    None => errors.push("Please select a date".to_string()),
                    Some(date) if date < today => {
                        errors.push("That date has already passed".to_string())
                    }
                    Some(date) if is_closed(date) => {
                        errors.push("The studio is closed on Sundays".to_string())
                    }
                    Some(_) => {}
                }
                if self.time.is_none() {
                    errors.push("Please select a time".to_string());
                }
            }
            BookingStep::Details => {
                let checks = [
                    require(&self.client_name, "Name"),
                    validate_email(&self.client_email),
                    validate_phone(&self.client_phone),
                ];
                errors.extend(checks.into_iter().filter_map(Result::err));
            }
            BookingStep::Confirmed => {}
        }
        errors
    }

    pub fn can_advance(&self, step: BookingStep, today: NaiveDate) -> bool {
        self.step_errors(step, today).is_empty()
    }

    /// First step that still has a problem, if any.
    pub fn first_incomplete_step(&self, today: NaiveDate) -> Option<BookingStep> {
        BookingStep::WIZARD
            .into_iter()
            .find(|step| !self.can_advance(*step, today))
    }

    pub fn estimated_price(&self) -> Option<f64> {
        self.service.as_ref().map(|service| service.base_price)
    }

    /// The submission payload, once every step validates.
    pub fn to_new_appointment(&self, today: NaiveDate) -> Option<NewAppointment> {
        if self.first_incomplete_step(today).is_some() {
            return None;
        }

        Some(NewAppointment {
            service_id: self.service.as_ref()?.id,
            artist_id: self.artist.as_ref()?.id,
            date: self.date.clone()?,
            time: self.time.clone()?,
            client_name: self.client_name.trim().to_string(),
            client_email: self.client_email.trim().to_lowercase(),
            client_phone: non_blank(&self.client_phone),
            description: non_blank(&self.description),
            placement: non_blank(&self.placement),
        })
    }
}

/// Hourly start times the studio books, `HH:MM`.
pub fn studio_time_slots() -> Vec<String> {
    (OPENING_HOUR..=CLOSING_HOUR)
        .map(|hour| format!("{:02}:00", hour))
        .collect()
}

pub fn is_studio_slot(time: &str) -> bool {
    studio_time_slots().iter().any(|slot| slot == time)
}

/// False for any slot on a past day, and on `now`'s own date for every slot
/// that has already started.
pub fn slot_is_open(slot: &str, date: NaiveDate, now: chrono::NaiveDateTime) -> bool {
    if date != now.date() {
        return date > now.date();
    }
    NaiveTime::parse_from_str(slot, "%H:%M")
        .map(|time| time.hour() > now.time().hour())
        .unwrap_or(false)
}

/// Slots still open on `date`: booked times are removed, and so is every
/// slot that has already started.
pub fn available_slots(booked: &[String], date: NaiveDate, now: chrono::NaiveDateTime) -> Vec<String> {
    studio_time_slots()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .filter(|slot| slot_is_open(slot, date, now))
        .collect()
}

/// Converts `14:00` to `2 PM`, `09:30` to `9:30 AM`.
pub fn convert_to_12_hour_format(time_24: &str) -> String {
    if let Some((hour_str, minute_str)) = time_24.split_once(':') {
        if let Ok(hour) = hour_str.parse::<u32>() {
            let (hour_12, period) = match hour {
                0 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                _ => (hour - 12, "PM"),
            };

            return if minute_str == "00" {
                format!("{} {}", hour_12, period)
            } else {
                format!("{}:{} {}", hour_12, minute_str, period)
            };
        }
    }
    time_24.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::entities::ServiceKind;
    use crate::db::mock_data;

    fn service(kind: ServiceKind) -> Service {
        mock_data::services().into_iter().find(|s| s.kind == kind).unwrap()
    }

    fn artist(id: i32) -> Artist {
        mock_data::artists().into_iter().find(|a| a.id == id).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn complete_draft() -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.select_service(service(ServiceKind::Tattoo));
        draft.select_artist(artist(1));
        draft.select_date("2026-10-21".to_string());
        draft.select_time("14:00".to_string());
        draft.client_name = "  Alex Rivera ".to_string();
        draft.client_email = "Alex@Example.com".to_string();
        draft
    }

    #[test]
    fn test_linear_steps() {
        assert_eq!(BookingStep::Service.next(), BookingStep::Artist);
        assert_eq!(BookingStep::Artist.next().next(), BookingStep::Details);
        assert_eq!(BookingStep::Details.next(), BookingStep::Details);
        assert_eq!(BookingStep::Service.prev(), BookingStep::Service);
        assert_eq!(BookingStep::Details.prev(), BookingStep::DateTime);
        assert_eq!(BookingStep::Service.progress_percentage(), 0.0);
        assert_eq!(BookingStep::Details.progress_percentage(), 75.0);
        assert_eq!(BookingStep::Confirmed.progress_percentage(), 100.0);
    }

    #[test]
    fn test_empty_draft_is_blocked_at_service() {
        let draft = BookingDraft::default();
        assert!(!draft.can_advance(BookingStep::Service, today()));
        assert_eq!(draft.first_incomplete_step(today()), Some(BookingStep::Service));
        assert_eq!(draft.to_new_appointment(today()), None);
    }

    #[test]
    fn test_changing_service_drops_artist_who_does_not_offer_it() {
        let mut draft = complete_draft();
        draft.select_service(service(ServiceKind::Piercing));
        assert!(draft.artist.is_none());
        assert!(draft.time.is_none());
        assert_eq!(draft.first_incomplete_step(today()), Some(BookingStep::Artist));

        let mut draft = complete_draft();
        draft.select_service(service(ServiceKind::Consultation));
        assert_eq!(draft.artist.as_ref().map(|a| a.id), Some(1));
        assert_eq!(draft.time.as_deref(), Some("14:00"));
    }

    #[test]
    fn test_changing_artist_or_date_clears_time() {
        let mut draft = complete_draft();
        draft.select_artist(artist(1));
        assert!(draft.time.is_some());
        draft.select_artist(artist(2));
        assert!(draft.time.is_none());

        let mut draft = complete_draft();
        draft.select_date("2026-10-22".to_string());
        assert!(draft.time.is_none());
    }

    #[test]
    fn test_sunday_is_rejected() {
        let mut draft = complete_draft();
        draft.select_date("2026-10-25".to_string());
        draft.select_time("12:00".to_string());
        assert_eq!(
            draft.step_errors(BookingStep::DateTime, today()),
            vec!["The studio is closed on Sundays".to_string()]
        );
    }

    #[test]
    fn test_past_date_is_rejected() {
        let mut draft = complete_draft();
        assert!(draft.can_advance(BookingStep::DateTime, today()));

        draft.select_date("2026-10-17".to_string());
        draft.select_time("12:00".to_string());
        assert_eq!(
            draft.step_errors(BookingStep::DateTime, today()),
            vec!["That date has already passed".to_string()]
        );
        assert_eq!(draft.first_incomplete_step(today()), Some(BookingStep::DateTime));
        assert_eq!(draft.to_new_appointment(today()), None);

        // Today itself is still bookable
        draft.select_date("2026-10-19".to_string());
        draft.select_time("17:00".to_string());
        assert!(draft.can_advance(BookingStep::DateTime, today()));
    }

    #[test]
    fn test_details_validation() {
        let mut draft = complete_draft();
        draft.client_name = String::new();
        draft.client_email = "nope".to_string();
        draft.client_phone = "123".to_string();
        assert_eq!(draft.step_errors(BookingStep::Details, today()).len(), 3);
    }

    #[test]
    fn test_to_new_appointment_normalizes_fields() {
        let mut draft = complete_draft();
        draft.placement = " forearm ".to_string();
        let request = draft.to_new_appointment(today()).unwrap();
        assert_eq!(request.service_id, 1);
        assert_eq!(request.artist_id, 1);
        assert_eq!(request.client_name, "Alex Rivera");
        assert_eq!(request.client_email, "alex@example.com");
        assert_eq!(request.client_phone, None);
        assert_eq!(request.placement.as_deref(), Some("forearm"));
        assert_eq!(draft.estimated_price(), Some(250.0));
    }

    #[test]
    fn test_available_slots() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        let earlier = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let booked = vec!["10:00".to_string(), "14:00".to_string()];
        let slots = available_slots(&booked, day, earlier);
        assert_eq!(slots.len(), studio_time_slots().len() - 2);
        assert!(!slots.contains(&"14:00".to_string()));

        let same_day = day.and_hms_opt(13, 30, 0).unwrap();
        assert_eq!(
            available_slots(&booked, day, same_day),
            vec!["15:00", "16:00", "17:00", "18:00"]
        );

        let later = NaiveDate::from_ymd_opt(2026, 10, 22)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert!(available_slots(&[], day, later).is_empty());
    }

    #[test]
    fn test_convert_to_12_hour_format() {
        assert_eq!(convert_to_12_hour_format("00:00"), "12 AM");
        assert_eq!(convert_to_12_hour_format("09:30"), "9:30 AM");
        assert_eq!(convert_to_12_hour_format("12:00"), "12 PM");
        assert_eq!(convert_to_12_hour_format("18:00"), "6 PM");
        assert_eq!(convert_to_12_hour_format("All Day"), "All Day");
    }
}
