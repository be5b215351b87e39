use chrono::NaiveDate;

use super::calendar::parse_iso_date;
use crate::db::entities::{Appointment, AppointmentStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentTab {
    Upcoming,
    Past,
    Cancelled,
}

impl AppointmentTab {
    pub const ALL: [AppointmentTab; 3] = [
        AppointmentTab::Upcoming,
        AppointmentTab::Past,
        AppointmentTab::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentTab::Upcoming => "Upcoming",
            AppointmentTab::Past => "Past",
            AppointmentTab::Cancelled => "Cancelled",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            AppointmentTab::Upcoming => "No upcoming appointments. Ready for your next piece?",
            AppointmentTab::Past => "No past appointments yet.",
            AppointmentTab::Cancelled => "Nothing cancelled.",
        }
    }

    fn matches(&self, appointment: &Appointment, today: NaiveDate) -> bool {
        let date = parse_iso_date(&appointment.date);
        match self {
            AppointmentTab::Cancelled => appointment.status == AppointmentStatus::Cancelled,
            AppointmentTab::Upcoming => {
                appointment.status.holds_slot() && date.is_some_and(|d| d >= today)
            }
            // Open appointments whose day has gone by count as past too
            AppointmentTab::Past => {
                appointment.status == AppointmentStatus::Completed
                    || (appointment.status.holds_slot() && date.is_some_and(|d| d < today))
            }
        }
    }
}

fn sort_key(appointment: &Appointment) -> (String, String) {
    (appointment.date.clone(), appointment.time.clone())
}

/// Upcoming appointments come soonest first, everything else most recent first.
pub fn filter_appointments(
    appointments: &[Appointment],
    tab: AppointmentTab,
    today: NaiveDate,
) -> Vec<Appointment> {
    let mut filtered: Vec<Appointment> = appointments
        .iter()
        .filter(|a| tab.matches(a, today))
        .cloned()
        .collect();

    match tab {
        AppointmentTab::Upcoming => filtered.sort_by_key(sort_key),
        AppointmentTab::Past | AppointmentTab::Cancelled => {
            filtered.sort_by_key(|a| std::cmp::Reverse(sort_key(a)))
        }
    }
    filtered
}

pub fn count_for(appointments: &[Appointment], tab: AppointmentTab, today: NaiveDate) -> usize {
    appointments.iter().filter(|a| tab.matches(a, today)).count()
}

pub fn is_cancellable(appointment: &Appointment, today: NaiveDate) -> bool {
    appointment.status.holds_slot()
        && parse_iso_date(&appointment.date).is_some_and(|d| d >= today)
}

pub fn total_spent(appointments: &[Appointment]) -> f64 {
    appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .map(|a| a.price)
        .sum()
}

pub fn next_appointment(appointments: &[Appointment], today: NaiveDate) -> Option<Appointment> {
    filter_appointments(appointments, AppointmentTab::Upcoming, today)
        .into_iter()
        .next()
}

pub fn format_price(amount: f64) -> String {
    if amount == 0.0 {
        "Free".to_string()
    } else if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::mock_data::{self, DEMO_CLIENT_EMAIL};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn mine() -> Vec<Appointment> {
        mock_data::appointments(today())
            .into_iter()
            .filter(|a| a.client_email == DEMO_CLIENT_EMAIL)
            .collect()
    }

    #[test]
    fn test_tabs_partition_the_demo_client() {
        let appointments = mine();
        let total: usize = AppointmentTab::ALL
            .iter()
            .map(|tab| count_for(&appointments, *tab, today()))
            .sum();
        assert_eq!(total, appointments.len());
        assert_eq!(count_for(&appointments, AppointmentTab::Upcoming, today()), 2);
        assert_eq!(count_for(&appointments, AppointmentTab::Past, today()), 2);
        assert_eq!(count_for(&appointments, AppointmentTab::Cancelled, today()), 1);
    }

    #[test]
    fn test_ordering() {
        let appointments = mine();
        let upcoming = filter_appointments(&appointments, AppointmentTab::Upcoming, today());
        assert_eq!(upcoming[0].date, "2026-10-24");
        assert_eq!(upcoming[1].date, "2026-11-01");

        let past = filter_appointments(&appointments, AppointmentTab::Past, today());
        assert_eq!(past[0].date, "2026-09-29");
        assert_eq!(past[1].date, "2026-09-15");
    }

    #[test]
    fn test_stale_confirmed_appointment_counts_as_past() {
        let mut appointments = mine();
        appointments[0].date = "2026-10-01".to_string();
        let past = filter_appointments(&appointments, AppointmentTab::Past, today());
        assert_eq!(past.len(), 3);
        assert!(!is_cancellable(&appointments[0], today()));
    }

    #[test]
    fn test_cancellable_and_spending() {
        let appointments = mine();
        let next = next_appointment(&appointments, today()).unwrap();
        assert!(is_cancellable(&next, today()));
        assert_eq!(total_spent(&appointments), 120.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "Free");
        assert_eq!(format_price(250.0), "$250");
        assert_eq!(format_price(79.5), "$79.50");
    }
}
