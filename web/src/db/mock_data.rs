use chrono::{Duration, NaiveDate};

use super::entities::{
    Account, Appointment, AppointmentStatus, Artist, Artwork, GalleryCategory, GalleryImage,
    Report, ReportCategory, ReportSeverity, ReportStatus, Service, ServiceKind, StaffMember,
    StaffRole, StaffStatus, UserRole,
};

pub const DEMO_CLIENT_EMAIL: &str = "alex@example.com";

fn image(seed: &str) -> String {
    format!("https://picsum.photos/seed/inkwell-{}/600/600", seed)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            name: "Custom Tattoo".to_string(),
            kind: ServiceKind::Tattoo,
            duration_minutes: 180,
            base_price: 250.0,
            description: "Original artwork designed with your artist and tattooed in one session."
                .to_string(),
        },
        Service {
            id: 2,
            name: "Flash Tattoo".to_string(),
            kind: ServiceKind::Tattoo,
            duration_minutes: 60,
            base_price: 120.0,
            description: "Pick a ready-made design from the flash wall.".to_string(),
        },
        Service {
            id: 3,
            name: "Ear or Facial Piercing".to_string(),
            kind: ServiceKind::Piercing,
            duration_minutes: 30,
            base_price: 60.0,
            description: "Implant-grade titanium jewelry included.".to_string(),
        },
        Service {
            id: 4,
            name: "Body Piercing".to_string(),
            kind: ServiceKind::Piercing,
            duration_minutes: 45,
            base_price: 80.0,
            description: "Navel, nipple and surface piercings with aftercare kit.".to_string(),
        },
        Service {
            id: 5,
            name: "Design Consultation".to_string(),
            kind: ServiceKind::Consultation,
            duration_minutes: 30,
            base_price: 0.0,
            description: "Talk through placement, size and budget before booking.".to_string(),
        },
        Service {
            id: 6,
            name: "Touch-up Session".to_string(),
            kind: ServiceKind::TouchUp,
            duration_minutes: 60,
            base_price: 75.0,
            description: "Refresh faded lines or fill healed patches.".to_string(),
        },
    ]
}

pub fn artists() -> Vec<Artist> {
    vec![
        Artist {
            id: 1,
            name: "Mara Quinn".to_string(),
            specialties: strings(&["Fine Line", "Botanical", "Minimalist"]),
            bio: "Mara works in delicate single-needle linework and has spent a decade drawing plants from life."
                .to_string(),
            years_experience: 10,
            rating: 4.9,
            review_count: 214,
            avatar_url: image("mara"),
            offers: vec![ServiceKind::Tattoo, ServiceKind::TouchUp],
            instagram: Some("@mara.ink".to_string()),
        },
        Artist {
            id: 2,
            name: "Diego Salas".to_string(),
            specialties: strings(&["Traditional", "Neo-Traditional"]),
            bio: "Bold lines, saturated color. Diego apprenticed in Los Angeles and still paints flash every week."
                .to_string(),
            years_experience: 14,
            rating: 4.8,
            review_count: 301,
            avatar_url: image("diego"),
            offers: vec![ServiceKind::Tattoo, ServiceKind::TouchUp],
            instagram: Some("@diegosalas.tattoo".to_string()),
        },
        Artist {
            id: 3,
            name: "Kenji Mori".to_string(),
            specialties: strings(&["Japanese", "Blackwork"]),
            bio: "Large-scale Japanese pieces and heavy blackwork. Kenji prefers multi-session projects."
                .to_string(),
            years_experience: 18,
            rating: 4.7,
            review_count: 158,
            avatar_url: image("kenji"),
            offers: vec![ServiceKind::Tattoo],
            instagram: None,
        },
        Artist {
            id: 4,
            name: "Sasha Volkova".to_string(),
            specialties: strings(&["Realism", "Black and Grey"]),
            bio: "Portraits and black-and-grey realism, built up in soft layers.".to_string(),
            years_experience: 7,
            rating: 4.6,
            review_count: 97,
            avatar_url: image("sasha"),
            offers: vec![ServiceKind::Tattoo, ServiceKind::TouchUp],
            instagram: Some("@sasha.realism".to_string()),
        },
        Artist {
            id: 5,
            name: "Priya Nair".to_string(),
            specialties: strings(&["Ear Curation", "Body Piercing"]),
            bio: "APP member piercer who loves building curated ear projects.".to_string(),
            years_experience: 8,
            rating: 5.0,
            review_count: 189,
            avatar_url: image("priya"),
            offers: vec![ServiceKind::Piercing],
            instagram: Some("@priya.pierces".to_string()),
        },
        Artist {
            id: 6,
            name: "Tom Becker".to_string(),
            specialties: strings(&["Body Piercing", "Minimalist"]),
            bio: "Piercer and apprentice tattooer focused on clean, simple pieces.".to_string(),
            years_experience: 3,
            rating: 4.5,
            review_count: 41,
            avatar_url: image("tom"),
            offers: vec![ServiceKind::Piercing, ServiceKind::Tattoo],
            instagram: None,
        },
    ]
}

pub fn artworks() -> Vec<Artwork> {
    let pieces: [(i32, &str, &str, &str); 16] = [
        (1, "Wild Fern Sleeve", "Botanical", "Half sleeve of native ferns in fine line."),
        (1, "Tiny Moon Phases", "Minimalist", "Wrist piece, healed at six weeks."),
        (1, "Peony Collarbone", "Fine Line", "Single-needle peony across the collarbone."),
        (2, "Swallow Pair", "Traditional", "Classic chest swallows in red and yellow."),
        (2, "Panther Head", "Traditional", "Forearm panther, bold outline and solid black."),
        (2, "Rose Dagger", "Neo-Traditional", "Saturated rose with an ornamental dagger."),
        (3, "Koi Back Piece", "Japanese", "Full back koi with wind bars, five sessions."),
        (3, "Hannya Mask", "Japanese", "Thigh piece with peonies."),
        (3, "Geometric Band", "Blackwork", "Solid black armband with dot shading."),
        (4, "Grandfather Portrait", "Realism", "Black and grey portrait from a 1960s photo."),
        (4, "Lion Study", "Black and Grey", "Upper arm lion, soft shading."),
        (4, "Hands of Time", "Realism", "Clock and hands composition on the calf."),
        (5, "Constellation Ear", "Ear Curation", "Five-piece curated ear with gold ends."),
        (5, "Daith and Rook", "Ear Curation", "Healed daith and rook pair."),
        (6, "Navel Gem", "Body Piercing", "Titanium navel curve with a bezel gem."),
        (6, "Small Arrow", "Minimalist", "Single-line arrow on the inner arm."),
    ];

    pieces
        .iter()
        .enumerate()
        .map(|(index, (artist_id, title, style, description))| Artwork {
            id: index as i32 + 1,
            artist_id: *artist_id,
            title: title.to_string(),
            style: style.to_string(),
            image_url: image(&format!("art-{}", index + 1)),
            description: description.to_string(),
        })
        .collect()
}

pub fn gallery() -> Vec<GalleryImage> {
    let items: [(&str, GalleryCategory, Option<i32>, &str); 10] = [
        ("Fern sleeve, healed", GalleryCategory::Tattoo, Some(1), "Two months healed."),
        ("Traditional swallows", GalleryCategory::Tattoo, Some(2), "Fresh out of the chair."),
        ("Koi in progress", GalleryCategory::Tattoo, Some(3), "Session three of five."),
        ("Realism portrait", GalleryCategory::Tattoo, Some(4), "Black and grey, single session."),
        ("Curated ear", GalleryCategory::Piercing, Some(5), "Helix, conch and lobe stack."),
        ("Septum clicker", GalleryCategory::Piercing, Some(5), "Titanium clicker."),
        ("Navel piercing", GalleryCategory::Piercing, Some(6), "With aftercare kit."),
        ("Front lounge", GalleryCategory::Studio, None, "Where consultations happen."),
        ("Flash wall", GalleryCategory::Studio, None, "New sheets every month."),
        ("Sterile station", GalleryCategory::Studio, None, "Single-use everything."),
    ];

    items
        .iter()
        .enumerate()
        .map(|(index, (title, category, artist_id, description))| GalleryImage {
            id: index as i32 + 1,
            title: title.to_string(),
            category: *category,
            artist_id: *artist_id,
            image_url: image(&format!("gallery-{}", index + 1)),
            description: description.to_string(),
        })
        .collect()
}

/// Appointments are laid out around `today` so the dashboard always has
/// something upcoming and something in the past.
pub fn appointments(today: NaiveDate) -> Vec<Appointment> {
    let day = |offset: i64| (today + Duration::days(offset)).format("%Y-%m-%d").to_string();
    let rows: [(&str, &str, i32, &str, ServiceKind, &str, i64, &str, AppointmentStatus, f64); 9] = [
        ("Alex Rivera", DEMO_CLIENT_EMAIL, 1, "Mara Quinn", ServiceKind::Tattoo, "Custom Tattoo", 5, "14:00", AppointmentStatus::Confirmed, 250.0),
        ("Alex Rivera", DEMO_CLIENT_EMAIL, 5, "Priya Nair", ServiceKind::Piercing, "Ear or Facial Piercing", 13, "11:00", AppointmentStatus::Pending, 60.0),
        ("Alex Rivera", DEMO_CLIENT_EMAIL, 2, "Diego Salas", ServiceKind::Tattoo, "Flash Tattoo", -20, "16:00", AppointmentStatus::Completed, 120.0),
        ("Alex Rivera", DEMO_CLIENT_EMAIL, 1, "Mara Quinn", ServiceKind::Consultation, "Design Consultation", -34, "10:00", AppointmentStatus::Completed, 0.0),
        ("Alex Rivera", DEMO_CLIENT_EMAIL, 4, "Sasha Volkova", ServiceKind::TouchUp, "Touch-up Session", -9, "13:00", AppointmentStatus::Cancelled, 75.0),
        ("Jordan Lee", "jordan@example.com", 1, "Mara Quinn", ServiceKind::Tattoo, "Custom Tattoo", 5, "10:00", AppointmentStatus::Confirmed, 250.0),
        ("Jordan Lee", "jordan@example.com", 3, "Kenji Mori", ServiceKind::Tattoo, "Custom Tattoo", 3, "12:00", AppointmentStatus::Pending, 250.0),
        ("Sam Patel", "sam@example.com", 2, "Diego Salas", ServiceKind::Tattoo, "Flash Tattoo", 1, "15:00", AppointmentStatus::Confirmed, 120.0),
        ("Sam Patel", "sam@example.com", 5, "Priya Nair", ServiceKind::Piercing, "Body Piercing", 2, "11:00", AppointmentStatus::Pending, 80.0),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(index, (client_name, email, artist_id, artist_name, service, service_name, offset, time, status, price))| {
                Appointment {
                    id: index as i32 + 1,
                    client_name: client_name.to_string(),
                    client_email: email.to_string(),
                    artist_id: *artist_id,
                    artist_name: artist_name.to_string(),
                    service: *service,
                    service_name: service_name.to_string(),
                    date: day(*offset),
                    time: time.to_string(),
                    status: *status,
                    price: *price,
                    notes: None,
                }
            },
        )
        .collect()
}

pub fn reports() -> Vec<Report> {
    // Mixed date formats on purpose: these came in from different intake forms.
    let rows: [(&str, &str, &str, &str, ReportCategory, &str, ReportSeverity, ReportStatus, &str); 7] = [
        ("Jordan Lee", "jordan@example.com", "Tom Becker", "Piercer", ReportCategory::Hygiene,
         "Gloves were not changed after handling the phone.", ReportSeverity::High, ReportStatus::Pending, "2026-10-14 09:12"),
        ("Sam Patel", "sam@example.com", "Front desk", "Staff", ReportCategory::Payment,
         "Deposit was charged twice.", ReportSeverity::Medium, ReportStatus::Investigating, "2026-10-11"),
        ("Diego Salas", "diego@inkwell.studio", "Chris Doe", "Client", ReportCategory::NoShow,
         "Third missed appointment without notice.", ReportSeverity::Low, ReportStatus::Resolved, "Sep 28, 2026"),
        ("Riley Chen", "riley@example.com", "Anonymous user", "Client", ReportCategory::Harassment,
         "Repeated abusive messages left on an artist's portfolio.", ReportSeverity::Critical, ReportStatus::Pending, "2026-10-16 18:40"),
        ("Morgan Fox", "morgan@example.com", "Sasha Volkova", "Artist", ReportCategory::Quality,
         "Line blowout on a fine-line piece.", ReportSeverity::Medium, ReportStatus::Pending, "Oct 3, 2026"),
        ("Casey Moore", "casey@example.com", "Booking page", "Website", ReportCategory::Other,
         "Calendar would not let me pick a Saturday.", ReportSeverity::Low, ReportStatus::Dismissed, "2026-09-19"),
        ("Jamie Ortiz", "jamie@example.com", "Kenji Mori", "Artist", ReportCategory::Other,
         "Asked for a reschedule, no answer yet.", ReportSeverity::Low, ReportStatus::Pending, "last week"),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(index, (reporter, email, reported, role, category, description, severity, status, created_at))| Report {
                id: index as i32 + 1,
                reporter_name: reporter.to_string(),
                reporter_email: email.to_string(),
                reported_name: reported.to_string(),
                reported_role: role.to_string(),
                category: *category,
                description: description.to_string(),
                severity: *severity,
                status: *status,
                created_at: created_at.to_string(),
            },
        )
        .collect()
}

pub fn staff() -> Vec<StaffMember> {
    let rows: [(&str, StaffRole, StaffStatus, &[&str], &str, f32, u32, f64, f32); 9] = [
        ("Mara Quinn", StaffRole::Artist, StaffStatus::Active, &["Fine Line", "Botanical"], "2019-03-01", 4.9, 412, 98_400.0, 0.62),
        ("Diego Salas", StaffRole::Artist, StaffStatus::Active, &["Traditional"], "2016-06-15", 4.8, 655, 131_200.0, 0.58),
        ("Kenji Mori", StaffRole::Artist, StaffStatus::OnLeave, &["Japanese", "Blackwork"], "2015-01-10", 4.7, 290, 142_000.0, 0.71),
        ("Sasha Volkova", StaffRole::Artist, StaffStatus::Active, &["Realism"], "2021-09-20", 4.6, 188, 51_300.0, 0.44),
        ("Priya Nair", StaffRole::Piercer, StaffStatus::Active, &["Ear Curation"], "2020-02-03", 5.0, 1_204, 72_900.0, 0.66),
        ("Tom Becker", StaffRole::Apprentice, StaffStatus::Active, &["Body Piercing"], "2024-05-12", 4.5, 96, 7_800.0, 0.31),
        ("Lena Hart", StaffRole::FrontDesk, StaffStatus::Active, &["Scheduling"], "2022-11-07", 4.8, 0, 0.0, 0.0),
        ("Omar Haddad", StaffRole::Manager, StaffStatus::Active, &["Operations"], "2015-01-10", 4.9, 0, 0.0, 0.0),
        ("Ivy Clarke", StaffRole::Piercer, StaffStatus::Inactive, &["Body Piercing"], "2018-08-30", 4.2, 340, 19_500.0, 0.38),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(index, (name, role, status, specialties, joined, rating, bookings, revenue, rebook))| {
                let handle = name.split_whitespace().next().unwrap_or("staff").to_lowercase();
                StaffMember {
                    id: index as i32 + 1,
                    name: name.to_string(),
                    role: *role,
                    status: *status,
                    email: format!("{}@inkwell.studio", handle),
                    phone: format!("(555) 010-{:04}", 1000 + index * 37),
                    specialties: strings(specialties),
                    joined: joined.to_string(),
                    rating: *rating,
                    completed_bookings: *bookings,
                    revenue: *revenue,
                    rebook_rate: *rebook,
                    avatar_url: image(&format!("staff-{}", handle)),
                }
            },
        )
        .collect()
}

pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            email: DEMO_CLIENT_EMAIL.to_string(),
            password: "password123".to_string(),
            display_name: "Alex Rivera".to_string(),
            role: UserRole::Client,
        },
        Account {
            email: "jordan@example.com".to_string(),
            password: "password123".to_string(),
            display_name: "Jordan Lee".to_string(),
            role: UserRole::Client,
        },
        Account {
            email: "admin@inkwell.studio".to_string(),
            password: "admin123".to_string(),
            display_name: "Omar Haddad".to_string(),
            role: UserRole::Admin,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let appointment_ids: HashSet<i32> = appointments(today).iter().map(|a| a.id).collect();
        assert_eq!(appointment_ids.len(), appointments(today).len());
        let artwork_ids: HashSet<i32> = artworks().iter().map(|a| a.id).collect();
        assert_eq!(artwork_ids.len(), artworks().len());
    }

    #[test]
    fn test_artist_references_resolve() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let artist_ids: HashSet<i32> = artists().iter().map(|a| a.id).collect();
        assert!(artworks().iter().all(|a| artist_ids.contains(&a.artist_id)));
        assert!(appointments(today).iter().all(|a| artist_ids.contains(&a.artist_id)));
        assert!(gallery()
            .iter()
            .filter_map(|g| g.artist_id)
            .all(|id| artist_ids.contains(&id)));
    }

    #[test]
    fn test_appointments_follow_today() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        let first = &appointments(today)[0];
        assert_eq!(first.date, "2027-01-04");
    }
}
