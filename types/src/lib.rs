use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Tattoo,
    Piercing,
    Consultation,
    TouchUp,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Tattoo,
        ServiceKind::Piercing,
        ServiceKind::Consultation,
        ServiceKind::TouchUp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Tattoo => "Tattoo",
            ServiceKind::Piercing => "Piercing",
            ServiceKind::Consultation => "Consultation",
            ServiceKind::TouchUp => "Touch-up",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ServiceKind::Tattoo => "tattoo",
            ServiceKind::Piercing => "piercing",
            ServiceKind::Consultation => "consultation",
            ServiceKind::TouchUp => "touch_up",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub kind: ServiceKind,
    pub duration_minutes: u32,
    pub base_price: f64,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub specialties: Vec<String>,
    pub bio: String,
    pub years_experience: u32,
    pub rating: f32,
    pub review_count: u32,
    pub avatar_url: String,
    pub offers: Vec<ServiceKind>,
    pub instagram: Option<String>,
}

impl Artist {
    pub fn offers(&self, kind: ServiceKind) -> bool {
        // Every artist takes consultations
        kind == ServiceKind::Consultation || self.offers.contains(&kind)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Artwork {
    pub id: i32,
    pub artist_id: i32,
    pub title: String,
    pub style: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GalleryCategory {
    Tattoo,
    Piercing,
    Studio,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 3] = [
        GalleryCategory::Tattoo,
        GalleryCategory::Piercing,
        GalleryCategory::Studio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Tattoo => "Tattoos",
            GalleryCategory::Piercing => "Piercings",
            GalleryCategory::Studio => "Studio",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            GalleryCategory::Tattoo => "tattoo",
            GalleryCategory::Piercing => "piercing",
            GalleryCategory::Studio => "studio",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: i32,
    pub title: String,
    pub category: GalleryCategory,
    pub artist_id: Option<i32>,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the appointment still occupies its slot on the artist's calendar.
    pub fn holds_slot(&self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub client_name: String,
    pub client_email: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub service: ServiceKind,
    pub service_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub status: AppointmentStatus,
    pub price: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Harassment,
    Hygiene,
    NoShow,
    Payment,
    Quality,
    Other,
}

impl ReportCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Harassment => "Harassment",
            ReportCategory::Hygiene => "Hygiene",
            ReportCategory::NoShow => "No-show",
            ReportCategory::Payment => "Payment",
            ReportCategory::Quality => "Work quality",
            ReportCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportSeverity {
    pub const ALL: [ReportSeverity; 4] = [
        ReportSeverity::Low,
        ReportSeverity::Medium,
        ReportSeverity::High,
        ReportSeverity::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportSeverity::Low => "Low",
            ReportSeverity::Medium => "Medium",
            ReportSeverity::High => "High",
            ReportSeverity::Critical => "Critical",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ReportSeverity::Low => "low",
            ReportSeverity::Medium => "medium",
            ReportSeverity::High => "high",
            ReportSeverity::Critical => "critical",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|severity| severity.slug() == slug)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Investigating,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Pending,
        ReportStatus::Investigating,
        ReportStatus::Resolved,
        ReportStatus::Dismissed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Investigating => "Investigating",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Dismissed => "Dismissed",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Investigating => "investigating",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Dismissed => "dismissed",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.slug() == slug)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ReportStatus::Pending | ReportStatus::Investigating)
    }

    /// Closed reports can only be reopened; open ones can move forward or be closed.
    pub fn can_transition_to(&self, next: ReportStatus) -> bool {
        use ReportStatus::*;
        matches!(
            (self, next),
            (Pending, Investigating)
                | (Pending, Resolved)
                | (Pending, Dismissed)
                | (Investigating, Resolved)
                | (Investigating, Dismissed)
                | (Resolved, Pending)
                | (Dismissed, Pending)
        )
    }

    pub fn next_actions(&self) -> Vec<ReportStatus> {
        Self::ALL
            .into_iter()
            .filter(|next| self.can_transition_to(*next))
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Report {
    pub id: i32,
    pub reporter_name: String,
    pub reporter_email: String,
    pub reported_name: String,
    pub reported_role: String,
    pub category: ReportCategory,
    pub description: String,
    pub severity: ReportSeverity,
    pub status: ReportStatus,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Artist,
    Piercer,
    Apprentice,
    FrontDesk,
    Manager,
}

impl StaffRole {
    pub const ALL: [StaffRole; 5] = [
        StaffRole::Artist,
        StaffRole::Piercer,
        StaffRole::Apprentice,
        StaffRole::FrontDesk,
        StaffRole::Manager,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::Artist => "Tattoo Artist",
            StaffRole::Piercer => "Piercer",
            StaffRole::Apprentice => "Apprentice",
            StaffRole::FrontDesk => "Front Desk",
            StaffRole::Manager => "Manager",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            StaffRole::Artist => "artist",
            StaffRole::Piercer => "piercer",
            StaffRole::Apprentice => "apprentice",
            StaffRole::FrontDesk => "front_desk",
            StaffRole::Manager => "manager",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.slug() == slug)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    Active,
    OnLeave,
    Inactive,
}

impl StaffStatus {
    pub const ALL: [StaffStatus; 3] = [StaffStatus::Active, StaffStatus::OnLeave, StaffStatus::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::OnLeave => "On leave",
            StaffStatus::Inactive => "Inactive",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::OnLeave => "on_leave",
            StaffStatus::Inactive => "inactive",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.slug() == slug)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StaffMember {
    pub id: i32,
    pub name: String,
    pub role: StaffRole,
    pub status: StaffStatus,
    pub email: String,
    pub phone: String,
    pub specialties: Vec<String>,
    pub joined: String,
    pub rating: f32,
    pub completed_bookings: u32,
    pub revenue: f64,
    /// Fraction of clients who booked again, 0.0..=1.0
    pub rebook_rate: f32,
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_transitions() {
        assert!(ReportStatus::Pending.can_transition_to(ReportStatus::Investigating));
        assert!(ReportStatus::Investigating.can_transition_to(ReportStatus::Resolved));
        assert!(ReportStatus::Resolved.can_transition_to(ReportStatus::Pending));
        assert!(!ReportStatus::Investigating.can_transition_to(ReportStatus::Pending));
        assert!(!ReportStatus::Resolved.can_transition_to(ReportStatus::Dismissed));
        assert!(!ReportStatus::Pending.can_transition_to(ReportStatus::Pending));
    }

    #[test]
    fn test_next_actions() {
        assert_eq!(
            ReportStatus::Investigating.next_actions(),
            vec![ReportStatus::Resolved, ReportStatus::Dismissed]
        );
        assert_eq!(ReportStatus::Dismissed.next_actions(), vec![ReportStatus::Pending]);
    }

    #[test]
    fn test_slugs() {
        assert_eq!(StaffRole::from_slug("front_desk"), Some(StaffRole::FrontDesk));
        assert_eq!(ServiceKind::from_slug("touch_up"), Some(ServiceKind::TouchUp));
        assert_eq!(ReportSeverity::from_slug("urgent"), None);
        for status in StaffStatus::ALL {
            assert_eq!(StaffStatus::from_slug(status.slug()), Some(status));
        }
    }

    #[test]
    fn test_wire_names_match_slugs() {
        let json = serde_json::to_string(&StaffStatus::OnLeave).unwrap();
        assert_eq!(json, "\"on_leave\"");
        let parsed: ReportStatus = serde_json::from_str("\"investigating\"").unwrap();
        assert_eq!(parsed, ReportStatus::Investigating);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ReportSeverity::Critical > ReportSeverity::High);
        assert!(ReportSeverity::Low < ReportSeverity::Medium);
    }

    #[test]
    fn test_artist_offers_consultation() {
        let artist = Artist {
            id: 1,
            name: "Test".to_string(),
            specialties: vec![],
            bio: String::new(),
            years_experience: 1,
            rating: 4.0,
            review_count: 0,
            avatar_url: String::new(),
            offers: vec![ServiceKind::Piercing],
            instagram: None,
        };
        assert!(artist.offers(ServiceKind::Consultation));
        assert!(artist.offers(ServiceKind::Piercing));
        assert!(!artist.offers(ServiceKind::Tattoo));
    }
}
