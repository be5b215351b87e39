use std::cmp::Ordering;

use crate::db::entities::{StaffMember, StaffRole, StaffStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaffSort {
    #[default]
    Name,
    Rating,
    Bookings,
    Revenue,
}

impl StaffSort {
    pub const ALL: [StaffSort; 4] = [
        StaffSort::Name,
        StaffSort::Rating,
        StaffSort::Bookings,
        StaffSort::Revenue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StaffSort::Name => "Name",
            StaffSort::Rating => "Rating",
            StaffSort::Bookings => "Bookings",
            StaffSort::Revenue => "Revenue",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            StaffSort::Name => "name",
            StaffSort::Rating => "rating",
            StaffSort::Bookings => "bookings",
            StaffSort::Revenue => "revenue",
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.slug() == slug)
            .unwrap_or_default()
    }

    fn compare(&self, a: &StaffMember, b: &StaffMember) -> Ordering {
        match self {
            StaffSort::Name => a.name.cmp(&b.name),
            StaffSort::Rating => b.rating.total_cmp(&a.rating),
            StaffSort::Bookings => b.completed_bookings.cmp(&a.completed_bookings),
            StaffSort::Revenue => b.revenue.total_cmp(&a.revenue),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaffFilter {
    pub role: Option<StaffRole>,
    pub status: Option<StaffStatus>,
    pub query: String,
}

impl StaffFilter {
    pub fn matches(&self, member: &StaffMember) -> bool {
        if self.role.is_some_and(|role| member.role != role) {
            return false;
        }
        if self.status.is_some_and(|status| member.status != status) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || member.name.to_lowercase().contains(&query)
            || member.email.to_lowercase().contains(&query)
            || member
                .specialties
                .iter()
                .any(|s| s.to_lowercase().contains(&query))
    }
}

/// Sorts descending for the numeric columns, alphabetically for names.
/// Ties fall back to name order so the table does not jump around.
pub fn filter_and_sort_staff(
    staff: &[StaffMember],
    filter: &StaffFilter,
    sort: StaffSort,
) -> Vec<StaffMember> {
    let mut filtered: Vec<StaffMember> = staff.iter().filter(|m| filter.matches(m)).cloned().collect();
    filtered.sort_by(|a, b| sort.compare(a, b).then_with(|| a.name.cmp(&b.name)));
    filtered
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaffSummary {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub average_rating: f32,
    pub total_revenue: f64,
    pub total_bookings: u32,
}

/// Ratings are averaged over people who take bookings; front desk and
/// management have no client-facing rating worth mixing in.
pub fn summarize(staff: &[StaffMember]) -> StaffSummary {
    let booked: Vec<&StaffMember> = staff.iter().filter(|m| m.completed_bookings > 0).collect();
    let average_rating = if booked.is_empty() {
        0.0
    } else {
        booked.iter().map(|m| m.rating).sum::<f32>() / booked.len() as f32
    };

    StaffSummary {
        total: staff.len(),
        active: staff.iter().filter(|m| m.status == StaffStatus::Active).count(),
        on_leave: staff.iter().filter(|m| m.status == StaffStatus::OnLeave).count(),
        average_rating,
        total_revenue: staff.iter().map(|m| m.revenue).sum(),
        total_bookings: staff.iter().map(|m| m.completed_bookings).sum(),
    }
}

pub fn format_revenue(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn format_percent(fraction: f32) -> String {
    format!("{:.0}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::mock_data;

    fn names(staff: &[StaffMember]) -> Vec<&str> {
        staff.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_filter_by_role_and_status() {
        let staff = mock_data::staff();
        let filter = StaffFilter {
            role: Some(StaffRole::Piercer),
            status: Some(StaffStatus::Active),
            query: String::new(),
        };
        assert_eq!(names(&filter_and_sort_staff(&staff, &filter, StaffSort::Name)), vec!["Priya Nair"]);
    }

    #[test]
    fn test_query_matches_specialties() {
        let staff = mock_data::staff();
        let filter = StaffFilter {
            query: "body pier".to_string(),
            ..Default::default()
        };
        assert_eq!(
            names(&filter_and_sort_staff(&staff, &filter, StaffSort::Name)),
            vec!["Ivy Clarke", "Tom Becker"]
        );
    }

    #[test]
    fn test_sorting() {
        let staff = mock_data::staff();
        let filter = StaffFilter::default();
        let by_revenue = filter_and_sort_staff(&staff, &filter, StaffSort::Revenue);
        assert_eq!(by_revenue[0].name, "Kenji Mori");
        let by_bookings = filter_and_sort_staff(&staff, &filter, StaffSort::Bookings);
        assert_eq!(by_bookings[0].name, "Priya Nair");
        // Mara and Omar both sit at 4.9; names break the tie
        let by_rating = filter_and_sort_staff(&staff, &filter, StaffSort::Rating);
        assert_eq!(names(&by_rating[..3]), vec!["Priya Nair", "Mara Quinn", "Omar Haddad"]);
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&mock_data::staff());
        assert_eq!(summary.total, 9);
        assert_eq!(summary.active, 7);
        assert_eq!(summary.on_leave, 1);
        assert_eq!(summary.total_bookings, 3_185);
        assert!((summary.average_rating - 4.6714).abs() < 0.001);
        assert!(summarize(&[]).average_rating == 0.0);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_revenue(523_100.0), "$523,100");
        assert_eq!(format_revenue(999.6), "$1,000");
        assert_eq!(format_revenue(0.0), "$0");
        assert_eq!(format_percent(0.62), "62%");
        assert_eq!(StaffSort::from_slug("unknown"), StaffSort::Name);
    }
}
