use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

use crate::db::entities::{Report, ReportSeverity, ReportStatus};

/// Accepts the formats the intake forms have produced over time.
pub fn parse_report_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Some(parsed);
    }
    ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn format_report_date(value: &str) -> String {
    match parse_report_date(value) {
        Some(parsed) if parsed.time() == chrono::NaiveTime::MIN => {
            parsed.format("%b %-d, %Y").to_string()
        }
        Some(parsed) => parsed.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => value.to_string(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportFilter {
    pub status: Option<ReportStatus>,
    pub severity: Option<ReportSeverity>,
    pub query: String,
}

impl ReportFilter {
    pub fn matches(&self, report: &Report) -> bool {
        if self.status.is_some_and(|status| report.status != status) {
            return false;
        }
        if self.severity.is_some_and(|severity| report.severity != severity) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            &report.reporter_name,
            &report.reported_name,
            &report.description,
            &report.reporter_email,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
            || report.category.label().to_lowercase().contains(&query)
    }
}

fn newest_first(a: &Report, b: &Report) -> Ordering {
    match (parse_report_date(&a.created_at), parse_report_date(&b.created_at)) {
        (Some(a_date), Some(b_date)) => b_date.cmp(&a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

/// Newest reports first; reports whose date cannot be read sink to the bottom.
/// Ties on the same timestamp put the more severe report first.
pub fn filter_and_sort_reports(reports: &[Report], filter: &ReportFilter) -> Vec<Report> {
    let mut filtered: Vec<Report> = reports
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| newest_first(a, b).then_with(|| b.severity.cmp(&a.severity)));
    filtered
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub investigating: usize,
    pub resolved: usize,
    pub dismissed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: ReportStatus) -> usize {
        match status {
            ReportStatus::Pending => self.pending,
            ReportStatus::Investigating => self.investigating,
            ReportStatus::Resolved => self.resolved,
            ReportStatus::Dismissed => self.dismissed,
        }
    }

    pub fn open(&self) -> usize {
        self.pending + self.investigating
    }
}

pub fn status_counts(reports: &[Report]) -> StatusCounts {
    reports
        .iter()
        .fold(StatusCounts::default(), |mut counts, report| {
            match report.status {
                ReportStatus::Pending => counts.pending += 1,
                ReportStatus::Investigating => counts.investigating += 1,
                ReportStatus::Resolved => counts.resolved += 1,
                ReportStatus::Dismissed => counts.dismissed += 1,
            }
            counts
        })
}

pub fn action_label(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Pending => "Reopen",
        ReportStatus::Investigating => "Start investigation",
        ReportStatus::Resolved => "Mark resolved",
        ReportStatus::Dismissed => "Dismiss",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::mock_data;

    #[test]
    fn test_parse_report_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 9, 28)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_report_date("Sep 28, 2026"), Some(expected));
        assert_eq!(parse_report_date("September 28, 2026"), Some(expected));
        assert_eq!(parse_report_date("2026-09-28"), Some(expected));
        assert_eq!(
            parse_report_date("2026-09-28 18:40"),
            Some(expected.date().and_hms_opt(18, 40, 0).unwrap())
        );
        assert_eq!(parse_report_date("last week"), None);
    }

    #[test]
    fn test_format_report_date() {
        assert_eq!(format_report_date("2026-10-16 18:40"), "Oct 16, 2026 6:40 PM");
        assert_eq!(format_report_date("Oct 3, 2026"), "Oct 3, 2026");
        assert_eq!(format_report_date("last week"), "last week");
    }

    #[test]
    fn test_sorted_newest_first_with_unknown_dates_last() {
        let sorted = filter_and_sort_reports(&mock_data::reports(), &ReportFilter::default());
        let dates: Vec<&str> = sorted.iter().map(|r| r.created_at.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2026-10-16 18:40",
                "2026-10-14 09:12",
                "2026-10-11",
                "Oct 3, 2026",
                "Sep 28, 2026",
                "2026-09-19",
                "last week",
            ]
        );
    }

    #[test]
    fn test_same_timestamp_orders_by_severity() {
        let mut reports = mock_data::reports();
        for report in reports.iter_mut() {
            report.created_at = "2026-10-01".to_string();
        }
        let sorted = filter_and_sort_reports(&reports, &ReportFilter::default());
        assert_eq!(sorted[0].severity, ReportSeverity::Critical);
        assert_eq!(sorted.last().unwrap().severity, ReportSeverity::Low);
    }

    #[test]
    fn test_filters_combine() {
        let reports = mock_data::reports();
        let filter = ReportFilter {
            status: Some(ReportStatus::Pending),
            severity: None,
            query: "KENJI".to_string(),
        };
        let found = filter_and_sort_reports(&reports, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].reported_name, "Kenji Mori");

        let filter = ReportFilter {
            status: None,
            severity: Some(ReportSeverity::Low),
            query: "no-show".to_string(),
        };
        assert_eq!(filter_and_sort_reports(&reports, &filter).len(), 1);
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&mock_data::reports());
        assert_eq!(counts.pending, 4);
        assert_eq!(counts.get(ReportStatus::Investigating), 1);
        assert_eq!(counts.open(), 5);
        assert_eq!(counts.resolved + counts.dismissed, 2);
    }
}
