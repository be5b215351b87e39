use chrono::{Datelike, NaiveDate, Weekday};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The studio does not take appointments on Sundays.
pub fn is_closed(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let month = CalendarMonth::new(year, month);
    let next = month.next();
    match (month.first_day(), next.first_day()) {
        (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
        _ => 0,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(CalendarDay),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_past: bool,
    pub is_closed: bool,
}

impl CalendarDay {
    pub fn is_selectable(&self) -> bool {
        !self.is_past && !self.is_closed
    }

    pub fn iso(&self) -> String {
        format_iso_date(self.date)
    }
}

/// Builds the cells for one month, weeks starting on Sunday. The result is
/// always whole weeks: blanks pad both ends.
pub fn month_grid(month: CalendarMonth, today: NaiveDate) -> Vec<CalendarCell> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![CalendarCell::Blank; leading];

    cells.extend(first.iter_days().take_while(|d| d.month() == month.month).map(|date| {
        CalendarCell::Day(CalendarDay {
            date,
            is_today: date == today,
            is_past: date < today,
            is_closed: is_closed(date),
        })
    }));

    while cells.len() % 7 != 0 {
        cells.push(CalendarCell::Blank);
    }

    cells
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// `2026-11-02` becomes `Monday, November 2, 2026`; anything unparseable is
/// returned unchanged.
pub fn format_long_date(value: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

pub fn format_short_date(value: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days(cells: &[CalendarCell]) -> Vec<&CalendarDay> {
        cells
            .iter()
            .filter_map(|cell| match cell {
                CalendarCell::Day(day) => Some(day),
                CalendarCell::Blank => None,
            })
            .collect()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let december = CalendarMonth::new(2026, 12);
        assert_eq!(december.next(), CalendarMonth::new(2027, 1));
        assert_eq!(CalendarMonth::new(2027, 1).prev(), december);
        assert_eq!(CalendarMonth::new(2026, 6).next().prev(), CalendarMonth::new(2026, 6));
        assert_eq!(december.title(), "December 2026");
    }

    #[test]
    fn test_grid_leading_blanks() {
        // October 1st 2026 is a Thursday
        let cells = month_grid(CalendarMonth::new(2026, 10), date(2026, 10, 19));
        assert!(cells[..4].iter().all(|c| *c == CalendarCell::Blank));
        match &cells[4] {
            CalendarCell::Day(day) => assert_eq!(day.date, date(2026, 10, 1)),
            CalendarCell::Blank => panic!("expected the 1st in the Thursday column"),
        }
        assert_eq!(cells.len() % 7, 0);
        assert_eq!(days(&cells).len(), 31);
    }

    #[test]
    fn test_grid_without_padding() {
        // February 2026 starts on a Sunday and has exactly four weeks
        let cells = month_grid(CalendarMonth::new(2026, 2), date(2026, 1, 1));
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|c| *c != CalendarCell::Blank));
    }

    #[test]
    fn test_day_flags() {
        let today = date(2026, 10, 19);
        let cells = month_grid(CalendarMonth::new(2026, 10), today);
        let days = days(&cells);

        let yesterday = days.iter().find(|d| d.date == date(2026, 10, 18)).unwrap();
        assert!(yesterday.is_past);
        assert!(!yesterday.is_selectable());

        let current = days.iter().find(|d| d.date == today).unwrap();
        assert!(current.is_today);
        assert!(current.is_selectable());

        let sunday = days.iter().find(|d| d.date == date(2026, 10, 25)).unwrap();
        assert!(sunday.is_closed);
        assert!(!sunday.is_selectable());
        assert_eq!(sunday.iso(), "2026-10-25");
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(format_long_date("2026-11-02"), "Monday, November 2, 2026");
        assert_eq!(format_short_date("2026-11-02"), "Nov 2, 2026");
        assert_eq!(format_long_date("soon"), "soon");
        assert_eq!(parse_iso_date(" 2026-02-30 "), None);
    }
}
