use time::{util::days_in_year_month, Date, Month};

use crate::error::AppError;

/// Inclusive first-to-last-day range of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: Date,
    pub end: Date,
}

impl MonthWindow {
    pub fn new(year: i32, month: u8) -> Result<Self, AppError> {
        if !(1..=9999).contains(&year) {
            return Err(AppError::validation("year must be between 1 and 9999"));
        }
        let month = Month::try_from(month)
            .map_err(|_| AppError::validation("month must be between 1 and 12"))?;
        let last_day = days_in_year_month(year, month);

        let start = Date::from_calendar_date(year, month, 1)
            .map_err(|e| AppError::validation(e.to_string()))?;
        let end = Date::from_calendar_date(year, month, last_day)
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok(Self { start, end })
    }

    #[cfg(test)]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn leap_february() {
        let w = MonthWindow::new(2024, 2).unwrap();
        assert_eq!(w.start, date!(2024 - 02 - 01));
        assert_eq!(w.end, date!(2024 - 02 - 29));
    }

    #[test]
    fn common_february() {
        let w = MonthWindow::new(2023, 2).unwrap();
        assert_eq!(w.end, date!(2023 - 02 - 28));
        assert_eq!(MonthWindow::new(1900, 2).unwrap().end, date!(1900 - 02 - 28));
        assert_eq!(MonthWindow::new(2000, 2).unwrap().end, date!(2000 - 02 - 29));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(MonthWindow::new(2024, 4).unwrap().end, date!(2024 - 04 - 30));
        assert_eq!(MonthWindow::new(2024, 12).unwrap().end, date!(2024 - 12 - 31));
        assert_eq!(MonthWindow::new(2024, 1).unwrap().start, date!(2024 - 01 - 01));
    }

    #[test]
    fn bounds_are_inclusive() {
        let w = MonthWindow::new(2024, 3).unwrap();
        assert!(w.contains(date!(2024 - 03 - 01)));
        assert!(w.contains(date!(2024 - 03 - 31)));
        assert!(!w.contains(date!(2024 - 02 - 29)));
        assert!(!w.contains(date!(2024 - 04 - 01)));
    }

    #[test]
    fn rejects_out_of_range() {
        for (y, m) in [(2024, 0), (2024, 13), (0, 1), (10000, 1)] {
            assert!(matches!(MonthWindow::new(y, m), Err(AppError::Validation(_))));
        }
    }
}
