//! Date range and month slice types for report dispatch.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range. Callers uphold `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A single-day range.
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Whether both endpoints fall in the same calendar month.
    pub fn within_one_month(&self) -> bool {
        self.start.year() == self.end.year() && self.start.month() == self.end.month()
    }
}

/// A date range guaranteed to lie within a single calendar month, with an
/// optional invoice month tag for monthly-billed providers. One update task
/// is submitted per slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSlice {
    pub range: DateRange,
    pub invoice_month: Option<String>,
}

/// Calendar lookup for invoice months (`YYYYMM`) covering a date span.
pub trait InvoiceCalendar: Send + Sync {
    fn invoice_months_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<String>;
}

/// Invoice months for providers billed on fixed monthly cycles.
///
/// Walks each day from `start` through `end` inclusive and collects
/// distinct `YYYYMM` tokens in first-seen order. A reversed range yields
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyInvoiceCalendar;

impl InvoiceCalendar for MonthlyInvoiceCalendar {
    fn invoice_months_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<String> {
        let mut invoice_months: Vec<String> = Vec::new();
        let mut day = start;
        while day <= end {
            let invoice_month = day.format("%Y%m").to_string();
            if !invoice_months.contains(&invoice_month) {
                invoice_months.push(invoice_month);
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        invoice_months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_within_one_month() {
        assert!(DateRange::new(date(2022, 9, 1), date(2022, 9, 30)).within_one_month());
        assert!(!DateRange::new(date(2022, 9, 30), date(2022, 10, 1)).within_one_month());
        assert!(!DateRange::new(date(2021, 9, 1), date(2022, 9, 1)).within_one_month());
    }

    #[test]
    fn test_invoice_months_single_day() {
        let calendar = MonthlyInvoiceCalendar;
        let months = calendar.invoice_months_in_range(date(2022, 9, 1), date(2022, 9, 1));
        assert_eq!(months, vec!["202209".to_string()]);
    }

    #[test]
    fn test_invoice_months_cross_month() {
        let calendar = MonthlyInvoiceCalendar;
        let months = calendar.invoice_months_in_range(date(2022, 9, 15), date(2022, 10, 2));
        assert_eq!(months, vec!["202209".to_string(), "202210".to_string()]);
    }

    #[test]
    fn test_invoice_months_month_end_stays_in_month() {
        let calendar = MonthlyInvoiceCalendar;
        let months = calendar.invoice_months_in_range(date(2022, 9, 30), date(2022, 9, 30));
        assert_eq!(months, vec!["202209".to_string()]);
    }

    #[test]
    fn test_invoice_months_leap_february() {
        let calendar = MonthlyInvoiceCalendar;
        let months = calendar.invoice_months_in_range(date(2024, 2, 28), date(2024, 2, 29));
        assert_eq!(months, vec!["202402".to_string()]);
    }

    #[test]
    fn test_invoice_months_reversed_range_is_empty() {
        let calendar = MonthlyInvoiceCalendar;
        let months = calendar.invoice_months_in_range(date(2022, 9, 2), date(2022, 9, 1));
        assert!(months.is_empty());
    }
}
