//! Date range partitioning.
//!
//! Splits an inclusive date range into per-calendar-month sub-ranges and
//! tags slices for monthly-billed providers with their invoice month. Month
//! iteration is pure calendar arithmetic; leap years and variable month
//! lengths fall out of `chrono`'s date construction.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::error::{DispatchError, Result};
use crate::models::date_range::{DateRange, InvoiceCalendar, MonthSlice};
use crate::models::provider::ProviderType;

/// Split a range into month-aligned sub-ranges, ascending by start date.
///
/// The sub-ranges have no gaps and no overlaps and their union equals the
/// input range. A reversed range yields nothing.
pub fn month_ranges(range: DateRange) -> Vec<DateRange> {
    let mut ranges = Vec::new();
    let mut cursor = range.start;
    while cursor <= range.end {
        let slice_end = last_day_of_month(cursor).min(range.end);
        ranges.push(DateRange::new(cursor, slice_end));
        match slice_end.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }
    ranges
}

fn last_day_of_month(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(day)
}

/// Partitions validated date input into [`MonthSlice`]s for dispatch.
pub struct DateRangePartitioner {
    calendar: Arc<dyn InvoiceCalendar>,
}

impl DateRangePartitioner {
    pub fn new(calendar: Arc<dyn InvoiceCalendar>) -> Self {
        Self { calendar }
    }

    /// Partition `[start, end]` into month slices for the given provider.
    ///
    /// `end` defaults to `start`. An explicit `invoice_month` is passed
    /// through unchanged on every slice and suppresses calendar lookup;
    /// otherwise monthly-billed providers get the first invoice month
    /// covering each slice's span.
    pub fn partition(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        provider_type: ProviderType,
        invoice_month: Option<&str>,
    ) -> Result<Vec<MonthSlice>> {
        let start = start.ok_or_else(|| DispatchError::required_parameter("start_date"))?;
        let end = end.unwrap_or(start);

        let slices = month_ranges(DateRange::new(start, end))
            .into_iter()
            .map(|range| MonthSlice {
                invoice_month: self.invoice_month_for(&range, provider_type, invoice_month),
                range,
            })
            .collect();
        Ok(slices)
    }

    fn invoice_month_for(
        &self,
        range: &DateRange,
        provider_type: ProviderType,
        invoice_month: Option<&str>,
    ) -> Option<String> {
        if let Some(month) = invoice_month {
            return Some(month.to_string());
        }
        if provider_type.is_invoice_month_billed() {
            self.calendar
                .invoice_months_in_range(range.start, range.end)
                .into_iter()
                .next()
        } else {
            None
        }
    }
}
