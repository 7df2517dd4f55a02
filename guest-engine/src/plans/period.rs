//! Billing period helpers
//!
//! Periods are calendar months in UTC.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::types::Timestamp;

/// `[start, end)` of the period containing `now`, in Unix millis
///
/// # Errors
///
/// `ValueOutOfRange` when `now` is not a representable date.
pub fn period_bounds(now: Timestamp) -> AppResult<(Timestamp, Timestamp)> {
    let out_of_range = || {
        AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Timestamp {} is out of range", now),
        )
    };

    let now = DateTime::from_timestamp_millis(now).ok_or_else(out_of_range)?;
    let (next_year, next_month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };

    let start = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .ok_or_else(out_of_range)?;
    let end = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .ok_or_else(out_of_range)?;

    Ok((start.timestamp_millis(), end.timestamp_millis()))
}

/// How many of the given event creation times fall in the period of `now`
///
/// # Errors
///
/// `ValueOutOfRange` when `now` is not a representable date.
pub fn events_in_current_period(created_at: &[Timestamp], now: Timestamp) -> AppResult<u32> {
    let (start, end) = period_bounds(now)?;
    let count = created_at
        .iter()
        .filter(|ts| (start..end).contains(*ts))
        .count();
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_period_bounds_mid_month() {
        let (start, end) = period_bounds(millis(2026, 3, 15, 12)).unwrap();
        assert_eq!(start, millis(2026, 3, 1, 0));
        assert_eq!(end, millis(2026, 4, 1, 0));
    }

    #[test]
    fn test_period_bounds_december_rolls_year() {
        let (start, end) = period_bounds(millis(2025, 12, 31, 23)).unwrap();
        assert_eq!(start, millis(2025, 12, 1, 0));
        assert_eq!(end, millis(2026, 1, 1, 0));
    }

    #[test]
    fn test_counts_only_current_month() {
        let created = [
            millis(2026, 2, 28, 23),
            millis(2026, 3, 1, 0),
            millis(2026, 3, 20, 9),
            millis(2026, 4, 1, 0),
        ];
        assert_eq!(
            events_in_current_period(&created, millis(2026, 3, 10, 8)).unwrap(),
            2
        );
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let err = events_in_current_period(&[], i64::MAX).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
