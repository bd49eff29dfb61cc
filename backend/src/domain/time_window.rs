//! Calendar windows over rating creation timestamps.

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Raised when a window names a month or year that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimeWindowError {
    /// Month outside `1..=12`.
    #[error("month must be between 1 and 12 (got {month})")]
    InvalidMonth {
        /// Offending month.
        month: u32,
    },
    /// Year outside the representable calendar.
    #[error("year {year} is out of range")]
    InvalidYear {
        /// Offending year.
        year: i32,
    },
}

/// Half-open `[from, until)` range of creation instants. Missing bounds are
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreationRange {
    /// Inclusive lower bound, if any.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound, if any.
    pub until: Option<DateTime<Utc>>,
}

impl CreationRange {
    /// Range that admits every instant.
    pub const UNBOUNDED: Self = Self {
        from: None,
        until: None,
    };

    /// Whether `at` falls inside the range.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.until.is_none_or(|until| at < until)
    }
}

/// Optional calendar year and month restricting an aggregation.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use dishared::domain::TimeWindow;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("valid instant");
/// let range = TimeWindow { year: None, month: Some(2) }.resolve(now).expect("valid window");
/// assert_eq!(range.from, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single());
/// assert_eq!(range.until, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeWindow {
    /// Calendar year.
    pub year: Option<i32>,
    /// Calendar month, 1-12. Without a year, the current year applies.
    pub month: Option<u32>,
}

impl TimeWindow {
    /// Convert the window into a creation range.
    ///
    /// A month without a year refers to that month of the year `now` falls in.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<CreationRange, TimeWindowError> {
        match (self.year, self.month) {
            (None, None) => Ok(CreationRange::UNBOUNDED),
            (Some(year), None) => {
                let next = year
                    .checked_add(1)
                    .ok_or(TimeWindowError::InvalidYear { year })?;
                Ok(CreationRange {
                    from: Some(month_start(year, 1)?),
                    until: Some(month_start(next, 1)?),
                })
            }
            (year, Some(month)) => month_range(year.unwrap_or_else(|| now.year()), month),
        }
    }
}

/// Previous and current trending periods relative to `now`.
///
/// The previous period is the whole calendar month before the one `now` is
/// in. The current period starts at the first instant of the current month
/// and is unbounded above.
pub fn trending_periods(
    now: DateTime<Utc>,
) -> Result<(CreationRange, CreationRange), TimeWindowError> {
    let current_start = month_start(now.year(), now.month())?;
    let (year, month) = if now.month() == 1 {
        let year = now.year();
        (
            year.checked_sub(1)
                .ok_or(TimeWindowError::InvalidYear { year })?,
            12,
        )
    } else {
        (now.year(), now.month() - 1)
    };
    let previous = CreationRange {
        from: Some(month_start(year, month)?),
        until: Some(current_start),
    };
    let current = CreationRange {
        from: Some(current_start),
        until: None,
    };
    Ok((previous, current))
}

fn month_range(year: i32, month: u32) -> Result<CreationRange, TimeWindowError> {
    let from = month_start(year, month)?;
    let until = if month == 12 {
        let next = year
            .checked_add(1)
            .ok_or(TimeWindowError::InvalidYear { year })?;
        month_start(next, 1)?
    } else {
        month_start(year, month + 1)?
    };
    Ok(CreationRange {
        from: Some(from),
        until: Some(until),
    })
}

fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>, TimeWindowError> {
    if !(1..=12).contains(&month) {
        return Err(TimeWindowError::InvalidMonth { month });
    }
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or(TimeWindowError::InvalidYear { year })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0)
            .single()
            .expect("valid instant")
    }

    #[rstest]
    fn empty_window_is_unbounded(now: DateTime<Utc>) {
        let range = TimeWindow::default().resolve(now).expect("valid window");
        assert_eq!(range, CreationRange::UNBOUNDED);
        assert!(range.contains(at(1999, 1, 1)));
    }

    #[rstest]
    fn year_window_covers_calendar_year(now: DateTime<Utc>) {
        let range = TimeWindow {
            year: Some(2023),
            month: None,
        }
        .resolve(now)
        .expect("valid window");
        assert!(range.contains(at(2023, 1, 1)));
        assert!(range.contains(at(2023, 12, 31)));
        assert!(!range.contains(at(2024, 1, 1)));
    }

    #[rstest]
    fn december_rolls_into_next_year(now: DateTime<Utc>) {
        let range = TimeWindow {
            year: Some(2023),
            month: Some(12),
        }
        .resolve(now)
        .expect("valid window");
        assert_eq!(range.from, Some(at(2023, 12, 1)));
        assert_eq!(range.until, Some(at(2024, 1, 1)));
    }

    #[rstest]
    fn month_alone_uses_current_year(now: DateTime<Utc>) {
        let range = TimeWindow {
            year: None,
            month: Some(3),
        }
        .resolve(now)
        .expect("valid window");
        assert_eq!(range.from, Some(at(2024, 3, 1)));
        assert_eq!(range.until, Some(at(2024, 4, 1)));
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn rejects_invalid_months(now: DateTime<Utc>, #[case] month: u32) {
        let err = TimeWindow {
            year: Some(2024),
            month: Some(month),
        }
        .resolve(now)
        .expect_err("invalid month");
        assert_eq!(err, TimeWindowError::InvalidMonth { month });
    }

    #[rstest]
    fn rejects_unrepresentable_years(now: DateTime<Utc>) {
        let err = TimeWindow {
            year: Some(i32::MAX),
            month: None,
        }
        .resolve(now)
        .expect_err("invalid year");
        assert_eq!(err, TimeWindowError::InvalidYear { year: i32::MAX });
    }

    #[rstest]
    fn trending_periods_split_at_month_start(now: DateTime<Utc>) {
        let (previous, current) = trending_periods(now).expect("valid periods");
        assert_eq!(previous.from, Some(at(2024, 5, 1)));
        assert_eq!(previous.until, Some(at(2024, 6, 1)));
        assert_eq!(current.from, Some(at(2024, 6, 1)));
        assert_eq!(current.until, None);
    }

    #[test]
    fn trending_periods_wrap_in_january() {
        let (previous, _) = trending_periods(at(2024, 1, 10)).expect("valid periods");
        assert_eq!(previous.from, Some(at(2023, 12, 1)));
        assert_eq!(previous.until, Some(at(2024, 1, 1)));
    }
}
