use crate::dates::{format_label, parse_date, week_start};
use crate::errors::GrowthError;
use crate::models::{DailyPoint, RawRecord, Summary, WeeklyPoint};
use std::collections::BTreeMap;
use tracing::debug;

/// Drops unobserved records and returns the rest in date order.
pub fn build_daily_series(records: &[RawRecord]) -> Result<Vec<DailyPoint>, GrowthError> {
    let mut daily = records
        .iter()
        .filter_map(|record| record.count.map(|count| (record, count)))
        .map(|(record, count)| {
            parse_date(record.date).map(|date| DailyPoint {
                date,
                label: record.date.to_string(),
                count,
            })
        })
        .collect::<Result<Vec<_>, GrowthError>>()?;

    daily.sort_by_key(|point| point.date);
    debug!(records = records.len(), points = daily.len(), "built daily series");
    Ok(daily)
}

/// Sums daily counts into Monday-keyed buckets, oldest first.
pub fn aggregate_weekly(daily: &[DailyPoint]) -> Result<Vec<WeeklyPoint>, GrowthError> {
    let mut weeks: BTreeMap<_, u64> = BTreeMap::new();
    for point in daily {
        let start = week_start(point.date).ok_or(GrowthError::DateOutOfRange(point.date))?;
        let total = weeks.entry(start).or_default();
        *total = total.saturating_add(point.count);
    }

    Ok(weeks
        .into_iter()
        .map(|(start, total)| WeeklyPoint {
            week_start: start,
            label: format_label(start),
            total,
        })
        .collect())
}

pub fn summarize(daily: &[DailyPoint]) -> Summary {
    if daily.is_empty() {
        return Summary::default();
    }

    let sum = daily
        .iter()
        .fold(0u64, |sum, point| sum.saturating_add(point.count));
    Summary {
        total_records: daily.len(),
        daily_average: (sum as f64 / daily.len() as f64).round() as u64,
        max_daily: daily.iter().map(|point| point.count).max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RAW_RECORDS;
    use chrono::{Duration, NaiveDate};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn daily_series_skips_unobserved_and_sorts() {
        let records = [
            RawRecord::new(3, "5.6.2025", Some(30)),
            RawRecord::new(1, "1.6.2025", None),
            RawRecord::new(2, "2.6.2025", Some(20)),
        ];

        let daily = build_daily_series(&records).unwrap();
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, ymd(2025, 6, 2));
        assert_eq!(daily[0].label, "2.6.2025");
        assert_eq!(daily[1].count, 30);
    }

    #[test]
    fn daily_series_matches_observed_records() {
        let daily = build_daily_series(RAW_RECORDS).unwrap();
        let observed = RAW_RECORDS.iter().filter(|r| r.count.is_some()).count();
        assert_eq!(daily.len(), observed);
        assert!(daily.windows(2).all(|pair| pair[0].date <= pair[1].date));
        assert_eq!(build_daily_series(RAW_RECORDS).unwrap(), daily);
    }

    #[test]
    fn daily_series_fails_on_bad_date() {
        let records = [
            RawRecord::new(1, "1.6.2025", Some(1)),
            RawRecord::new(2, "June 2nd", Some(2)),
        ];
        assert_eq!(
            build_daily_series(&records),
            Err(GrowthError::InvalidDate("June 2nd".into()))
        );
    }

    #[test]
    fn unobserved_bad_date_is_ignored() {
        let records = [RawRecord::new(1, "not a date", None)];
        assert!(build_daily_series(&records).unwrap().is_empty());
    }

    #[test]
    fn weekly_buckets_for_fixture() {
        let daily = build_daily_series(RAW_RECORDS).unwrap();
        let weekly = aggregate_weekly(&daily).unwrap();

        let got: Vec<_> = weekly.iter().map(|w| (w.label.as_str(), w.total)).collect();
        assert_eq!(
            got,
            vec![
                ("14.4.2025", 17682),
                ("21.4.2025", 6662),
                ("5.5.2025", 13758),
                ("12.5.2025", 8809 + 8487),
                // Sunday 18.5 joins the Monday after it.
                ("19.5.2025", 2225 + 1893 + 1571 + 1460),
                ("26.5.2025", 16173),
                ("2.6.2025", 5856 + 8961),
                ("9.6.2025", 12440 + 5700),
            ]
        );
        assert_eq!(aggregate_weekly(&daily).unwrap(), weekly);
    }

    #[test]
    fn weekly_totals_conserve_daily_sum() {
        let daily = build_daily_series(RAW_RECORDS).unwrap();
        let weekly = aggregate_weekly(&daily).unwrap();

        let daily_sum: u64 = daily.iter().map(|p| p.count).sum();
        let weekly_sum: u64 = weekly.iter().map(|w| w.total).sum();
        assert_eq!(daily_sum, weekly_sum);
        assert!(weekly.windows(2).all(|pair| pair[0].week_start < pair[1].week_start));
    }

    #[test]
    fn weekly_of_empty_is_empty() {
        assert!(aggregate_weekly(&[]).unwrap().is_empty());
    }

    #[test]
    fn summary_for_fixture() {
        let daily = build_daily_series(RAW_RECORDS).unwrap();
        let summary = summarize(&daily);
        assert_eq!(summary.total_records, 14);
        // 111677 / 14 = 7976.93
        assert_eq!(summary.daily_average, 7977);
        assert_eq!(summary.max_daily, 17682);
    }

    #[test]
    fn weekly_reports_dates_without_a_monday() {
        let edges: Vec<_> = (0..7)
            .flat_map(|offset| {
                [
                    NaiveDate::MIN + Duration::days(offset),
                    NaiveDate::MAX - Duration::days(offset),
                ]
            })
            .map(|date| DailyPoint {
                date,
                label: format_label(date),
                count: 1,
            })
            .collect();

        match aggregate_weekly(&edges) {
            Ok(weekly) => assert_eq!(weekly.iter().map(|w| w.total).sum::<u64>(), 14),
            Err(err) => assert!(matches!(err, GrowthError::DateOutOfRange(_))),
        }
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let monday = ymd(2025, 5, 12);
        let daily = [
            DailyPoint {
                date: monday,
                label: format_label(monday),
                count: u64::MAX,
            },
            DailyPoint {
                date: monday + Duration::days(1),
                label: format_label(monday + Duration::days(1)),
                count: 2,
            },
        ];

        let weekly = aggregate_weekly(&daily).unwrap();
        let summary = summarize(&daily);
        assert_eq!(weekly[0].total, u64::MAX);
        assert_eq!(summary.max_daily, u64::MAX);
        assert_eq!(summary.daily_average, (u64::MAX as f64 / 2.0).round() as u64);
    }

    #[test]
    fn summary_of_empty_is_zero() {
        assert_eq!(summarize(&[]), Summary::default());
    }
}
