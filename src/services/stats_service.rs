use chrono::{Months, NaiveDate};
use covid_api::{CaseField, DailyRecord};

use crate::models::{chart_color, ChartSeries, FieldSelection};

/// Ordered `YYYY-MM` labels from `start` to `end` inclusive
///
/// Steps one calendar month at a time, rolling over year boundaries. An
/// empty sequence is returned when `start > end` or a bound does not parse.
pub fn month_range(start: &str, end: &str) -> Vec<String> {
    let (mut current, last) = match (parse_month(start), parse_month(end)) {
        (Some(start), Some(end)) => (start, end),
        _ => return Vec::new(),
    };

    let mut labels = Vec::new();
    while current <= last {
        labels.push(current.format("%Y-%m").to_string());
        current = match current.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    labels
}

fn parse_month(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", label), "%Y-%m-%d").ok()
}

/// Statistic value for the representative day of a month
///
/// Takes the first record whose date falls in `month`; a month with no
/// record counts as 0.
pub fn cases_for_month(records: &[DailyRecord], month: &str, field: CaseField) -> i64 {
    records
        .iter()
        .find(|record| record.month_label() == month)
        .map(|record| record.case_value(field))
        .unwrap_or(0)
}

/// Builds the chart series for the current selection
pub fn build_series(records: &[DailyRecord], selection: &FieldSelection) -> ChartSeries {
    let labels = month_range(&selection.month_from(), &selection.month_to());
    let values = labels
        .iter()
        .map(|month| cases_for_month(records, month, selection.selected_case))
        .collect();

    ChartSeries {
        labels,
        values,
        color: chart_color(selection.selected_case.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn record(date: &str, new_confirmed: i64, total_deaths: i64) -> DailyRecord {
        DailyRecord {
            date: DateTime::parse_from_rfc3339(date)
                .unwrap()
                .with_timezone(&Utc),
            new_confirmed,
            total_confirmed: 0,
            new_deaths: 0,
            total_deaths,
            new_recovered: 0,
            total_recovered: 0,
        }
    }

    #[test]
    fn test_month_range_within_a_year() {
        assert_eq!(
            month_range("2021-09", "2021-12"),
            vec!["2021-09", "2021-10", "2021-11", "2021-12"]
        );
    }

    #[test]
    fn test_month_range_year_rollover() {
        assert_eq!(
            month_range("2021-12", "2022-02"),
            vec!["2021-12", "2022-01", "2022-02"]
        );
    }

    #[test]
    fn test_month_range_single_month() {
        assert_eq!(month_range("2022-07", "2022-07"), vec!["2022-07"]);
    }

    #[test]
    fn test_month_range_inverted_bounds() {
        assert!(month_range("2022-02", "2021-12").is_empty());
    }

    #[test]
    fn test_month_range_unparseable_bounds() {
        assert!(month_range("garbage", "2021-12").is_empty());
        assert!(month_range("2021-09", "").is_empty());
    }

    #[test]
    fn test_cases_for_month_takes_first_match() {
        let records = vec![
            record("2021-09-01T00:00:00Z", 100, 7),
            record("2021-09-02T00:00:00Z", 200, 8),
            record("2021-10-01T00:00:00Z", 300, 9),
        ];

        assert_eq!(
            cases_for_month(&records, "2021-09", CaseField::NewConfirmed),
            100
        );
        assert_eq!(
            cases_for_month(&records, "2021-10", CaseField::TotalDeaths),
            9
        );
    }

    #[test]
    fn test_cases_for_missing_month_is_zero() {
        let records = vec![record("2021-09-01T00:00:00Z", 100, 7)];
        assert_eq!(
            cases_for_month(&records, "2021-11", CaseField::NewConfirmed),
            0
        );
    }

    #[test]
    fn test_build_series_parallel_sequences() {
        let records = vec![
            record("2021-09-30T00:00:00Z", 50, 1),
            record("2021-11-15T00:00:00Z", 70, 2),
        ];
        let selection = FieldSelection {
            date_from: "2021-09-29T23:08:34.402Z".to_string(),
            date_to: "2021-12-27T21:08:16.708Z".to_string(),
            selected_case: CaseField::NewConfirmed,
        };

        let series = build_series(&records, &selection);

        assert_eq!(series.labels.len(), series.values.len());
        assert_eq!(series.labels, vec!["2021-09", "2021-10", "2021-11", "2021-12"]);
        // Months without a record chart as 0
        assert_eq!(series.values, vec![50, 0, 70, 0]);
        assert_eq!(series.color, "#feaa47");
    }

    #[test]
    fn test_build_series_color_tracks_selected_case() {
        let selection = FieldSelection {
            date_from: "2021-09-29T23:08:34.402Z".to_string(),
            date_to: "2021-09-29T23:08:34.402Z".to_string(),
            selected_case: CaseField::TotalRecovered,
        };

        let series = build_series(&[], &selection);

        assert_eq!(series.color, "#6ffc00");
        assert_eq!(series.labels, vec!["2021-09"]);
        assert_eq!(series.values, vec![0]);
    }
}
