use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day of worldwide statistics from the `world` endpoint
///
/// The wire format uses PascalCase keys and an RFC 3339 date. Counts are
/// signed because the API publishes negative corrections for New* fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyRecord {
    pub date: DateTime<Utc>,
    pub new_confirmed: i64,
    pub total_confirmed: i64,
    pub new_deaths: i64,
    pub total_deaths: i64,
    pub new_recovered: i64,
    pub total_recovered: i64,
}

impl DailyRecord {
    /// Month label of this record in `YYYY-MM` form
    pub fn month_label(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Value of the given statistic field
    pub fn case_value(&self, field: CaseField) -> i64 {
        match field {
            CaseField::NewConfirmed => self.new_confirmed,
            CaseField::NewDeaths => self.new_deaths,
            CaseField::TotalDeaths => self.total_deaths,
            CaseField::NewRecovered => self.new_recovered,
            CaseField::TotalRecovered => self.total_recovered,
        }
    }
}

/// The statistic fields a user can chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseField {
    NewConfirmed,
    NewDeaths,
    TotalDeaths,
    NewRecovered,
    TotalRecovered,
}

impl CaseField {
    /// Menu order of the selectable fields
    pub const ALL: [CaseField; 5] = [
        CaseField::NewConfirmed,
        CaseField::NewDeaths,
        CaseField::TotalDeaths,
        CaseField::NewRecovered,
        CaseField::TotalRecovered,
    ];

    /// Wire and query-parameter name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseField::NewConfirmed => "NewConfirmed",
            CaseField::NewDeaths => "NewDeaths",
            CaseField::TotalDeaths => "TotalDeaths",
            CaseField::NewRecovered => "NewRecovered",
            CaseField::TotalRecovered => "TotalRecovered",
        }
    }

    /// Human-readable label for menus
    pub fn label(&self) -> &'static str {
        match self {
            CaseField::NewConfirmed => "New Confirmed",
            CaseField::NewDeaths => "New Deaths",
            CaseField::TotalDeaths => "Total Deaths",
            CaseField::NewRecovered => "New Recovered",
            CaseField::TotalRecovered => "Total Recovered",
        }
    }

    /// Parses a query-parameter value, `None` for anything outside the set
    pub fn from_param(value: &str) -> Option<CaseField> {
        CaseField::ALL.iter().copied().find(|f| f.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "Date": "2021-09-29T00:00:00Z",
            "NewConfirmed": 477,
            "TotalConfirmed": 233568,
            "NewDeaths": 6,
            "TotalDeaths": 4665,
            "NewRecovered": 0,
            "TotalRecovered": 0
        }"#
    }

    #[test]
    fn test_deserialize_daily_record() {
        let record: DailyRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.new_confirmed, 477);
        assert_eq!(record.total_deaths, 4665);
        assert_eq!(record.month_label(), "2021-09");
    }

    #[test]
    fn test_deserialize_array() {
        let json = format!("[{},{}]", sample_json(), sample_json());
        let records: Vec<DailyRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_case_value_selects_field() {
        let record: DailyRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.case_value(CaseField::NewConfirmed), 477);
        assert_eq!(record.case_value(CaseField::NewDeaths), 6);
        assert_eq!(record.case_value(CaseField::TotalRecovered), 0);
    }

    #[test]
    fn test_negative_correction_values() {
        let json = sample_json().replace("477", "-23");
        let record: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.case_value(CaseField::NewConfirmed), -23);
    }

    #[test]
    fn test_from_param_round_trip() {
        for field in CaseField::ALL {
            assert_eq!(CaseField::from_param(field.as_str()), Some(field));
        }
        assert_eq!(CaseField::from_param("Unknown"), None);
        assert_eq!(CaseField::from_param(""), None);
    }
}
