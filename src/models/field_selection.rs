use covid_api::CaseField;

use crate::error::AppError;

/// Controlled form state of the statistics screen
///
/// Dates stay full ISO timestamp strings so they round-trip through the URL
/// query string and the API query untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSelection {
    pub date_from: String,
    pub date_to: String,
    pub selected_case: CaseField,
}

impl FieldSelection {
    /// Lower month bound for charting, `YYYY-MM`
    pub fn month_from(&self) -> String {
        month_of(&self.date_from)
    }

    /// Upper month bound for charting, `YYYY-MM`
    pub fn month_to(&self) -> String {
        month_of(&self.date_to)
    }

    /// Validates the selection before it is used in a fetch
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [("dateFrom", &self.date_from), ("dateTo", &self.date_to)] {
            if chrono::DateTime::parse_from_rfc3339(value).is_err() {
                return Err(AppError::Validation(format!(
                    "{} is not a valid timestamp: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Truncates an ISO-ish timestamp string to its `YYYY-MM` prefix
pub fn month_of(timestamp: &str) -> String {
    let date = timestamp.split('T').next().unwrap_or(timestamp);
    date.chars().take(7).collect()
}
