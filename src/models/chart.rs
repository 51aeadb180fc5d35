/// Bar chart series derived from daily records
///
/// `labels` and `values` are parallel sequences; `build_series` constructs
/// them together so they always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    pub color: String,
}

impl ChartSeries {
    /// Largest value in the series, 0 when empty
    pub fn max_value(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Fixed bar color lookup for a selected case
pub fn chart_color(selected_case: &str) -> String {
    match selected_case {
        "NewConfirmed" => "#feaa47",
        "NewDeaths" | "TotalDeaths" => "#fe6e6e",
        "NewRecovered" | "TotalRecovered" => "#6ffc00",
        _ => "#ffffff",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup_table() {
        assert_eq!(chart_color("NewConfirmed"), "#feaa47");
        assert_eq!(chart_color("NewDeaths"), "#fe6e6e");
        assert_eq!(chart_color("TotalDeaths"), "#fe6e6e");
        assert_eq!(chart_color("NewRecovered"), "#6ffc00");
        assert_eq!(chart_color("TotalRecovered"), "#6ffc00");
    }

    #[test]
    fn test_color_falls_back_to_white() {
        assert_eq!(chart_color("Unknown"), "#ffffff");
        assert_eq!(chart_color(""), "#ffffff");
    }

    #[test]
    fn test_max_value() {
        let series = ChartSeries {
            labels: vec!["2021-09".to_string(), "2021-10".to_string()],
            values: vec![3, 11],
            color: chart_color("NewConfirmed"),
        };
        assert_eq!(series.max_value(), 11);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_max_value_of_empty_series() {
        let series = ChartSeries {
            labels: Vec::new(),
            values: Vec::new(),
            color: chart_color("NewConfirmed"),
        };
        assert_eq!(series.max_value(), 0);
        assert!(series.is_empty());
    }
}
