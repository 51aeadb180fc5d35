use crate::models::DailyRecord;

/// Error type for API operations
#[derive(Debug)]
pub enum ApiError {
    NetworkError(String),
    JsonError(String),
    ServerError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            ApiError::ServerError(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// COVID statistics API service
pub struct CovidApiService {
    base_url: String,
}

impl CovidApiService {
    /// Create a new API service over the given base URL
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch worldwide daily records for the given ISO timestamp range
    ///
    /// Issues GET `{base}/world?from=<ISO>&to=<ISO>` and decodes the JSON
    /// array of daily records.
    pub async fn world(&self, from: &str, to: &str) -> Result<Vec<DailyRecord>, ApiError> {
        let url = format!(
            "{}/world?from={}&to={}",
            self.base_url.trim_end_matches('/'),
            from,
            to
        );

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("CovidDashboard/0.1.0")
            .build()
            .map_err(|e| ApiError::NetworkError(format!("Client build failed: {}", e)))?;

        log::debug!("Fetching world statistics: {}", url);

        let response = client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::ServerError(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        let records = response
            .json::<Vec<DailyRecord>>()
            .await
            .map_err(|e| ApiError::JsonError(format!("Failed to parse response: {}", e)))?;

        log::info!("Fetched {} daily records", records.len());

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let service = CovidApiService::new("https://api.covid19api.com///".to_string());
        assert_eq!(service.base_url.trim_end_matches('/'), "https://api.covid19api.com");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::ServerError("Server returned status: 503".to_string());
        assert!(err.to_string().contains("503"));
    }
}
