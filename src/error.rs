use std::fmt;

use covid_api::ApiError;

/// Central error types for the dashboard app
#[derive(Debug)]
pub enum AppError {
    /// API error (network, server, decoding)
    Api(ApiError),
    /// Validation error (e.g. invalid inputs)
    Validation(String),
    /// Configuration error
    Config(String),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API error: {}", e),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

/// User-friendly error messages for UI surfaces
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(ApiError::NetworkError(_)) => {
                "Could not reach the statistics server. Please check your connection.".to_string()
            }
            AppError::Api(ApiError::JsonError(_)) => {
                "The statistics server sent an unreadable response.".to_string()
            }
            AppError::Api(ApiError::ServerError(_)) => {
                "The statistics server reported an error. Please try again.".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::Config(msg) => format!("Configuration problem: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
