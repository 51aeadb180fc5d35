//! # Covid API
//!
//! A reusable client library for the worldwide COVID-19 statistics API.
//!
//! This crate provides:
//! - Typed daily records for the `world` endpoint
//! - The closed set of chartable statistic fields
//! - An async service wrapper over the HTTP API
//!
//! ## Separation of Concerns
//!
//! This crate focuses solely on fetching and typing API data. It does **not**:
//! - Aggregate records into chart series (handled by the application)
//! - Decide date ranges or default selections (handled by the application)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use covid_api::{CaseField, CovidApiService};
//!
//! let service = CovidApiService::new("https://api.covid19api.com".to_string());
//! let records = service
//!     .world("2021-09-29T23:08:34.402Z", "2023-01-27T21:08:16.708Z")
//!     .await?;
//! let deaths = records[0].case_value(CaseField::TotalDeaths);
//! ```

pub mod models;
pub mod service;

pub use models::{CaseField, DailyRecord};
pub use service::{ApiError, CovidApiService};
