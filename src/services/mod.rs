pub mod query_string;
pub mod stats_service;

pub use stats_service::*;
