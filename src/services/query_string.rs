use covid_api::CaseField;
use dioxus::document;

use crate::models::FieldSelection;

/// Builds the screen's query string from the current selection
pub fn build_query(selection: &FieldSelection) -> String {
    format!(
        "?from={}&to={}&selectedCase={}",
        selection.date_from,
        selection.date_to,
        selection.selected_case.as_str()
    )
}

/// Splits a `location.search` string into key/value pairs
///
/// The screen writes its values unencoded, so no percent-decoding happens
/// here.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect()
}

/// Applies query parameters onto the selection
///
/// Only keys present in the query override the current values. An unknown
/// `selectedCase` value is ignored.
pub fn apply_query(search: &str, selection: &mut FieldSelection) {
    for (key, value) in parse_query(search) {
        match key.as_str() {
            "from" => selection.date_from = value,
            "to" => selection.date_to = value,
            "selectedCase" => {
                if let Some(field) = CaseField::from_param(&value) {
                    selection.selected_case = field;
                }
            }
            _ => {}
        }
    }
}

/// Rewrites the address bar to reflect the selection
pub fn push_browser_url(selection: &FieldSelection) {
    let script = format!(
        "window.history.pushState(null, '', window.location.pathname + '{}');",
        build_query(selection)
    );
    let _ = document::eval(&script);
}

/// Reads `location.search` from the address bar
pub async fn read_browser_query() -> Option<String> {
    let value: serde_json::Value = match document::eval("return window.location.search;").await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read browser query: {:?}", e);
            return None;
        }
    };
    value.as_str().map(|s| s.to_string())
}
