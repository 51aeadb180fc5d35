use dioxus::prelude::*;

use covid_api::{CaseField, CovidApiService, DailyRecord};

use crate::components::BarChart;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::{self, query_string};

/// Selectable lower bounds of the date range
const DATE_FROM_OPTIONS: [(&str, &str); 4] = [
    ("2021-09-29T23:08:34.402Z", "2021-09"),
    ("2021-10-29T23:08:34.402Z", "2021-10"),
    ("2021-11-29T23:08:34.402Z", "2021-11"),
    ("2021-12-29T23:08:34.402Z", "2021-12"),
];

/// Selectable upper bounds of the date range
const DATE_TO_OPTIONS: [(&str, &str); 4] = [
    ("2023-01-27T21:08:16.708Z", "2023-01"),
    ("2022-12-27T21:08:16.708Z", "2022-12"),
    ("2022-11-27T21:08:16.708Z", "2022-11"),
    ("2022-10-27T21:08:16.708Z", "2022-10"),
];

#[component]
pub fn GlobalStatisticScreen(config: AppConfig) -> Element {
    let initial = config.initial_selection();
    let api_base = config.api_base_url.clone();

    let mut selection = use_signal(move || initial);
    let mut data = use_signal(Vec::<DailyRecord>::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    let mut initial_render = use_signal(|| true);
    let mut last_range = use_signal(|| (String::new(), String::new()));

    // Re-fetch whenever the date range changes. The first run (mount) is
    // skipped, and the URL query parameters win over the in-memory state.
    use_effect(move || {
        let current = selection();
        let range = (current.date_from, current.date_to);

        if *initial_render.peek() {
            initial_render.set(false);
            last_range.set(range);
            return;
        }
        if *last_range.peek() == range {
            return;
        }
        last_range.set(range);

        let api_base = api_base.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);

            let mut effective = selection.peek().clone();
            if let Some(search) = query_string::read_browser_query().await {
                query_string::apply_query(&search, &mut effective);
            }

            if let Err(e) = effective.validate() {
                error.set(Some(e.user_message()));
                loading.set(false);
                return;
            }

            last_range.set((effective.date_from.clone(), effective.date_to.clone()));
            selection.set(effective.clone());

            let service = CovidApiService::new(api_base);
            match service.world(&effective.date_from, &effective.date_to).await {
                Ok(records) => data.set(records),
                Err(e) => {
                    log::warn!("Fetching world statistics failed: {}", e);
                    error.set(Some(AppError::from(e).user_message()));
                }
            }
            loading.set(false);
        });
    });

    let records = data();
    let current = selection();
    let series = services::build_series(&records, &current);

    rsx! {
        div {
            style: "padding: 16px; max-width: 900px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",

            // Header
            div {
                style: "margin-bottom: 20px; padding-top: 8px;",
                h1 {
                    style: "color: #0066cc; margin: 0; font-size: 24px; font-weight: 700;",
                    "🌍 Global Statistics"
                }
            }

            // Field selects
            div {
                class: "card",
                style: "display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 16px;",

                div {
                    class: "form-group",
                    style: "flex: 1; min-width: 160px;",
                    label {
                        style: "display: block; margin-bottom: 8px; font-weight: bold;",
                        "Date From"
                    }
                    select {
                        value: "{current.date_from}",
                        onchange: move |e| {
                            let mut next = selection();
                            next.date_from = e.value();
                            query_string::push_browser_url(&next);
                            selection.set(next);
                        },
                        style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",

                        for (value, label) in DATE_FROM_OPTIONS {
                            option { value: "{value}", "{label}" }
                        }
                    }
                }

                div {
                    class: "form-group",
                    style: "flex: 1; min-width: 160px;",
                    label {
                        style: "display: block; margin-bottom: 8px; font-weight: bold;",
                        "Date To"
                    }
                    select {
                        value: "{current.date_to}",
                        onchange: move |e| {
                            let mut next = selection();
                            next.date_to = e.value();
                            query_string::push_browser_url(&next);
                            selection.set(next);
                        },
                        style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",

                        for (value, label) in DATE_TO_OPTIONS {
                            option { value: "{value}", "{label}" }
                        }
                    }
                }

                div {
                    class: "form-group",
                    style: "flex: 1; min-width: 160px;",
                    label {
                        style: "display: block; margin-bottom: 8px; font-weight: bold;",
                        "Case"
                    }
                    select {
                        value: "{current.selected_case.as_str()}",
                        onchange: move |e| {
                            let mut next = selection();
                            if let Some(field) = CaseField::from_param(&e.value()) {
                                next.selected_case = field;
                            }
                            query_string::push_browser_url(&next);
                            selection.set(next);
                        },
                        style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",

                        for field in CaseField::ALL {
                            option { value: "{field.as_str()}", "{field.label()}" }
                        }
                    }
                }
            }

            // Error
            if let Some(err) = error() {
                div {
                    class: "error-message",
                    "⚠️ {err}"
                }
            }

            // Loading hint
            if loading() {
                div {
                    style: "text-align: center; padding: 12px; color: #999;",
                    "Loading world statistics…"
                }
            }

            // Chart
            div {
                class: "card",
                h2 {
                    style: "margin: 0 0 16px 0; font-size: 18px; color: #333;",
                    "📊 {current.selected_case.label()} per month"
                }
                if records.is_empty() && !loading() {
                    div {
                        style: "text-align: center; padding: 40px; color: #999;",
                        "Change the date range to load worldwide statistics."
                    }
                } else {
                    BarChart { series }
                }
            }
        }
    }
}
