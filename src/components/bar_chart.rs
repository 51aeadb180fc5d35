use dioxus::prelude::*;

use crate::models::ChartSeries;

/// SVG bar chart over parallel month labels and values
#[component]
pub fn BarChart(series: ChartSeries) -> Element {
    // Hovered bar index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    let height = 220.0f32;
    let padding = 24.0f32;
    let bar_width = 28.0f32;
    let bar_gap = 14.0f32;
    let n = series.labels.len().max(1) as f32;
    let width = (n * (bar_width + bar_gap) + padding * 2.0).ceil();
    let max_value = series.max_value().max(1) as f32;
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);

    rsx! {
        div { style: "width: 100%; overflow-x: auto;",
            svg {
                style: "display: block; min-width: 100%;",
                view_box: "{view_box}",
                width: "100%",
                height: "{height + padding * 2.0}",

                // Baseline
                line {
                    x1: "{padding}",
                    y1: "{padding + height}",
                    x2: "{width - padding}",
                    y2: "{padding + height}",
                    stroke: "#ddd",
                    stroke_width: "1",
                }

                {
                    series.values.iter().enumerate().map(|(i, value)| {
                        let x = padding + (i as f32) * (bar_width + bar_gap);
                        // Negative corrections draw as empty bars
                        let h = (*value).max(0) as f32 / max_value * height;
                        let y = padding + (height - h);
                        rsx! {
                            rect {
                                key: "{i}",
                                x: "{x}",
                                y: "{y}",
                                width: "{bar_width}",
                                height: "{h}",
                                fill: "{series.color}",
                                stroke: "#999",
                                stroke_width: "0.5",
                                rx: "3",
                                onmouseenter: move |_| hovered.set(Some(i)),
                                onmouseleave: move |_| hovered.set(None),
                            }
                        }
                    })
                }

                // Month labels under the bars
                {
                    series.labels.iter().enumerate().map(|(i, label)| {
                        let x = padding + (i as f32) * (bar_width + bar_gap);
                        rsx! {
                            text {
                                key: "label-{i}",
                                x: "{x}",
                                y: "{height + padding + 16.0}",
                                font_size: "11",
                                fill: "#666",
                                "{label}"
                            }
                        }
                    })
                }

                // Tooltip for the hovered bar
                {
                    match hovered() {
                        Some(i) if i < series.labels.len() => {
                            let value = series.values[i];
                            let value_label = format!("{}", value);
                            let month_label = series.labels[i].clone();
                            let x = padding + (i as f32) * (bar_width + bar_gap) + bar_width / 2.0;
                            let h = value.max(0) as f32 / max_value * height;
                            let bar_top = padding + (height - h);
                            let tip_w = 76.0f32;
                            let tip_h = 34.0f32;
                            let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                            let tip_y = (bar_top - 8.0 - tip_h).max(4.0);
                            let tooltip_key = "tooltip";
                            rsx! {
                                g { key: "{tooltip_key}",
                                    rect {
                                        x: "{tip_x}",
                                        y: "{tip_y}",
                                        width: "{tip_w}",
                                        height: "{tip_h}",
                                        rx: "6",
                                        fill: "#333",
                                    }
                                    text {
                                        x: "{tip_x + 8.0}",
                                        y: "{tip_y + 14.0}",
                                        font_size: "11",
                                        fill: "#ccc",
                                        "{month_label}"
                                    }
                                    text {
                                        x: "{tip_x + 8.0}",
                                        y: "{tip_y + 28.0}",
                                        font_size: "11",
                                        fill: "#fff",
                                        "{value_label}"
                                    }
                                }
                            }
                        }
                        _ => rsx! { Fragment {} },
                    }
                }
            }
        }
    }
}
