pub mod chart;
pub mod field_selection;

pub use chart::{chart_color, ChartSeries};
pub use field_selection::{month_of, FieldSelection};
