pub mod bar_chart;
pub mod global_statistic;

pub use bar_chart::BarChart;
pub use global_statistic::GlobalStatisticScreen;
