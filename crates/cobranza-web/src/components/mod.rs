mod charts;
mod efficiency_chart;
mod insights_panel;
mod section;
mod trends_chart;

pub use efficiency_chart::EfficiencyChart;
pub use insights_panel::InsightsPanel;
pub use section::Section;
pub use trends_chart::TrendsChart;
