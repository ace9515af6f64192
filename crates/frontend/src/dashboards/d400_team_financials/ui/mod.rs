pub mod dashboard;
pub mod empty_state;
pub mod error_state;
pub mod header;
pub mod metrics_table;
pub mod revenue_chart;
pub mod team_selector;

pub use dashboard::TeamFinancialsDashboard;
