pub mod api;
pub mod queries;
pub mod state;
pub mod ui;
