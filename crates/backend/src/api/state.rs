use std::sync::Arc;

use crate::dashboards::d400_team_financials::repository::FinancialsStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub financials: Arc<dyn FinancialsStore>,
}

impl AppState {
    pub fn new(financials: Arc<dyn FinancialsStore>) -> Self {
        Self { financials }
    }
}
