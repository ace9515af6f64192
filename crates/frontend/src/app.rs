use crate::dashboards::d400_team_financials::queries::FinancialsQueries;
use crate::dashboards::d400_team_financials::ui::TeamFinancialsDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One query cache per app, shared by every dashboard component
    provide_context(FinancialsQueries::new());

    view! {
        <TeamFinancialsDashboard />
    }
}
