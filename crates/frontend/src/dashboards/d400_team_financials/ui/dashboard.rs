use super::empty_state::EmptyState;
use super::header::DashboardHeader;
use super::metrics_table::MetricsTable;
use super::revenue_chart::RevenueChart;
use super::team_selector::TeamSelector;
use crate::dashboards::d400_team_financials::queries::use_teams;
use leptos::prelude::*;

/// Team financials dashboard: team picker, revenue chart and YoY metrics table
#[component]
pub fn TeamFinancialsDashboard() -> impl IntoView {
    // Empty string means no team selected
    let selected_team = RwSignal::new(String::new());
    let teams = use_teams();

    let team_id = Signal::derive(move || selected_team.get());
    let team_name = Signal::derive(move || {
        let id = selected_team.get();
        teams.with(|state| {
            state
                .data()
                .and_then(|response| response.data.iter().find(|team| team.id == id))
                .map(|team| team.name.clone())
        })
    });

    view! {
        <div id="d400_team_financials--dashboard" class="dashboard">
            <DashboardHeader />
            <TeamSelector selected=selected_team />
            <Show
                when=move || !selected_team.get().is_empty()
                fallback=|| view! { <EmptyState /> }
            >
                <div class="dashboard__grid">
                    <RevenueChart team_id=team_id team_name=team_name />
                    <MetricsTable team_id=team_id team_name=team_name />
                </div>
            </Show>
        </div>
    }
}
