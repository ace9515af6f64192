use super::error_state::ErrorState;
use crate::dashboards::d400_team_financials::queries::{use_financials_queries, use_teams};
use crate::shared::components::ui::Select;
use crate::shared::components::Card;
use crate::shared::query_cache::QueryState;
use leptos::prelude::*;

#[component]
pub fn TeamSelector(
    /// Selected team id, empty while nothing is selected
    selected: RwSignal<String>,
) -> impl IntoView {
    let queries = use_financials_queries();
    let teams = use_teams();
    let description = Signal::derive(|| "Choose a team to view financial data".to_string());

    view! {
        <Card title="Team Selection" description=description>
            {move || match teams.get() {
                QueryState::Loading => view! {
                    <div class="skeleton skeleton--input"></div>
                }.into_any(),
                QueryState::Failed(_) => view! {
                    <ErrorState
                        message="Failed to load teams. Please try again."
                        on_retry=Callback::new(move |_| queries.retry_teams())
                    />
                }.into_any(),
                QueryState::Ready(response) if response.data.is_empty() => view! {
                    <p class="state-message">"No teams available"</p>
                }.into_any(),
                QueryState::Ready(response) => {
                    let options: Vec<(String, String)> = response
                        .data
                        .into_iter()
                        .map(|team| (team.id, team.name))
                        .collect();
                    view! {
                        <Select
                            id="team-select"
                            value=Signal::derive(move || selected.get())
                            options=Signal::derive(move || options.clone())
                            placeholder="Select a team"
                            on_change=Callback::new(move |id: String| selected.set(id))
                        />
                    }.into_any()
                }
            }}
        </Card>
    }
}
