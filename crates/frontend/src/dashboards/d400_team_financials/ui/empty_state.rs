use crate::shared::icons::icon;
use leptos::prelude::*;

/// Shown in place of the chart and table while no team is selected
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <section class="card empty-state">
            <div class="empty-state__icon">{icon("bar-chart")}</div>
            <p class="empty-state__text">"Select a team above to view financial data"</p>
        </section>
    }
}
