use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn DashboardHeader() -> impl IntoView {
    view! {
        <PageHeader
            title="Team Financial Dashboard"
            subtitle="Select a team to view revenue trends and metrics".to_string()
        />
    }
}
