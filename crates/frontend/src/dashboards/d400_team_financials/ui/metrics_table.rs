use super::error_state::ErrorState;
use crate::dashboards::d400_team_financials::queries::{use_financials_queries, use_revenues};
use crate::dashboards::d400_team_financials::state::{
    initial_sort, sorted_rows, MetricColumn, MetricsSort,
};
use crate::shared::components::table::{
    format_currency, format_yoy, SortableHeaderCell, YOY_PLACEHOLDER,
};
use crate::shared::components::Card;
use crate::shared::icons::icon;
use crate::shared::query_cache::QueryState;
use contracts::dashboards::d400_team_financials::{compute_yoy, RevenueRecordWithYoY};
use leptos::prelude::*;

/// Yearly revenue and EBITDA with year-over-year changes
#[component]
pub fn MetricsTable(
    team_id: Signal<String>,
    team_name: Signal<Option<String>>,
) -> impl IntoView {
    let queries = use_financials_queries();
    let revenues = use_revenues(team_id);
    let retry = Callback::new(move |_| queries.retry_revenues(team_id.get_untracked()));
    let sort = RwSignal::new(initial_sort());

    let description = Signal::derive(move || {
        format!(
            "Year-over-year changes for {}",
            team_name.get().unwrap_or_else(|| "selected team".to_string())
        )
    });

    view! {
        <Card title="Revenue Metrics" description=description>
            {move || match revenues.get() {
                QueryState::Loading => view! {
                    <div class="skeleton skeleton--table"></div>
                }.into_any(),
                QueryState::Failed(_) => view! {
                    <ErrorState
                        message="Failed to load revenue data. Please try again."
                        on_retry=retry
                    />
                }.into_any(),
                QueryState::Ready(response) if response.data.is_empty() => view! {
                    <p class="state-message">"No revenue data available for this team"</p>
                }.into_any(),
                QueryState::Ready(response) => view! {
                    <MetricsGrid rows=compute_yoy(&response.data) sort=sort />
                }.into_any(),
            }}
        </Card>
    }
}

#[component]
fn MetricsGrid(rows: Vec<RevenueRecordWithYoY>, sort: RwSignal<MetricsSort>) -> impl IntoView {
    let headers = MetricColumn::ALL
        .into_iter()
        .map(|column| {
            view! {
                <SortableHeaderCell
                    label=column.label()
                    align=column.align()
                    indicator=Signal::derive(move || sort.get().indicator(column))
                    active=Signal::derive(move || sort.get().is_active(column))
                    on_sort=Callback::new(move |_| sort.update(|s| *s = s.toggle(column)))
                />
            }
        })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead class="table__head">
                    <tr>{headers}</tr>
                </thead>
                <tbody>
                    {move || {
                        sorted_rows(&rows, &sort.get())
                            .into_iter()
                            .map(|row| view! { <MetricsRow row=row /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn MetricsRow(row: RevenueRecordWithYoY) -> impl IntoView {
    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--strong">{row.season_year.to_string()}</td>
            <td class="table__cell table__cell--right">{format_currency(row.revenue)}</td>
            <YoyCell value=row.revenue_yoy />
            <td class="table__cell table__cell--right">{format_currency(row.ebitda)}</td>
            <YoyCell value=row.ebitda_yoy />
        </tr>
    }
}

#[component]
fn YoyCell(value: Option<f64>) -> impl IntoView {
    match value {
        None => view! {
            <td class="table__cell table__cell--right table__cell--muted">{YOY_PLACEHOLDER}</td>
        }
        .into_any(),
        Some(change) => {
            let up = change >= 0.0;
            let (class, glyph) = if up {
                ("yoy yoy--up", "trending-up")
            } else {
                ("yoy yoy--down", "trending-down")
            };
            view! {
                <td class="table__cell table__cell--right">
                    <span class=class>
                        {icon(glyph)}
                        {format_yoy(Some(change))}
                    </span>
                </td>
            }
            .into_any()
        }
    }
}
