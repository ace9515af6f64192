//! Revenue area chart, drawn as inline SVG

use super::error_state::ErrorState;
use crate::dashboards::d400_team_financials::queries::{use_financials_queries, use_revenues};
use crate::shared::components::table::{format_axis_tick, format_currency};
use crate::shared::components::Card;
use crate::shared::query_cache::QueryState;
use contracts::dashboards::d400_team_financials::RevenueRecord;
use leptos::prelude::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 36.0;
const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub season_year: i32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

/// Screen coordinates of the chart in a `width` x `height` viewBox
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    pub ticks: Vec<AxisTick>,
    /// y of the zero line
    pub baseline: f64,
    pub line_path: String,
    pub area_path: String,
}

fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

impl ChartGeometry {
    pub fn new(records: &[RevenueRecord], width: f64, height: f64) -> Self {
        let mut records = records.to_vec();
        records.sort_by_key(|r| r.season_year);

        let left = PAD_LEFT;
        let right = width - PAD_RIGHT;
        let top = PAD_TOP;
        let bottom = height - PAD_BOTTOM;

        // Scale always includes zero so the area closes on the zero line
        let min_value = records.iter().map(|r| r.revenue).fold(0.0_f64, f64::min);
        let mut max_value = records.iter().map(|r| r.revenue).fold(0.0_f64, f64::max);
        if max_value <= min_value {
            max_value = min_value + 1.0;
        }
        let scale_y =
            |value: f64| bottom - (value - min_value) / (max_value - min_value) * (bottom - top);

        let step = if records.len() > 1 {
            (right - left) / (records.len() - 1) as f64
        } else {
            0.0
        };
        let points: Vec<ChartPoint> = records
            .iter()
            .enumerate()
            .map(|(i, r)| ChartPoint {
                x: if records.len() == 1 {
                    (left + right) / 2.0
                } else {
                    left + step * i as f64
                },
                y: scale_y(r.revenue),
                season_year: r.season_year,
                revenue: r.revenue,
            })
            .collect();

        let ticks = (0..TICK_COUNT)
            .map(|i| {
                let fraction = i as f64 / (TICK_COUNT - 1) as f64;
                let value = min_value + (max_value - min_value) * fraction;
                AxisTick {
                    y: scale_y(value),
                    label: format_axis_tick(value),
                }
            })
            .collect();

        let baseline = scale_y(0.0);

        let line_path = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let command = if i == 0 { "M" } else { "L" };
                format!("{}{},{}", command, coord(p.x), coord(p.y))
            })
            .collect::<Vec<_>>()
            .join(" ");

        let area_path = match (points.first(), points.last()) {
            (Some(first), Some(last)) => format!(
                "{} L{},{} L{},{} Z",
                line_path,
                coord(last.x),
                coord(baseline),
                coord(first.x),
                coord(baseline)
            ),
            _ => String::new(),
        };

        Self {
            points,
            ticks,
            baseline,
            line_path,
            area_path,
        }
    }
}

#[component]
pub fn RevenueChart(
    team_id: Signal<String>,
    team_name: Signal<Option<String>>,
) -> impl IntoView {
    let queries = use_financials_queries();
    let revenues = use_revenues(team_id);
    let retry = Callback::new(move |_| queries.retry_revenues(team_id.get_untracked()));
    let description = Signal::derive(move || match team_name.get() {
        Some(name) => format!("{} revenue trends", name),
        None => "Revenue trends".to_string(),
    });

    view! {
        <Card title="Revenue Over Time" description=description>
            {move || match revenues.get() {
                QueryState::Loading => view! {
                    <div class="skeleton skeleton--chart"></div>
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
                    <RevenueAreaChart records=response.data />
                }.into_any(),
            }}
        </Card>
    }
}

#[component]
fn RevenueAreaChart(records: Vec<RevenueRecord>) -> impl IntoView {
    let geometry = ChartGeometry::new(&records, CHART_WIDTH, CHART_HEIGHT);
    let hovered = RwSignal::new(None::<usize>);
    let readout_points = geometry.points.clone();

    let grid = geometry
        .ticks
        .into_iter()
        .map(|tick| {
            view! {
                <g class="chart__tick">
                    <line
                        class="chart__grid"
                        x1=coord(PAD_LEFT)
                        x2=coord(CHART_WIDTH - PAD_RIGHT)
                        y1=coord(tick.y)
                        y2=coord(tick.y)
                    />
                    <text
                        class="chart__tick-label"
                        x=coord(PAD_LEFT - 8.0)
                        y=coord(tick.y + 4.0)
                        text-anchor="end"
                    >
                        {tick.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    let year_labels = geometry
        .points
        .iter()
        .map(|p| {
            view! {
                <text
                    class="chart__tick-label"
                    x=coord(p.x)
                    y=coord(CHART_HEIGHT - PAD_BOTTOM + 20.0)
                    text-anchor="middle"
                >
                    {p.season_year.to_string()}
                </text>
            }
        })
        .collect_view();

    let markers = geometry
        .points
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <circle
                    class="chart__point"
                    cx=coord(p.x)
                    cy=coord(p.y)
                    r="4"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                role="img"
                aria-label="Revenue by season year"
            >
                <defs>
                    <linearGradient id="revenue-fill" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color="#2563eb" stop-opacity="0.3" />
                        <stop offset="95%" stop-color="#2563eb" stop-opacity="0" />
                    </linearGradient>
                </defs>
                {grid}
                <line
                    class="chart__axis"
                    x1=coord(PAD_LEFT)
                    x2=coord(CHART_WIDTH - PAD_RIGHT)
                    y1=coord(geometry.baseline)
                    y2=coord(geometry.baseline)
                />
                <path class="chart__area" d=geometry.area_path fill="url(#revenue-fill)" />
                <path class="chart__line" d=geometry.line_path fill="none" />
                {year_labels}
                {markers}
            </svg>
            <div class="chart__readout">
                {move || {
                    hovered
                        .get()
                        .and_then(|i| readout_points.get(i))
                        .map(|p| {
                            format!(
                                "Season Year: {} · Revenue: {}",
                                p.season_year,
                                format_currency(p.revenue)
                            )
                        })
                        .unwrap_or_default()
                }}
            </div>
        </div>
    }
}
