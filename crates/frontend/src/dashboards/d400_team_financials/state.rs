//! Table sort state of the metrics card

use contracts::dashboards::d400_team_financials::RevenueRecordWithYoY;

use crate::shared::components::table::SortCycle;

/// Sortable columns of the metrics table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricColumn {
    SeasonYear,
    Revenue,
    RevenueYoy,
    Ebitda,
    EbitdaYoy,
}

impl MetricColumn {
    pub const ALL: [MetricColumn; 5] = [
        MetricColumn::SeasonYear,
        MetricColumn::Revenue,
        MetricColumn::RevenueYoy,
        MetricColumn::Ebitda,
        MetricColumn::EbitdaYoy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SeasonYear => "Season Year",
            Self::Revenue => "Revenue",
            Self::RevenueYoy => "Revenue YoY",
            Self::Ebitda => "EBITDA",
            Self::EbitdaYoy => "EBITDA YoY",
        }
    }

    pub fn align(&self) -> &'static str {
        match self {
            Self::SeasonYear => "left",
            _ => "right",
        }
    }

    /// Sort key of `row`; a missing YoY sorts as zero
    pub fn value(&self, row: &RevenueRecordWithYoY) -> f64 {
        match self {
            Self::SeasonYear => row.season_year as f64,
            Self::Revenue => row.revenue,
            Self::RevenueYoy => row.revenue_yoy.unwrap_or(0.0),
            Self::Ebitda => row.ebitda,
            Self::EbitdaYoy => row.ebitda_yoy.unwrap_or(0.0),
        }
    }
}

pub type MetricsSort = SortCycle<MetricColumn>;

pub fn initial_sort() -> MetricsSort {
    SortCycle::new(MetricColumn::SeasonYear)
}

/// Rows in display order for `sort`
pub fn sorted_rows(
    rows: &[RevenueRecordWithYoY],
    sort: &MetricsSort,
) -> Vec<RevenueRecordWithYoY> {
    sort.apply(rows, |row, column| column.value(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::SortDirection;
    use contracts::dashboards::d400_team_financials::{compute_yoy, RevenueRecord};

    fn record(season_year: i32, revenue: f64, ebitda: f64) -> RevenueRecord {
        RevenueRecord {
            season_year,
            revenue,
            ebitda,
        }
    }

    fn annotated() -> Vec<RevenueRecordWithYoY> {
        compute_yoy(&[
            record(2020, 200.0, 20.0),
            record(2021, 100.0, 30.0),
            record(2022, 150.0, 15.0),
        ])
    }

    fn years(rows: &[RevenueRecordWithYoY]) -> Vec<i32> {
        rows.iter().map(|r| r.season_year).collect()
    }

    #[test]
    fn test_initial_sort_is_newest_season_first() {
        let rows = sorted_rows(&annotated(), &initial_sort());
        assert_eq!(years(&rows), vec![2022, 2021, 2020]);
    }

    #[test]
    fn test_unsorted_keeps_chronological_order() {
        let sort = MetricsSort {
            column: MetricColumn::Revenue,
            direction: SortDirection::Unsorted,
        };
        assert_eq!(years(&sorted_rows(&annotated(), &sort)), vec![2020, 2021, 2022]);
    }

    #[test]
    fn test_sort_by_revenue_ascending() {
        let sort = initial_sort()
            .toggle(MetricColumn::Revenue)
            .toggle(MetricColumn::Revenue);
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(years(&sorted_rows(&annotated(), &sort)), vec![2021, 2022, 2020]);
    }

    #[test]
    fn test_missing_yoy_sorts_as_zero() {
        // revenue yoy: 2020 none (0), 2021 -50, 2022 +50
        let sort = initial_sort().toggle(MetricColumn::RevenueYoy);
        assert_eq!(years(&sorted_rows(&annotated(), &sort)), vec![2022, 2020, 2021]);
    }

    #[test]
    fn test_columns_in_display_order() {
        let labels: Vec<_> = MetricColumn::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Season Year", "Revenue", "Revenue YoY", "EBITDA", "EBITDA YoY"]
        );
        assert_eq!(MetricColumn::SeasonYear.align(), "left");
        assert_eq!(MetricColumn::EbitdaYoy.align(), "right");
    }

    #[test]
    fn test_flat_negative_yoy_ties_with_missing_yoy() {
        // 2020 has no yoy, 2021 is flat on a negative ebitda
        let rows = compute_yoy(&[record(2020, 100.0, -5.0), record(2021, 100.0, -5.0)]);
        let desc = initial_sort().toggle(MetricColumn::EbitdaYoy);
        assert_eq!(years(&sorted_rows(&rows, &desc)), vec![2020, 2021]);
        let asc = desc.toggle(MetricColumn::EbitdaYoy);
        assert_eq!(years(&sorted_rows(&rows, &asc)), vec![2020, 2021]);
    }
}
