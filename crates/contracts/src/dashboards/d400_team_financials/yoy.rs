//! Year-over-year annotation of season financials

use super::dto::{RevenueRecord, RevenueRecordWithYoY};

/// Percentage change from `previous` to `current`.
///
/// Returns `None` when `previous` is zero, so every produced value is finite.
/// No change is always `+0.0`, also for a negative `previous`.
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    // x + 0.0 turns -0.0 into +0.0
    Some((current - previous) / previous * 100.0 + 0.0)
}

/// Sorts records by season (stable) and annotates each one with the change
/// versus the previous available season.
///
/// The earliest season gets `None` for both metrics. Duplicate seasons are
/// kept in their input order and compared with each other like any other
/// adjacent pair.
pub fn compute_yoy(rows: &[RevenueRecord]) -> Vec<RevenueRecordWithYoY> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|row| row.season_year);

    let mut result = Vec::with_capacity(sorted.len());
    let mut previous: Option<&RevenueRecord> = None;

    for row in &sorted {
        result.push(RevenueRecordWithYoY {
            season_year: row.season_year,
            revenue: row.revenue,
            ebitda: row.ebitda,
            revenue_yoy: previous.and_then(|prev| percent_change(prev.revenue, row.revenue)),
            ebitda_yoy: previous.and_then(|prev| percent_change(prev.ebitda, row.ebitda)),
        });
        previous = Some(row);
    }

    result
}
