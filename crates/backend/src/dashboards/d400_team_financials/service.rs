use contracts::dashboards::d400_team_financials::{RevenueRecord, Team};

use super::repository::{FinancialRow, FinancialsStore, StoreError};

/// Teams ordered by name
pub async fn list_teams(store: &dyn FinancialsStore) -> Result<Vec<Team>, StoreError> {
    store.list_teams().await
}

/// Season financials of a team with numeric columns normalized
pub async fn list_revenues(
    store: &dyn FinancialsStore,
    team_id: &str,
) -> Result<Vec<RevenueRecord>, StoreError> {
    let rows = store.list_financials(team_id).await?;
    normalize_rows(rows)
}

/// Converts stored rows into records, parsing decimal strings where needed
pub fn normalize_rows(rows: Vec<FinancialRow>) -> Result<Vec<RevenueRecord>, StoreError> {
    rows.into_iter()
        .map(|row| {
            Ok(RevenueRecord {
                season_year: row.season_year,
                revenue: row.revenue.to_f64()?,
                ebitda: row.ebitda.to_f64()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_team_financials::repository::RawNumeric;

    #[test]
    fn test_normalize_mixed_rows() {
        let rows = vec![
            FinancialRow {
                season_year: 2020,
                revenue: RawNumeric::Text("1234.5".into()),
                ebitda: RawNumeric::Number(10.0),
            },
            FinancialRow {
                season_year: 2021,
                revenue: RawNumeric::Number(2000.0),
                ebitda: RawNumeric::Text("-15.25".into()),
            },
        ];

        let records = normalize_rows(rows).unwrap();
        assert_eq!(
            records,
            vec![
                RevenueRecord {
                    season_year: 2020,
                    revenue: 1234.5,
                    ebitda: 10.0,
                },
                RevenueRecord {
                    season_year: 2021,
                    revenue: 2000.0,
                    ebitda: -15.25,
                },
            ]
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let rows = vec![FinancialRow {
            season_year: 2020,
            revenue: RawNumeric::Text("twelve".into()),
            ebitda: RawNumeric::Number(1.0),
        }];
        assert!(matches!(normalize_rows(rows), Err(StoreError::Decode(_))));
    }
}
