use async_trait::async_trait;
use contracts::dashboards::d400_team_financials::Team;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, QueryResult,
    Statement,
};

/// Failures of the financials store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected or failed the query
    #[error("{0}")]
    Query(#[from] DbErr),
    /// A row came back in a shape we cannot read
    #[error("failed to decode {0}")]
    Decode(String),
}

/// Numeric column value as stored: SQLite may hand back a number or a decimal string
#[derive(Debug, Clone, PartialEq)]
pub enum RawNumeric {
    Number(f64),
    Text(String),
}

impl RawNumeric {
    /// Numbers pass through, decimal strings are parsed
    pub fn to_f64(&self) -> Result<f64, StoreError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| StoreError::Decode(format!("numeric value {:?}", text))),
        }
    }
}

/// One row of the `financials` table before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialRow {
    pub season_year: i32,
    pub revenue: RawNumeric,
    pub ebitda: RawNumeric,
}

/// Read access to teams and their season financials
#[async_trait]
pub trait FinancialsStore: Send + Sync {
    /// All teams ordered by name
    async fn list_teams(&self) -> Result<Vec<Team>, StoreError>;

    /// Season rows of one team ordered by season_year ascending
    async fn list_financials(&self, team_id: &str) -> Result<Vec<FinancialRow>, StoreError>;
}

/// `FinancialsStore` backed by the SQLite database
pub struct SqliteFinancialsStore {
    db: DatabaseConnection,
}

impl SqliteFinancialsStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct TeamRow {
    id: String,
    name: String,
}

#[async_trait]
impl FinancialsStore for SqliteFinancialsStore {
    async fn list_teams(&self) -> Result<Vec<Team>, StoreError> {
        let sql = r#"
            SELECT id, name
            FROM teams
            ORDER BY name
        "#;

        let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
        let rows = TeamRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows
            .into_iter()
            .map(|row| Team {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    async fn list_financials(&self, team_id: &str) -> Result<Vec<FinancialRow>, StoreError> {
        let sql = r#"
            SELECT season_year, revenue, ebitda
            FROM financials
            WHERE team_id = ?
            ORDER BY season_year ASC
        "#;

        let stmt =
            Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, [team_id.into()]);
        let rows = self.db.query_all(stmt).await?;

        rows.iter().map(decode_financial_row).collect()
    }
}

fn decode_financial_row(row: &QueryResult) -> Result<FinancialRow, StoreError> {
    let season_year = row
        .try_get::<i32>("", "season_year")
        .map_err(|e| StoreError::Decode(format!("season_year: {}", e)))?;

    Ok(FinancialRow {
        season_year,
        revenue: raw_numeric(row, "revenue")?,
        ebitda: raw_numeric(row, "ebitda")?,
    })
}

// Columns have no declared affinity, so each value keeps the type it was written with
fn raw_numeric(row: &QueryResult, column: &str) -> Result<RawNumeric, StoreError> {
    if let Ok(value) = row.try_get::<f64>("", column) {
        return Ok(RawNumeric::Number(value));
    }
    if let Ok(value) = row.try_get::<i64>("", column) {
        return Ok(RawNumeric::Number(value as f64));
    }
    row.try_get::<String>("", column)
        .map(RawNumeric::Text)
        .map_err(|e| StoreError::Decode(format!("{}: {}", column, e)))
}
