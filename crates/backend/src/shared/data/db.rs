use std::path::Path;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
    Value,
};

/// Opens a connection pool for the given SQLite URL
pub async fn connect(db_url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(db_url.to_string());
    options
        .max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    Ok(Database::connect(options).await?)
}

/// Opens (creating if needed) the database file and makes sure the schema exists
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database at {}", absolute_path.display());
    let conn = connect(&db_url, 5).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Creates the `teams` and `financials` tables if they are missing.
///
/// `revenue` and `ebitda` are declared without a type, so SQLite stores
/// each value with the type it was written with (REAL, INTEGER or TEXT).
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS financials (
            team_id TEXT NOT NULL,
            season_year INTEGER NOT NULL,
            revenue,
            ebitda,
            UNIQUE (team_id, season_year)
        );
        "#,
        r#"
        CREATE INDEX IF NOT EXISTS idx_financials_team_season
            ON financials (team_id, season_year);
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

const DEMO_TEAMS: &[(&str, &str)] = &[
    ("team-harbor", "Harbor City Mariners"),
    ("team-north", "Northfield Rangers"),
    ("team-redwood", "Redwood Valley FC"),
];

// (team_id, season_year, revenue, ebitda)
const DEMO_FINANCIALS: &[(&str, i32, f64, f64)] = &[
    ("team-harbor", 2019, 182_400_000.0, 21_300_000.0),
    ("team-harbor", 2020, 121_750_000.0, -4_100_000.0),
    ("team-harbor", 2021, 168_900_000.0, 12_800_000.0),
    ("team-harbor", 2022, 205_300_000.0, 27_450_000.0),
    ("team-harbor", 2023, 231_000_000.0, 33_900_000.0),
    ("team-north", 2020, 94_200_000.0, 6_050_000.0),
    ("team-north", 2021, 101_600_000.0, 8_900_000.0),
    ("team-north", 2022, 99_800_000.0, 7_300_000.0),
    ("team-north", 2023, 117_450_000.0, 11_200_000.0),
    ("team-redwood", 2021, 48_300_000.0, 2_150_000.0),
    ("team-redwood", 2022, 57_900_000.0, 4_600_000.0),
    ("team-redwood", 2023, 64_100_000.0, 5_050_000.0),
];

/// Fills an empty store with demo teams and financials.
///
/// Returns `false` without touching anything when teams already exist.
pub async fn seed_demo_data(conn: &DatabaseConnection) -> anyhow::Result<bool> {
    let count = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM teams".to_string(),
        ))
        .await?
        .map(|row| row.try_get::<i64>("", "cnt"))
        .transpose()?
        .unwrap_or(0);

    if count > 0 {
        tracing::info!("Store already has {} teams, skipping demo seed", count);
        return Ok(false);
    }

    for (id, name) in DEMO_TEAMS {
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO teams (id, name) VALUES (?, ?)",
            [(*id).into(), (*name).into()],
        ))
        .await?;
    }

    for (team_id, season_year, revenue, ebitda) in DEMO_FINANCIALS {
        let values: [Value; 4] = [
            (*team_id).into(),
            (*season_year).into(),
            (*revenue).into(),
            (*ebitda).into(),
        ];
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO financials (team_id, season_year, revenue, ebitda) VALUES (?, ?, ?, ?)",
            values,
        ))
        .await?;
    }

    tracing::info!(
        "Seeded {} demo teams with {} season rows",
        DEMO_TEAMS.len(),
        DEMO_FINANCIALS.len()
    );
    Ok(true)
}
