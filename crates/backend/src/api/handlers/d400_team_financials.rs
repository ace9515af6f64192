use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d400_team_financials::{
    DataResponse, RevenuesQuery, RevenuesResponse, TeamsResponse,
};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::dashboards::d400_team_financials::service;

const TEAMS_FAILED: &str = "Failed to fetch teams";
const REVENUES_FAILED: &str = "Failed to fetch revenues";

/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<TeamsResponse>, ApiError> {
    match service::list_teams(state.financials.as_ref()).await {
        Ok(teams) => {
            tracing::info!("D400 Team financials: returning {} teams", teams.len());
            Ok(Json(DataResponse::new(teams)))
        }
        Err(e) => {
            tracing::error!("D400 Team financials: failed to list teams: {}", e);
            Err(ApiError::from_store(e, TEAMS_FAILED))
        }
    }
}

/// GET /api/revenues?teamId=team-harbor
pub async fn list_revenues(
    State(state): State<AppState>,
    Query(query): Query<RevenuesQuery>,
) -> Result<Json<RevenuesResponse>, ApiError> {
    let team_id = query
        .team_id()
        .ok_or(ApiError::MissingParameter("teamId"))?;

    tracing::info!("D400 Team financials: getting revenues for team {}", team_id);

    match service::list_revenues(state.financials.as_ref(), team_id).await {
        Ok(records) => {
            tracing::info!(
                "D400 Team financials: returning {} seasons for team {}",
                records.len(),
                team_id
            );
            Ok(Json(DataResponse::new(records)))
        }
        Err(e) => {
            tracing::error!(
                "D400 Team financials: failed to get revenues for team {}: {}",
                team_id,
                e
            );
            Err(ApiError::from_store(e, REVENUES_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use contracts::dashboards::d400_team_financials::Team;
    use sea_orm::DbErr;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::state::AppState;
    use crate::dashboards::d400_team_financials::repository::{
        FinancialRow, FinancialsStore, RawNumeric, StoreError,
    };
    use crate::routes::configure_routes;

    #[derive(Default)]
    struct FakeStore {
        teams: Vec<Team>,
        financials: HashMap<String, Vec<FinancialRow>>,
        query_error: Option<String>,
        panic: bool,
    }

    #[async_trait]
    impl FinancialsStore for FakeStore {
        async fn list_teams(&self) -> Result<Vec<Team>, StoreError> {
            if self.panic {
                panic!("store exploded");
            }
            match &self.query_error {
                Some(msg) => Err(StoreError::Query(DbErr::Custom(msg.clone()))),
                None => Ok(self.teams.clone()),
            }
        }

        async fn list_financials(&self, team_id: &str) -> Result<Vec<FinancialRow>, StoreError> {
            if self.panic {
                panic!("store exploded");
            }
            match &self.query_error {
                Some(msg) => Err(StoreError::Query(DbErr::Custom(msg.clone()))),
                None => Ok(self.financials.get(team_id).cloned().unwrap_or_default()),
            }
        }
    }

    fn app(store: FakeStore) -> Router {
        configure_routes(AppState::new(Arc::new(store)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn row(season_year: i32, revenue: RawNumeric, ebitda: RawNumeric) -> FinancialRow {
        FinancialRow {
            season_year,
            revenue,
            ebitda,
        }
    }

    #[tokio::test]
    async fn test_teams_are_wrapped_in_data() {
        let store = FakeStore {
            teams: vec![
                Team {
                    id: "t-1".into(),
                    name: "Aces".into(),
                },
                Team {
                    id: "t-2".into(),
                    name: "Mariners".into(),
                },
            ],
            ..Default::default()
        };

        let (status, body) = get(app(store), "/api/teams").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "data": [
                { "id": "t-1", "name": "Aces" },
                { "id": "t-2", "name": "Mariners" }
            ]})
        );
    }

    #[tokio::test]
    async fn test_teams_store_error_passes_message() {
        let store = FakeStore {
            query_error: Some("database is locked".into()),
            ..Default::default()
        };
        let expected = DbErr::Custom("database is locked".into()).to_string();

        let (status, body) = get(app(store), "/api/teams").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": expected }));
    }

    #[tokio::test]
    async fn test_revenues_require_team_id() {
        let (status, body) = get(app(FakeStore::default()), "/api/revenues").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "teamId is required" }));

        let (status, body) = get(app(FakeStore::default()), "/api/revenues?teamId=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "teamId is required" }));
    }

    #[tokio::test]
    async fn test_revenues_coerce_decimal_strings() {
        let mut store = FakeStore::default();
        store.financials.insert(
            "t-1".into(),
            vec![
                row(
                    2020,
                    RawNumeric::Text("1234.5".into()),
                    RawNumeric::Number(12.0),
                ),
                row(
                    2021,
                    RawNumeric::Number(1500.0),
                    RawNumeric::Text("-3.75".into()),
                ),
            ],
        );

        let (status, body) = get(app(store), "/api/revenues?teamId=t-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "data": [
                { "season_year": 2020, "revenue": 1234.5, "ebitda": 12.0 },
                { "season_year": 2021, "revenue": 1500.0, "ebitda": -3.75 }
            ]})
        );
        assert!(body["data"][0]["revenue"].is_number());
    }

    #[tokio::test]
    async fn test_revenues_unknown_team_is_empty() {
        let (status, body) = get(app(FakeStore::default()), "/api/revenues?teamId=nobody").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_revenues_store_error_passes_message() {
        let store = FakeStore {
            query_error: Some("no such table: financials".into()),
            ..Default::default()
        };
        let expected = DbErr::Custom("no such table: financials".into()).to_string();

        let (status, body) = get(app(store), "/api/revenues?teamId=t-1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": expected }));
    }

    #[tokio::test]
    async fn test_revenues_bad_value_gets_generic_message() {
        let mut store = FakeStore::default();
        store.financials.insert(
            "t-1".into(),
            vec![row(
                2020,
                RawNumeric::Text("not a number".into()),
                RawNumeric::Number(1.0),
            )],
        );

        let (status, body) = get(app(store), "/api/revenues?teamId=t-1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch revenues" }));
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_error() {
        let store = FakeStore {
            panic: true,
            ..Default::default()
        };

        let (status, body) = get(app(store), "/api/revenues?teamId=t-1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(FakeStore::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
