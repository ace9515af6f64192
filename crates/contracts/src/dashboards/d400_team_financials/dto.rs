use serde::{Deserialize, Serialize};

/// Team available for selection on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Financials of one team for one season
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    pub season_year: i32,
    pub revenue: f64,
    pub ebitda: f64,
}

/// Season financials annotated with the change versus the previous available season.
///
/// `None` means there is nothing to compare against: either this is the
/// earliest season present or the previous value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecordWithYoY {
    pub season_year: i32,
    pub revenue: f64,
    pub ebitda: f64,
    #[serde(rename = "revenueYoy")]
    pub revenue_yoy: Option<f64>,
    #[serde(rename = "ebitdaYoy")]
    pub ebitda_yoy: Option<f64>,
}

impl RevenueRecordWithYoY {
    pub fn record(&self) -> RevenueRecord {
        RevenueRecord {
            season_year: self.season_year,
            revenue: self.revenue,
            ebitda: self.ebitda,
        }
    }
}

/// Success envelope: `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error envelope: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type TeamsResponse = DataResponse<Vec<Team>>;
pub type RevenuesResponse = DataResponse<Vec<RevenueRecord>>;

/// Query string of GET /api/revenues
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenuesQuery {
    #[serde(rename = "teamId", default)]
    pub team_id: Option<String>,
}

impl RevenuesQuery {
    /// Team id if present and non-empty
    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yoy_fields_use_camel_case() {
        let row = RevenueRecordWithYoY {
            season_year: 2021,
            revenue: 100.0,
            ebitda: 10.0,
            revenue_yoy: Some(100.0),
            ebitda_yoy: None,
        };
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["season_year"], 2021);
        assert_eq!(json["revenueYoy"], 100.0);
        assert!(json["ebitdaYoy"].is_null());
    }

    #[test]
    fn test_revenues_response_parses_envelope() {
        let body = r#"{"data":[{"season_year":2020,"revenue":1234.5,"ebitda":12}]}"#;
        let parsed: RevenuesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].revenue, 1234.5);
        assert_eq!(parsed.data[0].ebitda, 12.0);
    }

    #[test]
    fn test_empty_team_id_counts_as_missing() {
        let query = RevenuesQuery {
            team_id: Some(String::new()),
        };
        assert_eq!(query.team_id(), None);

        let query = RevenuesQuery {
            team_id: Some("t-1".to_string()),
        };
        assert_eq!(query.team_id(), Some("t-1"));
    }
}
