//! Cached dashboard queries shared through context

use contracts::dashboards::d400_team_financials::{RevenuesResponse, TeamsResponse};
use leptos::prelude::*;

use super::api;
use crate::shared::query_cache::{QueryCache, QueryState};

#[derive(Clone, Copy)]
pub struct FinancialsQueries {
    pub teams: QueryCache<(), TeamsResponse>,
    /// Keyed by team id
    pub revenues: QueryCache<String, RevenuesResponse>,
}

impl FinancialsQueries {
    pub fn new() -> Self {
        Self {
            teams: QueryCache::new(),
            revenues: QueryCache::new(),
        }
    }

    /// Drops the cached team list and requests it again
    pub fn retry_teams(&self) {
        self.teams.invalidate(&());
        self.teams.fetch((), api::fetch_teams);
    }

    /// Drops the cached revenues of `team_id` and requests them again
    pub fn retry_revenues(&self, team_id: String) {
        if team_id.is_empty() {
            return;
        }
        self.revenues.invalidate(&team_id);
        let id = team_id.clone();
        self.revenues
            .fetch(team_id, move || async move { api::fetch_revenues(&id).await });
    }
}

impl Default for FinancialsQueries {
    fn default() -> Self {
        Self::new()
    }
}

/// Queries provided by `App`; a fresh set when rendered outside of it
pub fn use_financials_queries() -> FinancialsQueries {
    use_context::<FinancialsQueries>().unwrap_or_else(|| {
        log::warn!("FinancialsQueries not provided, using a local cache");
        FinancialsQueries::new()
    })
}

/// Team list, fetched once per app
pub fn use_teams() -> Signal<QueryState<TeamsResponse>> {
    let queries = use_financials_queries();
    let cache = queries.teams;

    Effect::new(move |_| {
        cache.fetch((), api::fetch_teams);
    });

    Signal::derive(move || cache.state(&()))
}

/// Revenues of the team in `team_id`. Stays loading while no team is selected
/// and issues one request per team no matter how many components ask.
pub fn use_revenues(team_id: Signal<String>) -> Signal<QueryState<RevenuesResponse>> {
    let queries = use_financials_queries();
    let cache = queries.revenues;

    Effect::new(move |_| {
        let id = team_id.get();
        if id.is_empty() {
            return;
        }
        let key = id.clone();
        cache.fetch(key, move || async move { api::fetch_revenues(&id).await });
    });

    Signal::derive(move || {
        let id = team_id.get();
        if id.is_empty() {
            QueryState::Loading
        } else {
            cache.state(&id)
        }
    })
}
