use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::model::dataset::Dataset;
use crate::model::ranking::RankingMode;
use crate::model::scenario::ScenarioView;
use crate::report::html::{render_fragment, render_page};
use crate::report::{ScenarioOption, scenario_options};
use crate::view::build_view;

#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub mode: RankingMode,
}

impl AppState {
    pub fn new(dataset: Dataset, mode: RankingMode) -> Self {
        Self {
            dataset: Arc::new(dataset),
            mode,
        }
    }

    fn view(&self, instance: i64) -> ScenarioView {
        debug!(instance, mode = self.mode.as_str(), "building scenario view");
        build_view(&self.dataset, instance, self.mode)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub mode: RankingMode,
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct ScenarioQuery {
    pub scenario: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub scenarios: usize,
}

async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<ScenarioQuery>,
) -> Html<String> {
    let instance = query
        .scenario
        .or_else(|| state.dataset.first_instance())
        .unwrap_or_default();
    let view = state.view(instance);
    Html(render_page(&state.dataset, &view))
}

async fn fragment_handler(
    State(state): State<AppState>,
    Path(instance): Path<i64>,
) -> Html<String> {
    Html(render_fragment(&state.view(instance)))
}

async fn scenarios_handler(State(state): State<AppState>) -> Json<Vec<ScenarioOption>> {
    Json(scenario_options(&state.dataset))
}

async fn scenario_json_handler(
    State(state): State<AppState>,
    Path(instance): Path<i64>,
) -> Json<ScenarioView> {
    Json(state.view(instance))
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        scenarios: state.dataset.instances().len(),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/view/:instance", get(fragment_handler))
        .route("/api/scenarios", get(scenarios_handler))
        .route("/api/scenarios/:instance", get(scenario_json_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn run_server(dataset: Dataset, config: ServerConfig) -> Result<(), ServeError> {
    let state = AppState::new(dataset, config.mode);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    info!(
        "dashboard listening on http://{} (mode {})",
        config.bind_addr,
        config.mode.as_str()
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/server.rs"]
mod tests;
