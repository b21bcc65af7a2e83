use axum::{
    extract::{Form, Json, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::AdvisorConfig;
use crate::engine::{recommend, RecommendationRecord};
use crate::input::{InputError, ProjectInput};
use crate::knowledge::KnowledgeBase;
use crate::render::{self, RenderFormat};

/// Errors surfaced by handlers.
pub enum ServerError {
    /// The submission was incomplete; the engine never ran.
    Input(InputError),
    Internal(anyhow::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Input(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": err.to_string(),
                    "missing": err.missing_fields(),
                })),
            )
                .into_response(),
            ServerError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": format!("Stack Advisor Error: {err}") })),
            )
                .into_response(),
        }
    }
}

impl From<InputError> for ServerError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.into())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub kb: Arc<KnowledgeBase>,
}

impl AppState {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb: Arc::new(kb) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin().clone())
    }
}

#[derive(Debug, Deserialize)]
struct RenderQuery {
    #[serde(default)]
    format: Option<RenderFormat>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/health", get(health))
        .route("/recommend", post(recommend_form))
        .route("/v1/recommendations", post(recommend_json))
        .route("/v1/recommendations/render", post(recommend_rendered))
        .route("/v1/knowledge-base", get(knowledge_base))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: AdvisorConfig) -> Result<()> {
    let kb = config.load_knowledge_base()?;
    let app = router(AppState::new(kb));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Stack Advisor listening on http://{}", listener.local_addr()?);
    println!("🚀 Stack Advisor Ready: http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn run(state: &AppState, input: &ProjectInput) -> Result<RecommendationRecord, InputError> {
    match recommend(input, &state.kb) {
        Ok(record) => {
            info!(
                project_type = %record.project_type,
                risk_score = record.metrics.risk_score,
                "Recommendation generated"
            );
            Ok(record)
        }
        Err(err) => {
            warn!("Rejected submission: {}", err);
            Err(err)
        }
    }
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn form_page() -> Html<String> {
    Html(render::render_form_page(None))
}

async fn recommend_form(
    State(state): State<AppState>,
    Form(input): Form<ProjectInput>,
) -> Response {
    match run(&state, &input) {
        Ok(record) => {
            let body = format!(
                "<p><a href=\"/\">← New recommendation</a></p>\n{}",
                render::render_cards(&record)
            );
            Html(render::render_page(&record.title, &body)).into_response()
        }
        Err(err) => {
            let notice = format!(
                "Please fill all the required fields before generating a recommendation ({err})."
            );
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::render_form_page(Some(notice.as_str()))),
            )
                .into_response()
        }
    }
}

async fn recommend_json(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> Result<Json<RecommendationRecord>, ServerError> {
    Ok(Json(run(&state, &input)?))
}

async fn recommend_rendered(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
    Json(input): Json<ProjectInput>,
) -> Result<Response, ServerError> {
    let format = query.format.unwrap_or(RenderFormat::Html);
    let record = run(&state, &input)?;
    let body = render::render(&record, format)?;
    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}

async fn knowledge_base(State(state): State<AppState>) -> Json<KnowledgeBase> {
    Json(state.kb.as_ref().clone())
}
