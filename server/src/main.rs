use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{
        HeaderName, Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use server::{config::Config, error::AppError, server_state::ServerState};
use survey_service_data_management::DataManager;
use survey_service_lib::{report::Report, survey_answer::SurveyAnswer};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();

    tracing::info!("Connecting to database...");
    let data_manager = DataManager::start(&config.database_uri())
        .await
        .context("could not connect to database")?;

    let server_state = Arc::new(ServerState { data_manager });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([HeaderName::from_static("x-requested-with"), CONTENT_TYPE, AUTHORIZATION]);

    let app = Router::new()
        .route("/api/v1/health", get(health_check))
        .route("/api/v1/submit-answer", post(submit_answer))
        .route("/api/v1/submit-report", post(submit_report))
        .route("/api/v1/get-survey-answer", get(get_all_survey_answers))
        .route("/api/v1/get-survey-answer/{survey_answer_id}", get(get_survey_answer_by_id))
        .route("/api/v1/get-report", get(get_all_reports))
        .route("/api/v1/get-report/{report_id}", get(get_report_by_id))
        .route("/api/v1/get-stats", get(get_stats))
        .layer(cors)
        .with_state(server_state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await.context("failed to bind listener")?;
    tracing::info!("Server running on {address}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

async fn health_check() -> Response {
    tracing::info!("Health check endpoint accessed");
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

async fn submit_answer(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<SurveyAnswer>, JsonRejection>,
) -> Result<Response, AppError> {
    tracing::info!("Submit answer endpoint accessed");
    let Json(mut answer) = payload.map_err(invalid_json)?;

    answer.survey_answer_id = generate_submission_id();
    state.data_manager.submit_answer(&answer).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": format!("created with answer ID: {}", answer.survey_answer_id) })),
    )
        .into_response())
}

async fn submit_report(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<Report>, JsonRejection>,
) -> Result<Response, AppError> {
    tracing::info!("Submit report endpoint accessed");
    let Json(mut report) = payload.map_err(invalid_json)?;

    report.report_id = generate_submission_id();
    state.data_manager.submit_report(&report).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": format!("created with report ID: {}", report.report_id) })),
    )
        .into_response())
}

#[derive(Deserialize)]
struct ListQuery {
    page: Option<String>,
    pagesize: Option<String>,
    surveyid: Option<String>,
}

async fn get_all_survey_answers(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    tracing::info!("Get all survey answers endpoint accessed");
    let (page, page_size) = parse_page_params(query.page.as_deref(), query.pagesize.as_deref())?;
    let survey_id = parse_survey_filter(query.surveyid.as_deref())?;

    let answers = state.data_manager.get_survey_answers(page, page_size, survey_id).await?;

    if answers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok((StatusCode::OK, Json(answers)).into_response())
}

async fn get_survey_answer_by_id(
    State(state): State<Arc<ServerState>>,
    Path(survey_answer_id): Path<String>,
) -> Result<Response, AppError> {
    tracing::info!("Get survey answer by ID endpoint accessed");
    let answer = state.data_manager.get_survey_answer_by_id(&survey_answer_id).await?;

    Ok((StatusCode::OK, Json(answer)).into_response())
}

async fn get_all_reports(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    tracing::info!("Get all reports endpoint accessed");
    let (page, page_size) = parse_page_params(query.page.as_deref(), query.pagesize.as_deref())?;

    let reports = state.data_manager.get_reports(page, page_size).await?;

    if reports.is_empty() {
        tracing::info!("No reports found");
        return Ok((StatusCode::NOT_FOUND, Json(json!({ "error": "no reports found" }))).into_response());
    }

    Ok((StatusCode::OK, Json(reports)).into_response())
}

async fn get_report_by_id(
    State(state): State<Arc<ServerState>>,
    Path(report_id): Path<String>,
) -> Result<Response, AppError> {
    tracing::info!("Get report by ID endpoint accessed");
    let report = state.data_manager.get_report_by_id(&report_id).await?;

    Ok((StatusCode::OK, Json(report)).into_response())
}

async fn get_stats(State(state): State<Arc<ServerState>>) -> Result<Response, AppError> {
    tracing::info!("Get stats endpoint accessed");
    let stats = state.data_manager.get_stats().await?;

    Ok((StatusCode::OK, Json(stats)).into_response())
}

/// Identifiers are assigned here, never taken from the client; whatever a
/// payload carried is replaced.
fn generate_submission_id() -> String {
    Uuid::new_v4().to_string()
}

fn invalid_json(rejection: JsonRejection) -> AppError {
    tracing::info!("Invalid JSON provided: {rejection}");
    AppError::Validation("invalid json".to_string())
}

fn invalid_query_parameters() -> AppError {
    tracing::info!("Invalid query parameters");
    AppError::Validation("invalid query parameters".to_string())
}

/// Both parameters are required positive integers; pages are 1-based.
fn parse_page_params(page: Option<&str>, pagesize: Option<&str>) -> Result<(u32, u32), AppError> {
    Ok((parse_positive(page)?, parse_positive(pagesize)?))
}

fn parse_positive(value: Option<&str>) -> Result<u32, AppError> {
    value
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|parsed| *parsed > 0)
        .ok_or_else(invalid_query_parameters)
}

/// An absent or empty `surveyid` means no filter; anything else must be an
/// integer.
fn parse_survey_filter(surveyid: Option<&str>) -> Result<Option<i32>, AppError> {
    match surveyid {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => raw.parse::<i32>().map(Some).map_err(|_| invalid_query_parameters()),
    }
}
