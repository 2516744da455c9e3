use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use swatchsheet::{
    CmykColor, Deviation, ReferenceColor, ReferenceTable, RenderRequest, SwatchError,
    DEFAULT_FILE_NAME,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::config::ServerConfig;

/// Matches returned by `/api/references` when no limit is given.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Request payload for the sheet endpoint
#[derive(Debug, Deserialize)]
pub struct GeneratePdfRequest {
    /// Base color; channels are clamped to 0-100
    pub cmyk: CmykColor,
    /// Step per channel, 1-10
    pub deviation: DeviationInput,
    /// Printed under the title; blank means none
    #[serde(default)]
    pub comment: Option<String>,
    /// Reference name used as the title; blank means none
    #[serde(default)]
    pub pantone: Option<String>,
}

/// Deviation as sent by form clients: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeviationInput {
    Number(f64),
    Text(String),
}

impl DeviationInput {
    /// Validates against the conventional 1-10 range.
    pub fn to_deviation(&self) -> Result<Deviation, AppError> {
        let value = match self {
            DeviationInput::Number(n) if n.fract() == 0.0 => Some(*n),
            DeviationInput::Number(_) => None,
            DeviationInput::Text(s) => s.trim().parse::<u32>().ok().map(f64::from),
        };

        let range = Deviation::MIN..=Deviation::MAX;
        match value {
            Some(v) if v >= f64::from(*range.start()) && v <= f64::from(*range.end()) => {
                Ok(Deviation::new(v as u32)?)
            }
            _ => Err(AppError::BadRequest(format!(
                "deviation must be an integer between {} and {}",
                Deviation::MIN,
                Deviation::MAX
            ))),
        }
    }
}

impl GeneratePdfRequest {
    pub fn to_render_request(&self) -> Result<RenderRequest, AppError> {
        let mut request = RenderRequest::new(self.cmyk, self.deviation.to_deviation()?);
        if let Some(comment) = non_blank(&self.comment) {
            request = request.with_comment(comment);
        }
        if let Some(name) = non_blank(&self.pantone) {
            request = request.with_reference_name(name);
        }
        Ok(request)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Query string of the reference search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Application-specific error types for the API
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or out-of-range input
    #[error("{0}")]
    BadRequest(String),
    /// Unknown reference color
    #[error("{0}")]
    NotFound(String),
    /// Errors from the swatchsheet library
    #[error(transparent)]
    Swatch(#[from] SwatchError),
    /// Render task failed to complete
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Swatch(SwatchError::InvalidDeviation(_) | SwatchError::InvalidColor(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Swatch(SwatchError::UnknownReference(_)) => StatusCode::NOT_FOUND,
            AppError::Swatch(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let error_response = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Shared, read-only state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    table: Option<Arc<ReferenceTable>>,
}

impl AppState {
    pub fn new(table: Option<ReferenceTable>) -> Self {
        Self {
            table: table.map(Arc::new),
        }
    }

    /// Loads the configured reference table, if any.
    pub fn from_config(config: &ServerConfig) -> swatchsheet::Result<Self> {
        let table = config
            .table
            .as_ref()
            .map(ReferenceTable::from_path)
            .transpose()?;
        Ok(Self::new(table))
    }

    pub fn table(&self) -> Option<&ReferenceTable> {
        self.table.as_deref()
    }
}

/// Build the application router with all routes configured
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/generate-pdf", post(generate_pdf))
        .route("/api/references", get(search_references))
        .route("/api/references/{name}", get(get_reference))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Render a swatch sheet and return it as a download
pub async fn generate_pdf(
    payload: Result<Json<GeneratePdfRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    let request = payload.to_render_request()?;
    debug!(
        deviation = request.deviation.value(),
        named = request.reference_name.is_some(),
        "rendering swatch sheet"
    );

    let pdf_bytes = tokio::task::spawn_blocking(move || request.render())
        .await
        .map_err(|e| AppError::Internal(format!("render task failed: {e}")))??;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DEFAULT_FILE_NAME}\""),
            ),
        ],
        pdf_bytes,
    )
        .into_response())
}

/// Autocomplete over the reference table
pub async fn search_references(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<ReferenceColor>>, AppError> {
    let Query(params) = params?;
    let matches = match state.table() {
        Some(table) => table
            .search(
                params.q.as_deref().unwrap_or_default(),
                params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            )
            .into_iter()
            .cloned()
            .collect(),
        None => Vec::new(),
    };
    Ok(Json(matches))
}

/// One reference color by name
pub async fn get_reference(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ReferenceColor>, AppError> {
    let table = state
        .table()
        .ok_or_else(|| AppError::NotFound("no reference table configured".to_string()))?;
    Ok(Json(table.lookup(&name)?.clone()))
}

/// Health check endpoint for monitoring and load balancing
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "swatchsheet API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
