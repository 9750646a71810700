//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::export::{signal_table_csv, ExportError};
use crate::indicators::momentum::{macd_series_default, rsi_series};
use crate::indicators::volatility::bollinger_series;
use crate::ingest::{read_prices, IngestError};
use crate::metrics::Metrics;
use crate::models::{IndicatorOverlay, IndicatorRow};
use crate::notify::{compose_alert, send_alert, NotifyError, SmtpSettings};
use crate::signals::{net_position, signal_table, SignalEngine, SignalError};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "crossline-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Errors surfaced by the API handlers, mapped to HTTP statuses.
#[derive(Debug)]
enum ApiError {
    Ingest(IngestError),
    Signal(SignalError),
    Export(ExportError),
    Notify(NotifyError),
}

impl From<IngestError> for ApiError {
    fn from(e: IngestError) -> Self {
        Self::Ingest(e)
    }
}

impl From<SignalError> for ApiError {
    fn from(e: SignalError) -> Self {
        Self::Signal(e)
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

impl From<NotifyError> for ApiError {
    fn from(e: NotifyError) -> Self {
        Self::Notify(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::Ingest(e) => (StatusCode::UNPROCESSABLE_ENTITY, "ingest", e.to_string()),
            ApiError::Signal(e @ SignalError::InvalidWindow { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_window", e.to_string())
            }
            ApiError::Signal(e @ SignalError::InsufficientData { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_data", e.to_string())
            }
            ApiError::Export(e) => (StatusCode::INTERNAL_SERVER_ERROR, "export", e.to_string()),
            ApiError::Notify(e @ NotifyError::NothingToReport) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "nothing_to_report", e.to_string())
            }
            ApiError::Notify(e) => (StatusCode::BAD_GATEWAY, "notify", e.to_string()),
        };

        (status, Json(json!({ "error": kind, "message": message }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeQuery {
    short_window: Option<usize>,
    long_window: Option<usize>,
    #[serde(default)]
    rsi: bool,
    #[serde(default)]
    macd: bool,
    #[serde(default)]
    bollinger: bool,
    rsi_period: Option<usize>,
    bollinger_period: Option<usize>,
    bollinger_std_dev: Option<f64>,
}

// Original slider defaults.
const DEFAULT_SHORT_WINDOW: usize = 20;
const DEFAULT_LONG_WINDOW: usize = 50;

impl AnalyzeQuery {
    fn windows(&self) -> (usize, usize) {
        (
            self.short_window.unwrap_or(DEFAULT_SHORT_WINDOW),
            self.long_window.unwrap_or(DEFAULT_LONG_WINDOW),
        )
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    rows: Vec<IndicatorRow>,
    signals: Vec<IndicatorRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_signal: Option<IndicatorRow>,
    position: Vec<i32>,
    #[serde(skip_serializing_if = "IndicatorOverlay::is_empty")]
    indicators: IndicatorOverlay,
}

fn run_analysis(csv_text: &str, query: &AnalyzeQuery) -> Result<AnalyzeResponse, ApiError> {
    let prices = read_prices(csv_text.as_bytes())?;
    let (short_window, long_window) = query.windows();
    let rows = SignalEngine::analyze(&prices, short_window, long_window)?;

    let mut indicators = IndicatorOverlay::new();
    if query.rsi {
        indicators = indicators.with_rsi(rsi_series(&prices, query.rsi_period.unwrap_or(14)));
    }
    if query.macd {
        indicators = indicators.with_macd(macd_series_default(&prices));
    }
    if query.bollinger {
        indicators = indicators.with_bollinger(bollinger_series(
            &prices,
            query.bollinger_period.unwrap_or(20),
            query.bollinger_std_dev.unwrap_or(2.0),
        ));
    }

    let signals = signal_table(&rows);
    let latest_signal = signals.last().cloned();
    let position = net_position(&rows);

    Ok(AnalyzeResponse {
        rows,
        signals,
        latest_signal,
        position,
        indicators,
    })
}

/// Analyze a CSV price series and return the full overlay as JSON.
async fn analyze(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
    body: String,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let response = run_analysis(&body, &query).inspect_err(|e| {
        error!(error = ?e, "Analysis failed");
    })?;

    state.metrics.analyses_total.inc();
    info!(
        rows = response.rows.len(),
        signals = response.signals.len(),
        "Analysis complete"
    );
    Ok(Json(response))
}

/// Analyze a CSV price series and return the signal table as a CSV download.
async fn export_signals(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
    body: String,
) -> Result<Response, ApiError> {
    let response = run_analysis(&body, &query)?;
    let csv_text = signal_table_csv(&response.signals)?;

    state.metrics.analyses_total.inc();
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"stock_signals.csv\"",
            ),
        ],
        csv_text,
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
struct EmailAlertRequest {
    csv: String,
    short_window: Option<usize>,
    long_window: Option<usize>,
    smtp: SmtpSettings,
    from: String,
    to: String,
}

/// Analyze a CSV price series and email the resulting signal table.
async fn email_alert(
    State(state): State<AppState>,
    Json(request): Json<EmailAlertRequest>,
) -> Result<Json<Value>, ApiError> {
    let query = AnalyzeQuery {
        short_window: request.short_window,
        long_window: request.long_window,
        rsi: false,
        macd: false,
        bollinger: false,
        rsi_period: None,
        bollinger_period: None,
        bollinger_std_dev: None,
    };
    let response = run_analysis(&request.csv, &query)?;

    let alert = compose_alert(&request.from, &request.to, &response.signals)?;
    send_alert(&alert, &request.smtp).await.inspect_err(|e| {
        error!(error = %e, smtp_server = %request.smtp.server, "Alert dispatch failed");
    })?;

    state.metrics.alerts_sent_total.inc();
    info!(to = %request.to, subject = %alert.subject, "Alert sent");
    Ok(Json(json!({
        "sent": true,
        "subject": alert.subject,
        "signals_reported": response.signals.len(),
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/signals", post(analyze))
        .route("/api/signals/export", post(export_signals))
        .route("/api/alerts/email", post(email_alert))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
    };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port = port, "HTTP server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
