use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Settlement, Trade};
use super::repository::{DeskRepository, EscalationPublisher, RepositoryError};
use super::service::{DeskService, DeskServiceError};

/// Router builder exposing the desk ingest and inbox endpoints.
pub fn desk_router<R, E>(service: Arc<DeskService<R, E>>) -> Router
where
    R: DeskRepository + 'static,
    E: EscalationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/desk/trades", post(ingest_trades_handler::<R, E>))
        .route("/api/v1/desk/trades/inbox", get(trade_inbox_handler::<R, E>))
        .route(
            "/api/v1/desk/settlements",
            post(ingest_settlements_handler::<R, E>),
        )
        .route(
            "/api/v1/desk/settlements/inbox",
            get(settlement_inbox_handler::<R, E>),
        )
        .route(
            "/api/v1/desk/blotter/import",
            post(import_blotter_handler::<R, E>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct InboxQuery {
    today: Option<String>,
}

impl InboxQuery {
    /// Resolve the ranking day, defaulting to the local calendar date.
    fn resolve_today(&self) -> Result<NaiveDate, String> {
        match self.today.as_deref() {
            None => Ok(Local::now().date_naive()),
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| format!("invalid today '{raw}', expected YYYY-MM-DD")),
        }
    }
}

pub(crate) async fn ingest_trades_handler<R, E>(
    State(service): State<Arc<DeskService<R, E>>>,
    axum::Json(trades): axum::Json<Vec<Trade>>,
) -> Response
where
    R: DeskRepository + 'static,
    E: EscalationPublisher + 'static,
{
    match service.ingest_trades(trades) {
        Ok(accepted) => {
            let payload = json!({ "accepted": accepted });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(error) => ingest_error_response(error),
    }
}

pub(crate) async fn ingest_settlements_handler<R, E>(
    State(service): State<Arc<DeskService<R, E>>>,
    axum::Json(settlements): axum::Json<Vec<Settlement>>,
) -> Response
where
    R: DeskRepository + 'static,
    E: EscalationPublisher + 'static,
{
    match service.ingest_settlements(settlements) {
        Ok(accepted) => {
            let payload = json!({ "accepted": accepted });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(error) => ingest_error_response(error),
    }
}

pub(crate) async fn trade_inbox_handler<R, E>(
    State(service): State<Arc<DeskService<R, E>>>,
    Query(query): Query<InboxQuery>,
) -> Response
where
    R: DeskRepository + 'static,
    E: EscalationPublisher + 'static,
{
    let today = match query.resolve_today() {
        Ok(today) => today,
        Err(message) => return unprocessable(message),
    };

    match service.trade_inbox(today) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn settlement_inbox_handler<R, E>(
    State(service): State<Arc<DeskService<R, E>>>,
    Query(query): Query<InboxQuery>,
) -> Response
where
    R: DeskRepository + 'static,
    E: EscalationPublisher + 'static,
{
    let today = match query.resolve_today() {
        Ok(today) => today,
        Err(message) => return unprocessable(message),
    };

    match service.settlement_inbox(today) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn import_blotter_handler<R, E>(
    State(service): State<Arc<DeskService<R, E>>>,
    body: String,
) -> Response
where
    R: DeskRepository + 'static,
    E: EscalationPublisher + 'static,
{
    match service.import_blotter(Cursor::new(body.into_bytes())) {
        Ok(imported) => {
            let payload = json!({ "imported": imported });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(DeskServiceError::Import(error)) => unprocessable(error.to_string()),
        Err(error) => ingest_error_response(error),
    }
}

fn ingest_error_response(error: DeskServiceError) -> Response {
    match error {
        DeskServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "record already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        other => internal_error(other),
    }
}

fn unprocessable(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

fn internal_error(error: DeskServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
