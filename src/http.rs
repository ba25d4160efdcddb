use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;

use crate::command::PathRequest;
use crate::error::Error;
use crate::error::Result;
use crate::persistence::Store;
use crate::position::Position;
use crate::record::ExecutionRecord;

#[derive(Clone)]
struct AppState {
  store: Arc<dyn Store>,
}

/// Builds the router exposing `POST /tibber-developer-test/enter-path`.
pub fn router(store: Arc<dyn Store>) -> Router {
  Router::new()
    .route("/tibber-developer-test/enter-path", post(enter_path))
    .with_state(AppState { store })
}

async fn enter_path(State(state): State<AppState>, body: Bytes) -> Response {
  match process(&state, &body).await {
    Ok(record) => {
      log::info!(
        "recorded path: id={:?} commands={} result={}",
        record.id,
        record.commands,
        record.result
      );
      (StatusCode::CREATED, Json(success_body(&record))).into_response()
    }
    Err(error) => {
      log::warn!("request failed: {error}");
      let message = match &error {
        // Malformed input is never echoed back to the client, only logged.
        Error::MalformedInput(_) | Error::Configuration(_) => "Internal Server Error".to_owned(),
        Error::PersistenceFailure(detail) => {
          format!("There was a problem inserting the record into the database: {detail}")
        }
      };
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": message })),
      )
        .into_response()
    }
  }
}

async fn process(state: &AppState, body: &[u8]) -> Result<ExecutionRecord> {
  let request: PathRequest =
    serde_json::from_slice(body).map_err(|e| Error::MalformedInput(e.to_string()))?;
  let start = Position::new(request.start.x, request.start.y);

  let started = Instant::now();
  let result = crate::driver::compute(start, &request.commands);
  let duration_secs = started.elapsed().as_secs_f64();

  let record = ExecutionRecord::new(Utc::now(), request.commands.len(), result, duration_secs);
  state.store.save(record).await
}

fn success_body(record: &ExecutionRecord) -> serde_json::Value {
  serde_json::json!({
    "id": record.id,
    "Timestamp": record.timestamp.to_rfc3339(),
    "Commands": record.commands,
    "Result": record.result,
    "Duration": record.duration_secs,
    "message": "Record inserted successfully.",
  })
}
