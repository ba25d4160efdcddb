use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single row of the `records` table: one computation, persisted.
///
/// `id` is `None` until the persistence collaborator assigns one.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionRecord {
  pub id: Option<i64>,
  pub timestamp: DateTime<Utc>,
  pub commands: i32,
  pub result: u64,
  pub duration_secs: f64,
}

impl ExecutionRecord {
  pub fn new(timestamp: DateTime<Utc>, commands: usize, result: u64, duration_secs: f64) -> ExecutionRecord {
    ExecutionRecord {
      id: None,
      timestamp,
      commands: commands as i32,
      result,
      duration_secs,
    }
  }
}
