use async_trait::async_trait;
use deadpool_postgres::{Config as PoolConfig, Pool, Runtime};
use std::sync::Mutex;
use tokio_postgres::NoTls;

use crate::error::{Error, Result};
use crate::record::ExecutionRecord;

const CREATE_RECORD_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    id SERIAL PRIMARY KEY,
    "Timestamp" TIMESTAMPTZ NOT NULL,
    "Commands" INTEGER NOT NULL,
    "Result" INTEGER NOT NULL,
    "Duration" DOUBLE PRECISION NOT NULL
);
"#;

const INSERT_RECORD: &str = r#"
INSERT INTO records ("Timestamp", "Commands", "Result", "Duration")
VALUES ($1, $2, $3, $4) RETURNING id;
"#;

/// Appends a computed [`ExecutionRecord`] to durable storage and returns it
/// with its assigned id filled in.
#[async_trait]
pub trait Store: Send + Sync {
  async fn save(&self, record: ExecutionRecord) -> Result<ExecutionRecord>;
}

/// The production collaborator: a pooled connection to Postgres.
///
/// Follows a create-table-if-absent, insert, read-back sequence, with the
/// table created lazily the first time a record is saved rather than eagerly
/// at startup.
pub struct PostgresStore {
  pool: Pool,
}

impl PostgresStore {
  pub fn connect(database_url: &str) -> Result<PostgresStore> {
    let mut cfg = PoolConfig::new();
    cfg.url = Some(database_url.to_owned());
    let pool = cfg
      .create_pool(Some(Runtime::Tokio1), NoTls)
      .map_err(|e| Error::PersistenceFailure(e.to_string()))?;
    Ok(PostgresStore { pool })
  }
}

#[async_trait]
impl Store for PostgresStore {
  async fn save(&self, mut record: ExecutionRecord) -> Result<ExecutionRecord> {
    let client = self
      .pool
      .get()
      .await
      .map_err(|e| Error::PersistenceFailure(e.to_string()))?;

    client
      .batch_execute(CREATE_RECORD_TABLE)
      .await
      .map_err(|e| Error::PersistenceFailure(e.to_string()))?;

    // `Result` is stored in a 32-bit signed column; an out-of-range count
    // fails the request rather than silently saturating, since a saturated
    // value would misreport what was actually computed.
    let result: i32 = record
      .result
      .try_into()
      .map_err(|_| Error::PersistenceFailure(format!("result {} overflows a 32-bit column", record.result)))?;

    let row = client
      .query_one(
        INSERT_RECORD,
        &[&record.timestamp, &record.commands, &result, &record.duration_secs],
      )
      .await
      .map_err(|e| Error::PersistenceFailure(e.to_string()))?;

    record.id = Some(row.get::<_, i32>(0) as i64);
    Ok(record)
  }
}

/// An in-process fake used by tests and local CLI runs that have no database
/// to talk to. Assigns monotonically increasing ids starting at 1.
#[derive(Default)]
pub struct InMemoryStore {
  rows: Mutex<Vec<ExecutionRecord>>,
}

impl InMemoryStore {
  pub fn new() -> InMemoryStore {
    InMemoryStore::default()
  }
}

#[async_trait]
impl Store for InMemoryStore {
  async fn save(&self, mut record: ExecutionRecord) -> Result<ExecutionRecord> {
    let mut rows = self.rows.lock().unwrap();
    record.id = Some(rows.len() as i64 + 1);
    rows.push(record.clone());
    Ok(record)
  }
}
