use thiserror::Error;

/// Everything that can go wrong at a boundary of this crate.
///
/// The engine itself (see [`crate::engine`]) never constructs this type: it either
/// returns a count or trips a `debug_assert!` on a broken invariant, which is a bug,
/// not a user-reportable condition. Only the parsing boundary, the configuration
/// loader, and the persistence collaborator produce `Error` values.
#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed input: {0}")]
  MalformedInput(String),

  #[error("failed to persist record: {0}")]
  PersistenceFailure(String),

  #[error("invalid configuration: {0}")]
  Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
