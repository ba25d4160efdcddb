use std::net::SocketAddr;

use crate::error::{Error, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  pub bind_addr: SocketAddr,
}

impl Config {
  /// Reads `DATABASE_URL` (required) and `BIND_ADDR` (optional) from the
  /// environment. `DATABASE_URL` is allowed to carry stray surrounding quotes —
  /// a common artifact of `.env` files and shell exports — which are stripped
  /// before use.
  pub fn from_env() -> Result<Config> {
    let database_url = std::env::var("DATABASE_URL")
      .map_err(|_| Error::Configuration("DATABASE_URL is not set".into()))?;
    let database_url = strip_quotes(&database_url).to_owned();

    let bind_addr = match std::env::var("BIND_ADDR") {
      Ok(value) => strip_quotes(&value).to_owned(),
      Err(_) => DEFAULT_BIND_ADDR.to_owned(),
    };
    let bind_addr = bind_addr
      .parse()
      .map_err(|e| Error::Configuration(format!("invalid BIND_ADDR {bind_addr:?}: {e}")))?;

    Ok(Config {
      database_url,
      bind_addr,
    })
  }
}

fn strip_quotes(raw: &str) -> &str {
  let trimmed = raw.trim();
  for quote in ['\'', '"'] {
    if let Some(inner) = trimmed
      .strip_prefix(quote)
      .and_then(|s| s.strip_suffix(quote))
    {
      return inner;
    }
  }
  trimmed
}
