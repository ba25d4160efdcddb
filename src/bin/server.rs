use std::sync::Arc;

use gridwalk::config::Config;
use gridwalk::http::router;
use gridwalk::persistence::PostgresStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  env_logger::init();

  let config = Config::from_env()?;
  let store = Arc::new(PostgresStore::connect(&config.database_url)?);
  let app = router(store);

  log::info!("listening on {}", config.bind_addr);
  let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
