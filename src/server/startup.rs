use std::sync::Arc;

use tracing::warn;

use crate::server::{
    config::Config,
    error::Error,
    service::access::cache::{AccessCache, MemoryAccessCache, ValkeyAccessCache},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations.");

    Ok(db)
}

/// Connect to Valkey/Redis for the access cache, falling back to an
/// in-process cache when no VALKEY_URL is configured.
pub async fn connect_to_cache(config: &Config) -> Result<Arc<dyn AccessCache>, Error> {
    use fred::prelude::*;

    let Some(valkey_url) = &config.valkey_url else {
        warn!("VALKEY_URL not set; using in-process access cache");
        return Ok(Arc::new(MemoryAccessCache::new()));
    };

    let redis_config = Config::from_url(valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(Arc::new(ValkeyAccessCache::new(pool)))
}
