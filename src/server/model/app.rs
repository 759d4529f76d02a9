use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::access::cache::AccessCache;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cache: Arc<dyn AccessCache>,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        use crate::server::service::access::cache::MemoryAccessCache;

        Self {
            db,
            cache: Arc::new(MemoryAccessCache::new()),
        }
    }
}
