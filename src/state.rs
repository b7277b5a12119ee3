use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::{
    config::Config,
    database::{init_redis, StatusStore},
    store::LayerStore,
};

pub struct AppState {
    pub config: Config,
    pub store: Arc<LayerStore>,
    pub status: StatusStore,
    pub started_at: Instant,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let redis = match &config.redis_url {
            Some(url) => init_redis(url).await,
            None => {
                info!("REDIS_URL not set, keeping status checks in memory");
                None
            }
        };

        let store = Arc::new(LayerStore::new());
        info!("Layer store populated with {} points", store.total_points());

        Arc::new(Self {
            config,
            store,
            status: StatusStore::new(redis),
            started_at: Instant::now(),
        })
    }
}
