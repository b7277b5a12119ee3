//! # Status Check Storage
//!
//! The `/status` endpoints persist client check-ins to Redis when a
//! `REDIS_URL` is configured. Checks are JSON blobs on a single list, pushed
//! newest-first. Without Redis the server keeps them in memory so the demo
//! still works on a bare machine; those records do not survive a restart.

use std::time::Duration;

use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::AppError;
use crate::models::StatusCheck;

const STATUS_KEY: &str = "gaima:status_checks";
const STATUS_FETCH_LIMIT: isize = 1000;
const CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

/// Connect with a short timeout so a missing Redis degrades the status
/// endpoints instead of hanging startup.
pub async fn init_redis(redis_url: &str) -> Option<ConnectionManager> {
    let client = match Client::open(redis_url) {
        Ok(client) => client,
        Err(e) => {
            warn!("Invalid REDIS_URL, status checks stay in memory: {e}");
            return None;
        }
    };

    let connect = tokio::time::timeout(CONNECT_TIMEOUT, client.get_connection_manager());
    match connect.await {
        Ok(Ok(manager)) => Some(manager),
        Ok(Err(e)) => {
            warn!("Redis unreachable, status checks stay in memory: {e}");
            None
        }
        Err(_) => {
            warn!(
                "Redis connection timed out after {CONNECT_TIMEOUT:?}, status checks stay in memory"
            );
            None
        }
    }
}

pub struct StatusStore {
    redis: Option<ConnectionManager>,
    fallback: RwLock<Vec<StatusCheck>>,
}

impl StatusStore {
    pub fn new(redis: Option<ConnectionManager>) -> Self {
        Self {
            redis,
            fallback: RwLock::new(Vec::new()),
        }
    }

    pub async fn insert(&self, check: &StatusCheck) -> Result<(), AppError> {
        match &self.redis {
            Some(manager) => {
                let payload =
                    serde_json::to_string(check).map_err(|e| AppError::Internal(e.into()))?;

                let mut connection = manager.clone();
                let _: () = connection
                    .lpush(STATUS_KEY, payload)
                    .await
                    .map_err(|e| AppError::Internal(e.into()))?;
            }
            None => {
                self.fallback.write().await.push(check.clone());
            }
        }

        Ok(())
    }

    /// Most recent checks first, capped at 1000.
    pub async fn fetch(&self) -> Result<Vec<StatusCheck>, AppError> {
        match &self.redis {
            Some(manager) => {
                let mut connection = manager.clone();
                let raw: Vec<String> = connection
                    .lrange(STATUS_KEY, 0, STATUS_FETCH_LIMIT - 1)
                    .await
                    .map_err(|e| AppError::Internal(e.into()))?;

                raw.iter()
                    .map(|blob| {
                        serde_json::from_str(blob).map_err(|e| AppError::Internal(e.into()))
                    })
                    .collect()
            }
            None => {
                let checks = self.fallback.read().await;
                Ok(checks
                    .iter()
                    .rev()
                    .take(STATUS_FETCH_LIMIT as usize)
                    .cloned()
                    .collect())
            }
        }
    }
}
