//! # Layer Store
//!
//! In-memory snapshot store for all 15 map layers.
//!
//! Each entry pairs an immutable point list with the time it was generated.
//! Refreshing a layer inserts a whole new entry, so a reader either sees the
//! old pair or the new pair, never a fresh list with a stale timestamp. The
//! point lists sit behind an `Arc` and handlers clone the handle rather than
//! the data.
//!
//! Only the incidents layer ever changes after startup: a background task
//! regenerates it every 30 seconds to simulate a live feed. The other 14
//! layers keep their startup snapshot for the life of the process.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use crate::layers::{self, LayerKind, ALL_LAYERS};
use crate::models::MapDataPoint;

pub const INCIDENT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const INCIDENT_REFRESH_COUNT: usize = 25;

const INITIAL_INCIDENT_COUNT: usize = 15;
const INITIAL_LAYER_COUNT: usize = 10;

#[derive(Clone)]
pub struct LayerSnapshot {
    pub points: Arc<Vec<MapDataPoint>>,
    pub last_updated: DateTime<Utc>,
}

impl LayerSnapshot {
    fn empty() -> Self {
        Self {
            points: Arc::new(Vec::new()),
            last_updated: Utc::now(),
        }
    }
}

pub struct LayerStore {
    layers: DashMap<LayerKind, LayerSnapshot>,
}

impl LayerStore {
    /// Populate every layer once. Incidents gets a larger batch since it is
    /// the volatile layer.
    pub fn new() -> Self {
        let store = Self {
            layers: DashMap::new(),
        };

        for kind in ALL_LAYERS {
            let count = if kind == LayerKind::Incidents {
                INITIAL_INCIDENT_COUNT
            } else {
                INITIAL_LAYER_COUNT
            };
            store.refresh(kind, count);
        }

        store
    }

    /// Current snapshot for a layer. Clones the `Arc` handle, not the points.
    pub fn get(&self, kind: LayerKind) -> LayerSnapshot {
        self.layers
            .get(&kind)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(LayerSnapshot::empty)
    }

    /// Snapshot for a layer by its URL name. Unknown names degrade to an
    /// empty snapshot stamped now instead of an error.
    pub fn get_by_name(&self, name: &str) -> LayerSnapshot {
        match LayerKind::from_name(name) {
            Some(kind) => self.get(kind),
            None => LayerSnapshot::empty(),
        }
    }

    /// Atomically replace a layer with `count` freshly generated points.
    pub fn refresh(&self, kind: LayerKind, count: usize) {
        self.replace(kind, layers::generate_points(kind, count));
    }

    /// Atomically swap in an explicit point list, stamped now.
    pub fn replace(&self, kind: LayerKind, points: Vec<MapDataPoint>) {
        let snapshot = LayerSnapshot {
            points: Arc::new(points),
            last_updated: Utc::now(),
        };
        self.layers.insert(kind, snapshot);
    }

    /// Sum of point counts across every layer.
    pub fn total_points(&self) -> usize {
        ALL_LAYERS
            .iter()
            .map(|&kind| self.get(kind).points.len())
            .sum()
    }
}

impl Default for LayerStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Regenerate the incidents layer every 30 seconds for the life of the
/// process. Sole writer to the store after startup.
pub fn spawn_incident_refresh(store: Arc<LayerStore>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(INCIDENT_REFRESH_INTERVAL);
        // The store is already populated; skip the immediate first tick.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            store.refresh(LayerKind::Incidents, INCIDENT_REFRESH_COUNT);
            debug!("Refreshed incidents layer with {INCIDENT_REFRESH_COUNT} points");
        }
    });
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_startup_populates_every_layer() {
        let store = LayerStore::new();

        for kind in ALL_LAYERS {
            let snapshot = store.get(kind);
            let expected = if kind == LayerKind::Incidents { 15 } else { 10 };
            assert_eq!(snapshot.points.len(), expected, "layer {}", kind.name());
        }

        assert_eq!(store.total_points(), 15 + 14 * 10);
    }

    #[test]
    fn test_unknown_layer_degrades_to_empty() {
        let store = LayerStore::new();
        let before = Utc::now();
        let snapshot = store.get_by_name("ferries");

        assert!(snapshot.points.is_empty());
        assert!(snapshot.last_updated >= before);
    }

    #[test]
    fn test_refresh_replaces_only_target_layer() {
        let store = LayerStore::new();

        let old_incidents = store.get(LayerKind::Incidents);
        let old_traffic = store.get(LayerKind::Traffic);
        let old_ids: HashSet<String> =
            old_incidents.points.iter().map(|p| p.id.clone()).collect();

        std::thread::sleep(Duration::from_millis(5));
        store.refresh(LayerKind::Incidents, INCIDENT_REFRESH_COUNT);

        let new_incidents = store.get(LayerKind::Incidents);
        let new_ids: HashSet<String> =
            new_incidents.points.iter().map(|p| p.id.clone()).collect();

        assert_eq!(new_incidents.points.len(), INCIDENT_REFRESH_COUNT);
        assert!(new_ids.is_disjoint(&old_ids), "ids must be regenerated");
        assert!(new_incidents.last_updated > old_incidents.last_updated);

        // Untouched layers keep the same snapshot.
        let traffic = store.get(LayerKind::Traffic);
        assert!(Arc::ptr_eq(&traffic.points, &old_traffic.points));
        assert_eq!(traffic.last_updated, old_traffic.last_updated);
    }

    #[test]
    fn test_snapshot_reads_are_stable_across_refresh() {
        let store = LayerStore::new();
        let held = store.get(LayerKind::Incidents);
        let held_len = held.points.len();

        store.refresh(LayerKind::Incidents, INCIDENT_REFRESH_COUNT);

        // A snapshot taken before the swap is unchanged by it.
        assert_eq!(held.points.len(), held_len);
    }
}
