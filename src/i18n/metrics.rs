//! Lookup metrics: how often a translation was found versus how often the
//! key fell through unchanged.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by one locale manager.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups answered from the active dictionary
    hits: AtomicUsize,

    /// Lookups that returned the key itself
    fallbacks: AtomicUsize,

    /// Full re-renders of the marked elements
    renders: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_render(&self) {
        self.renders.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let total = hits + fallbacks;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            fallbacks,
            hit_rate,
            renders: self.renders(),
        }
    }
}

/// Snapshot of lookup metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub fallbacks: usize,
    /// Percentage of lookups that found a translation
    pub hit_rate: f64,
    pub renders: usize,
}

impl MetricsReport {
    /// One-line summary for log output.
    pub fn format(&self) -> String {
        format!(
            "Locale lookups: {} hits, {} fallbacks ({:.1}% hit rate), {} renders",
            self.hits, self.fallbacks, self.hit_rate, self.renders
        )
    }
}
