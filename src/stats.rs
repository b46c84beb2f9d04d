//! Pass statistics for resolved request sets.
//!
//! Gated behind the `stats` feature (enabled by default). After a set has
//! resolved, [`RequestSet::stats`] reports how much work the single pass did;
//! [`PassStats::to_json`] exports the numbers for logging pipelines that
//! ingest JSON.
//!
//! # Example
//!
//! ```
//! use multifold::sum_of;
//!
//! let xs = vec![1u32, 2, 3];
//! let set = sum_of(&xs).and_count();
//! assert!(set.stats().is_none()); // nothing ran yet
//!
//! let (total, n) = set.resolve()?;
//! let stats = set.stats().expect("resolved");
//! assert_eq!((total, n), (6, 3));
//! assert_eq!(stats.elements, 3);
//! assert_eq!(stats.aggregates, ["sum", "count"]);
//! assert!(!stats.failed);
//! # Ok::<_, multifold::AggregateError>(())
//! ```

use crate::request::{PassOutcome, RequestSet};
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

/// Execution statistics for one completed pass.
#[derive(Clone, Debug, Serialize)]
pub struct PassStats {
    /// Elements drawn from the source before the pass finished or aborted.
    pub elements: u64,
    /// Kind labels of the registered aggregates, in registration order.
    pub aggregates: Vec<&'static str>,
    /// Whether the pass was aborted by a failure.
    pub failed: bool,
}

impl PassStats {
    /// Render the statistics as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the statistics to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("writing pass statistics to {}", path.as_ref().display()))
    }
}

impl<'a, S, T, Outs> RequestSet<'a, S, T, Outs> {
    /// Statistics for the completed pass, or `None` while unresolved.
    ///
    /// Reading statistics never triggers enumeration.
    pub fn stats(&self) -> Option<PassStats> {
        let cache = self.cache.borrow();
        cache.as_ref().map(|outcome| {
            let aggregates = self.reducers.iter().map(|r| r.kind()).collect();
            match outcome {
                PassOutcome::Finished { elements, .. } => PassStats {
                    elements: *elements,
                    aggregates,
                    failed: false,
                },
                PassOutcome::Poisoned { elements, .. } => PassStats {
                    elements: *elements,
                    aggregates,
                    failed: true,
                },
            }
        })
    }
}
