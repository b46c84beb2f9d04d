//! # Multifold
//!
//! **Many aggregates, one pass.** Multifold evaluates several independent
//! reductions (sum, average, count, min, max, predicates, or your own) over
//! one sequence while guaranteeing the sequence is iterated exactly once --
//! no matter how many aggregates were requested. It exists for callers whose
//! source is expensive or awkward to enumerate repeatedly and who would
//! otherwise walk it N times for N aggregates.
//!
//! ## Quick Start
//!
//! ```
//! use multifold::sum_of;
//!
//! let readings = vec![1.0_f64, 2.0, 3.0, 4.0];
//!
//! // One pass computes all three.
//! let set = sum_of(&readings)
//!     .and_average()
//!     .and_any(|r: &f64| *r > 3.5);
//!
//! let (total, mean, has_spike) = set.resolve()?;
//! assert_eq!(total, 10.0);
//! assert_eq!(mean, 2.5);
//! assert!(has_spike);
//! # Ok::<_, multifold::AggregateError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Request sets
//!
//! A [`RequestSet`] pairs one borrowed source with an ordered list of
//! aggregates. Entry points ([`sum_of`], [`average_of`], [`count_of`],
//! [`min_of`], [`max_of`], [`any_of`], [`all_of`], or the generic
//! [`aggregate_of`]) build an arity-1 set; `and_*` methods (or the generic
//! [`add`](RequestSet::add)) grow it one aggregate at a time, up to 16.
//! Growth never mutates the receiver: each call returns a new, independent
//! set, so one set can branch into several.
//!
//! Results come back as a tuple in registration order:
//!
//! ```
//! use multifold::count_of;
//!
//! let words = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];
//! let (n, letters) = count_of(&words)
//!     .and_sum_by(|w: &String| w.len())
//!     .resolve()?;
//! assert_eq!(n, 3);
//! assert_eq!(letters, 6);
//! # Ok::<_, multifold::AggregateError>(())
//! ```
//!
//! ### The single-pass guarantee
//!
//! Evaluation is lazy with a cache: the first result access enumerates the
//! source once, feeding every element to every aggregate in registration
//! order; every later access reads the cache. Over the lifetime of a set the
//! source is enumerated **at most once** -- verify it yourself with
//! [`testing::CountingSource`].
//!
//! ### Reducers
//!
//! Each aggregate is a [`Reducer`]: per-element state updates via `accept`,
//! a final (possibly failing) value via `finish`. The built-in catalog lives
//! in [`reducers`]; custom aggregates implement the trait and plug into the
//! same machinery. [`Mapped`] and [`TryMapped`] wrap a per-element transform
//! around any reducer -- that is all the `*_by` entry points are.
//!
//! ### Nullable sequences
//!
//! The numeric reducers also accept `Option`-valued elements, excluding
//! `None` from the running state; an average additionally excludes `None`
//! from its count, so a sequence of only `None` has no average at all.
//!
//! ## Error Handling
//!
//! Reading a sum never fails: zero is its identity. Reading an average, min,
//! or max after zero eligible elements fails that position with
//! [`AggregateError::EmptySequence`] -- and only that position:
//!
//! ```
//! use multifold::sum_of;
//!
//! let empty: Vec<f64> = Vec::new();
//! let set = sum_of(&empty).and_average();
//!
//! let (total, mean) = set.resolve_each();
//! assert_eq!(total?, 0.0);
//! assert!(mean.unwrap_err().is_empty_sequence());
//! # Ok::<_, multifold::AggregateError>(())
//! ```
//!
//! A failing fallible selector ([`TryMapped`]) aborts the shared pass and
//! permanently poisons the set with
//! [`AggregateError::SelectorFailure`]; the source is never re-enumerated.
//!
//! ## Feature Flags
//!
//! - `stats` (default) -- pass statistics ([`PassStats`]) with JSON export.
//!
//! ## Module Overview
//!
//! - [`request`] - request sets, entry points, the single-pass engine
//! - [`reducer`] - the `Reducer` contract and selector adapters
//! - [`reducers`] - built-in aggregates (Sum, Average, Count, Min, Max, ...)
//! - [`error`] - the error taxonomy
//! - [`stats`] - pass statistics (feature `stats`)
//! - [`testing`] - enumeration-counting sources and assertions

pub mod error;
pub mod numeric;
pub mod reducer;
pub mod reducers;
pub mod request;
#[cfg(feature = "stats")]
pub mod stats;
pub mod testing;

mod arity;

// General re-exports
pub use error::AggregateError;
pub use numeric::Numeric;
pub use reducer::{Mapped, Reducer, TryMapped};
pub use reducers::{All, Any, Average, Count, Max, Min, Sum};
pub use request::{
    aggregate_of, all_of, any_of, average_by, average_of, count_of, max_of, min_of, sum_by,
    sum_of, RequestSet,
};

// Gated re-exports
#[cfg(feature = "stats")]
pub use stats::PassStats;
