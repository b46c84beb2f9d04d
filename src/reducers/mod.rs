//! Built-in reducers for request sets.
//!
//! These are reusable implementations of [`Reducer`](crate::Reducer) covering
//! the canonical aggregates:
//!
//! - [`Sum<N>`] -- sum with a zero identity; defined on empty input.
//! - [`Average<N>`] -- average as `f64`; fails on empty input.
//! - [`Count`] -- number of elements, any element type.
//! - [`Min<N>`] / [`Max<N>`] -- extremes (require `Ord`); fail on empty input.
//! - [`Any<F>`] / [`All<F>`] -- predicate aggregates; defined on empty input.
//!
//! The numeric reducers come in two shapes per type `N`: over plain `N`
//! elements, and over `Option<N>` elements where `None` is excluded from the
//! running state (and, for [`Average<N>`], from the count as well). Which
//! shape applies is resolved from the element type, so the same entry point
//! serves both.
//!
//! # Examples
//! ```
//! use multifold::{average_of, sum_of};
//!
//! let plain = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let (total, mean) = sum_of(&plain).and_average().resolve()?;
//! assert_eq!(total, 10.0);
//! assert_eq!(mean, 2.5);
//!
//! // None is excluded from both the sum and the average's count.
//! let sparse = vec![Some(2.0_f64), None, Some(4.0)];
//! let (total, mean) = sum_of(&sparse).and_average().resolve()?;
//! assert_eq!(total, 6.0);
//! assert_eq!(mean, 3.0);
//! # Ok::<_, multifold::AggregateError>(())
//! ```

mod basic;
mod predicate;
mod statistical;

pub use basic::{Count, Max, Min, Sum};
pub use predicate::{All, Any};
pub use statistical::Average;
