//! Request sets: ordered reducers over one shared source, resolved in a
//! single pass.
//!
//! A [`RequestSet`] pairs one borrowed source with an ordered list of
//! reducers. Entry points ([`sum_of`], [`average_of`], ...) build an arity-1
//! set; `and_*`/`add` grow it one aggregate at a time (up to 16); `resolve`
//! runs the pass and hands back the results as a tuple in registration order.
//!
//! # Evaluation policy
//!
//! Evaluation is lazy with a cache. The first result access enumerates the
//! source exactly once, feeding every element to every reducer in
//! registration order, then computes and caches one result per position.
//! Later accesses read the cache; the source is enumerated **at most once**
//! over the lifetime of a set, no matter how many results are read or how
//! often.
//!
//! A failure during the pass (a selector failure) permanently poisons the
//! set: the error is cached and returned from every subsequent read, and the
//! source is never enumerated again. A failure computing one position's
//! result (an average over an empty sequence) is cached for that position
//! only; sibling positions stay readable. Callers wanting a retry build a new
//! set from the same entry points.
//!
//! # Sources
//!
//! Any `S` where `&S: IntoIterator<Item = &T>` serves as a source: slices,
//! `Vec<T>`, `BTreeSet<T>`, or custom collections such as
//! [`CountingSource`](crate::testing::CountingSource). The bound is the
//! type-level analog of the reference implementation's eager null-source
//! check: an unusable source is rejected at the call site, before any
//! enumeration.

use crate::error::AggregateError;
use crate::numeric::Numeric;
use crate::reducer::{ErasedReducer, Mapped, Reducer, ResultSlot};
use crate::reducers::{All, Any, Average, Count, Max, Min, Sum};
use std::cell::{Ref, RefCell};
use std::marker::PhantomData;

/// What one pass over the source produced.
pub(crate) enum PassOutcome {
    /// The pass ran to exhaustion; one result slot per registered aggregate.
    Finished {
        slots: Vec<ResultSlot>,
        elements: u64,
    },
    /// The pass was aborted mid-enumeration; the set is permanently poisoned.
    Poisoned {
        error: AggregateError,
        elements: u64,
    },
}

/// An ordered, fixed-arity collection of aggregates over one shared source.
///
/// `Outs` is the tuple of output types in registration order -- the
/// compile-time descriptor that makes positional extraction type-safe. Sets
/// are immutable: [`add`](RequestSet::add) returns a new, independent set of
/// arity N+1, so one set may father several derived sets (fan-out across
/// threads included; the set is `Send` whenever its parts are).
///
/// Resolving the *same* instance from several threads concurrently is not
/// supported: the result cache uses interior mutability, which makes a set
/// `!Sync`. Branch via `add` first, or serialize access externally.
pub struct RequestSet<'a, S, T, Outs> {
    pub(crate) source: &'a S,
    pub(crate) reducers: Vec<Box<dyn ErasedReducer<T>>>,
    pub(crate) cache: RefCell<Option<PassOutcome>>,
    _outs: PhantomData<Outs>,
}

impl<'a, S, T, Outs> RequestSet<'a, S, T, Outs> {
    /// Number of registered aggregates.
    pub fn arity(&self) -> usize {
        self.reducers.len()
    }

    /// Whether a pass has already run (successfully or not).
    pub fn is_resolved(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// Clone the prototypes, append one, and wrap them in a fresh unresolved
    /// set. `Grown` is supplied by the per-arity callers.
    pub(crate) fn grown<R, Grown>(&self, reducer: R) -> RequestSet<'a, S, T, Grown>
    where
        R: Reducer<T> + Clone + 'static,
    {
        let mut reducers: Vec<Box<dyn ErasedReducer<T>>> =
            self.reducers.iter().map(|r| r.clone_boxed()).collect();
        reducers.push(Box::new(reducer));
        RequestSet {
            source: self.source,
            reducers,
            cache: RefCell::new(None),
            _outs: PhantomData,
        }
    }
}

impl<'a, S, T, Outs> RequestSet<'a, S, T, Outs>
where
    T: 'a,
    &'a S: IntoIterator<Item = &'a T>,
{
    /// The cached pass outcome, running the pass first if needed.
    pub(crate) fn resolved(&self) -> Ref<'_, PassOutcome> {
        let unresolved = self.cache.borrow().is_none();
        if unresolved {
            let outcome = self.run_pass();
            *self.cache.borrow_mut() = Some(outcome);
        }
        Ref::map(self.cache.borrow(), |cached| {
            cached.as_ref().expect("pass outcome present after resolve")
        })
    }

    /// The single pass: every element, in source order, to every reducer, in
    /// registration order. Prototypes stay pristine; fresh clones are fed.
    fn run_pass(&self) -> PassOutcome {
        let mut live: Vec<Box<dyn ErasedReducer<T>>> =
            self.reducers.iter().map(|r| r.clone_boxed()).collect();

        let mut elements = 0u64;
        for value in self.source {
            elements += 1;
            for (position, reducer) in live.iter_mut().enumerate() {
                if let Err(error) = reducer.accept(value) {
                    return PassOutcome::Poisoned {
                        error: error.at_position(position),
                        elements,
                    };
                }
            }
        }

        let slots = live
            .into_iter()
            .enumerate()
            .map(|(position, reducer)| {
                reducer
                    .finish_boxed()
                    .map_err(|error| error.at_position(position))
            })
            .collect();
        PassOutcome::Finished { slots, elements }
    }
}

/// Downcast one cached slot back to its registered output type.
pub(crate) fn extract<Out: Clone + 'static>(slot: &ResultSlot) -> Result<Out, AggregateError> {
    match slot {
        Ok(value) => Ok(value
            .downcast_ref::<Out>()
            .expect("result slot holds the registered output type")
            .clone()),
        Err(error) => Err(error.clone()),
    }
}

/* ===================== entry points ===================== */

/// Start a request set from any reducer.
///
/// This is the factory seam: the built-in entry points below are sugar over
/// it, and caller-built [`Reducer`]s plug in the same way.
pub fn aggregate_of<'a, S, T, R>(source: &'a S, reducer: R) -> RequestSet<'a, S, T, (R::Output,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    R: Reducer<T> + Clone + 'static,
{
    RequestSet {
        source,
        reducers: vec![Box::new(reducer)],
        cache: RefCell::new(None),
        _outs: PhantomData,
    }
}

/// Request the sum of a numeric (or nullable numeric) sequence.
///
/// ```
/// use multifold::sum_of;
///
/// let xs = vec![1.0_f64, 2.0, 3.0, 4.0];
/// let (total, mean) = sum_of(&xs).and_average().resolve()?;
/// assert_eq!(total, 10.0);
/// assert_eq!(mean, 2.5);
/// # Ok::<_, multifold::AggregateError>(())
/// ```
pub fn sum_of<'a, S, T, N>(source: &'a S) -> RequestSet<'a, S, T, (N,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    N: Numeric,
    Sum<N>: Reducer<T, Output = N>,
{
    aggregate_of(source, Sum::new())
}

/// Request the sum of a per-element transform.
///
/// ```
/// use multifold::sum_by;
///
/// let words = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];
/// let (letters,) = sum_by(&words, |w: &String| w.len()).resolve()?;
/// assert_eq!(letters, 6);
/// # Ok::<_, multifold::AggregateError>(())
/// ```
pub fn sum_by<'a, S, T, U, N, F>(source: &'a S, selector: F) -> RequestSet<'a, S, T, (N,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    N: Numeric,
    F: Fn(&T) -> U + Clone + Send + Sync + 'static,
    Sum<N>: Reducer<U, Output = N>,
{
    aggregate_of(source, Mapped::new(selector, Sum::new()))
}

/// Request the average of a numeric (or nullable numeric) sequence as `f64`.
///
/// Fails with [`AggregateError::EmptySequence`] when read after zero
/// eligible elements.
pub fn average_of<'a, S, T, N>(source: &'a S) -> RequestSet<'a, S, T, (f64,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    N: Numeric,
    Average<N>: Reducer<T, Output = f64>,
{
    aggregate_of(source, Average::new())
}

/// Request the average of a per-element transform as `f64`.
pub fn average_by<'a, S, T, U, N, F>(source: &'a S, selector: F) -> RequestSet<'a, S, T, (f64,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    N: Numeric,
    F: Fn(&T) -> U + Clone + Send + Sync + 'static,
    Average<N>: Reducer<U, Output = f64>,
{
    aggregate_of(source, Mapped::new(selector, Average::new()))
}

/// Request the element count of any sequence.
pub fn count_of<'a, S, T>(source: &'a S) -> RequestSet<'a, S, T, (u64,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
{
    aggregate_of(source, Count::new())
}

/// Request the minimum of an `Ord` (or nullable `Ord`) sequence.
///
/// Fails with [`AggregateError::EmptySequence`] when read after zero
/// eligible elements.
pub fn min_of<'a, S, T, N>(source: &'a S) -> RequestSet<'a, S, T, (N,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    N: 'static + Send + Sync + Clone + Ord,
    Min<N>: Reducer<T, Output = N>,
{
    aggregate_of(source, Min::new())
}

/// Request the maximum of an `Ord` (or nullable `Ord`) sequence.
///
/// Fails with [`AggregateError::EmptySequence`] when read after zero
/// eligible elements.
pub fn max_of<'a, S, T, N>(source: &'a S) -> RequestSet<'a, S, T, (N,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    N: 'static + Send + Sync + Clone + Ord,
    Max<N>: Reducer<T, Output = N>,
{
    aggregate_of(source, Max::new())
}

/// Request whether any element matches `predicate` (`false` when empty).
pub fn any_of<'a, S, T, F>(source: &'a S, predicate: F) -> RequestSet<'a, S, T, (bool,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: Fn(&T) -> bool + Clone + Send + Sync + 'static,
{
    aggregate_of(source, Any::new(predicate))
}

/// Request whether every element matches `predicate` (`true` when empty).
pub fn all_of<'a, S, T, F>(source: &'a S, predicate: F) -> RequestSet<'a, S, T, (bool,)>
where
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: Fn(&T) -> bool + Clone + Send + Sync + 'static,
{
    aggregate_of(source, All::new(predicate))
}
