//! Per-arity impls for [`RequestSet`]: growth and positional resolution.
//!
//! The reference implementation of this engine spelled out one class per
//! (arity x numeric type x nullability) combination -- hundreds of them. Two
//! `macro_rules!` collapse that catalog: `resolve_impls!` generates the typed
//! `resolve`/`resolve_each` pair for every arity from 1 to 16, and
//! `grow_impls!` generates `add`/`and_*` for arities 1 to 15 so growth stops
//! at the 16-aggregate maximum. The output tuple type is the positional
//! descriptor: slot `i` of the cached pass downcasts to the `i`-th tuple
//! element, so extraction is type-safe without any per-type code.

use crate::error::AggregateError;
use crate::numeric::Numeric;
use crate::reducer::{Mapped, Reducer};
use crate::reducers::{All, Any, Average, Count, Max, Min, Sum};
use crate::request::{extract, PassOutcome, RequestSet};

/// A failing slot typed to the position it stands in.
fn fail_slot<Out>(error: &AggregateError) -> Result<Out, AggregateError> {
    Err(error.clone())
}

macro_rules! resolve_impls {
    ($( [ $($R:ident $idx:tt),+ ] )+) => { $(
        impl<'a, S, T, $($R,)+> RequestSet<'a, S, T, ($($R,)+)>
        where
            T: 'a,
            &'a S: IntoIterator<Item = &'a T>,
            $($R: Clone + 'static,)+
        {
            /// Resolve every aggregate and return the results in registration
            /// order.
            ///
            /// The first call enumerates the source exactly once; later calls
            /// (and [`resolve_each`](Self::resolve_each)) read the cache. The
            /// first failing position propagates; see `resolve_each` for
            /// reading around a failing position.
            pub fn resolve(&self) -> Result<($($R,)+), AggregateError> {
                let outcome = self.resolved();
                match &*outcome {
                    PassOutcome::Poisoned { error, .. } => Err(error.clone()),
                    PassOutcome::Finished { slots, .. } => Ok((
                        $(extract::<$R>(&slots[$idx])?,)+
                    )),
                }
            }

            /// Per-position results, in registration order.
            ///
            /// One failing aggregate (say, an average over an empty sequence)
            /// does not hide its siblings: each slot carries its own
            /// `Result`. A pass-level failure poisons every slot with the
            /// same error.
            pub fn resolve_each(&self) -> ($(Result<$R, AggregateError>,)+) {
                let outcome = self.resolved();
                match &*outcome {
                    PassOutcome::Poisoned { error, .. } => (
                        $(fail_slot::<$R>(error),)+
                    ),
                    PassOutcome::Finished { slots, .. } => (
                        $(extract::<$R>(&slots[$idx]),)+
                    ),
                }
            }
        }
    )+ };
}

macro_rules! grow_impls {
    ($( [ $($R:ident),+ ] )+) => { $(
        impl<'a, S, T, $($R,)+> RequestSet<'a, S, T, ($($R,)+)> {
            /// Register one more aggregate, yielding a new, independent set
            /// of arity N+1.
            ///
            /// The receiver is left untouched and may keep fathering derived
            /// sets -- each one resolves on its own.
            pub fn add<R>(&self, reducer: R) -> RequestSet<'a, S, T, ($($R,)+ R::Output,)>
            where
                R: Reducer<T> + Clone + 'static,
            {
                self.grown(reducer)
            }

            /// Also request the sum. See [`sum_of`](crate::sum_of).
            pub fn and_sum<N>(&self) -> RequestSet<'a, S, T, ($($R,)+ N,)>
            where
                N: Numeric,
                Sum<N>: Reducer<T, Output = N>,
            {
                self.add(Sum::new())
            }

            /// Also request the sum of a per-element transform.
            pub fn and_sum_by<U, N, F>(&self, selector: F) -> RequestSet<'a, S, T, ($($R,)+ N,)>
            where
                N: Numeric,
                F: Fn(&T) -> U + Clone + Send + Sync + 'static,
                Sum<N>: Reducer<U, Output = N>,
            {
                self.add(Mapped::new(selector, Sum::new()))
            }

            /// Also request the average. See [`average_of`](crate::average_of).
            pub fn and_average<N>(&self) -> RequestSet<'a, S, T, ($($R,)+ f64,)>
            where
                N: Numeric,
                Average<N>: Reducer<T, Output = f64>,
            {
                self.add(Average::new())
            }

            /// Also request the average of a per-element transform.
            pub fn and_average_by<U, N, F>(&self, selector: F) -> RequestSet<'a, S, T, ($($R,)+ f64,)>
            where
                N: Numeric,
                F: Fn(&T) -> U + Clone + Send + Sync + 'static,
                Average<N>: Reducer<U, Output = f64>,
            {
                self.add(Mapped::new(selector, Average::new()))
            }

            /// Also request the element count.
            pub fn and_count(&self) -> RequestSet<'a, S, T, ($($R,)+ u64,)> {
                self.add(Count::new())
            }

            /// Also request the minimum. See [`min_of`](crate::min_of).
            pub fn and_min<N>(&self) -> RequestSet<'a, S, T, ($($R,)+ N,)>
            where
                N: 'static + Send + Sync + Clone + Ord,
                Min<N>: Reducer<T, Output = N>,
            {
                self.add(Min::new())
            }

            /// Also request the maximum. See [`max_of`](crate::max_of).
            pub fn and_max<N>(&self) -> RequestSet<'a, S, T, ($($R,)+ N,)>
            where
                N: 'static + Send + Sync + Clone + Ord,
                Max<N>: Reducer<T, Output = N>,
            {
                self.add(Max::new())
            }

            /// Also request whether any element matches `predicate`.
            pub fn and_any<F>(&self, predicate: F) -> RequestSet<'a, S, T, ($($R,)+ bool,)>
            where
                F: Fn(&T) -> bool + Clone + Send + Sync + 'static,
            {
                self.add(Any::new(predicate))
            }

            /// Also request whether every element matches `predicate`.
            pub fn and_all<F>(&self, predicate: F) -> RequestSet<'a, S, T, ($($R,)+ bool,)>
            where
                F: Fn(&T) -> bool + Clone + Send + Sync + 'static,
            {
                self.add(All::new(predicate))
            }
        }
    )+ };
}

resolve_impls! {
    [R1 0]
    [R1 0, R2 1]
    [R1 0, R2 1, R3 2]
    [R1 0, R2 1, R3 2, R4 3]
    [R1 0, R2 1, R3 2, R4 3, R5 4]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7, R9 8]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7, R9 8, R10 9]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7, R9 8, R10 9, R11 10]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7, R9 8, R10 9, R11 10, R12 11]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7, R9 8, R10 9, R11 10, R12 11, R13 12]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7, R9 8, R10 9, R11 10, R12 11, R13 12, R14 13]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7, R9 8, R10 9, R11 10, R12 11, R13 12, R14 13, R15 14]
    [R1 0, R2 1, R3 2, R4 3, R5 4, R6 5, R7 6, R8 7, R9 8, R10 9, R11 10, R12 11, R13 12, R14 13, R15 14, R16 15]
}

grow_impls! {
    [R1]
    [R1, R2]
    [R1, R2, R3]
    [R1, R2, R3, R4]
    [R1, R2, R3, R4, R5]
    [R1, R2, R3, R4, R5, R6]
    [R1, R2, R3, R4, R5, R6, R7]
    [R1, R2, R3, R4, R5, R6, R7, R8]
    [R1, R2, R3, R4, R5, R6, R7, R8, R9]
    [R1, R2, R3, R4, R5, R6, R7, R8, R9, R10]
    [R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11]
    [R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11, R12]
    [R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11, R12, R13]
    [R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11, R12, R13, R14]
    [R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11, R12, R13, R14, R15]
}
