//! Statistical reducers: Average

use crate::error::AggregateError;
use crate::numeric::Numeric;
use crate::reducer::Reducer;
use std::marker::PhantomData;

/* ===================== Average<N> ===================== */

/// Average as `f64` over numeric elements convertible into `f64`.
///
/// - Accumulator: running `f64` total plus a count of eligible elements
/// - Output: `f64`
///
/// Unlike [`Sum`](crate::Sum) there is no identity value: reading the result
/// after zero eligible elements fails with an empty-sequence error. In the
/// nullable shape, `None` elements are excluded from both the total and the
/// count, so a sequence of only `None` fails the same way an empty one does.
///
/// `i64`/`u64`/`i128` have no lossless `f64` conversion; average those
/// through a selector (e.g. `average_by(&xs, |x: &i64| *x as f64)`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Average<N> {
    total: f64,
    seen: u64,
    _n: PhantomData<N>,
}

impl<N> Average<N> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self {
            total: 0.0,
            seen: 0,
            _n: PhantomData,
        }
    }
}

impl<N> Reducer<N> for Average<N>
where
    N: Numeric + Into<f64>,
{
    type Output = f64;

    fn accept(&mut self, value: &N) -> Result<(), AggregateError> {
        self.total += (*value).into();
        self.seen += 1;
        Ok(())
    }

    fn finish(self) -> Result<f64, AggregateError> {
        if self.seen == 0 {
            Err(AggregateError::empty("average"))
        } else {
            Ok(self.total / self.seen as f64)
        }
    }

    fn kind(&self) -> &'static str {
        "average"
    }
}

/// Nullable variant: `None` is excluded from the total and the count alike.
impl<N> Reducer<Option<N>> for Average<N>
where
    N: Numeric + Into<f64>,
{
    type Output = f64;

    fn accept(&mut self, value: &Option<N>) -> Result<(), AggregateError> {
        if let Some(v) = value {
            self.total += (*v).into();
            self.seen += 1;
        }
        Ok(())
    }

    fn finish(self) -> Result<f64, AggregateError> {
        if self.seen == 0 {
            Err(AggregateError::empty("average"))
        } else {
            Ok(self.total / self.seen as f64)
        }
    }

    fn kind(&self) -> &'static str {
        "average"
    }
}
