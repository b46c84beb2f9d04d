//! Predicate reducers: Any, All

use crate::error::AggregateError;
use crate::reducer::Reducer;

/* ===================== Any<F> ===================== */

/// Whether any element matches a predicate.
///
/// - Output: `bool`
///
/// `false` over an empty sequence. The predicate stops being consulted after
/// the first match; the pass itself still runs to exhaustion since other
/// aggregates share it.
#[derive(Clone, Copy, Debug)]
pub struct Any<F> {
    predicate: F,
    hit: bool,
}

impl<F> Any<F> {
    /// Build the reducer around `predicate`.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            hit: false,
        }
    }
}

impl<T, F> Reducer<T> for Any<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    type Output = bool;

    fn accept(&mut self, value: &T) -> Result<(), AggregateError> {
        if !self.hit && (self.predicate)(value) {
            self.hit = true;
        }
        Ok(())
    }

    fn finish(self) -> Result<bool, AggregateError> {
        Ok(self.hit)
    }

    fn kind(&self) -> &'static str {
        "any"
    }
}

/* ===================== All<F> ===================== */

/// Whether every element matches a predicate.
///
/// - Output: `bool`
///
/// `true` over an empty sequence.
#[derive(Clone, Copy, Debug)]
pub struct All<F> {
    predicate: F,
    holds: bool,
}

impl<F> All<F> {
    /// Build the reducer around `predicate`.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            holds: true,
        }
    }
}

impl<T, F> Reducer<T> for All<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    type Output = bool;

    fn accept(&mut self, value: &T) -> Result<(), AggregateError> {
        if self.holds && !(self.predicate)(value) {
            self.holds = false;
        }
        Ok(())
    }

    fn finish(self) -> Result<bool, AggregateError> {
        Ok(self.holds)
    }

    fn kind(&self) -> &'static str {
        "all"
    }
}
