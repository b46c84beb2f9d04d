//! Numeric bounds shared by the built-in reducers.

use std::ops::Add;

/// Element bound for the numeric reducers: owned, thread-safe, copyable, with
/// an additive zero identity via `Default`.
///
/// Blanket-implemented for every type meeting the bound, so all primitive
/// integer and float types qualify automatically.
pub trait Numeric: 'static + Send + Sync + Copy + Default + Add<Output = Self> {}
impl<T> Numeric for T where T: 'static + Send + Sync + Copy + Default + Add<Output = T> {}
