//! Semantics of the built-in reducer catalog, including empty and nullable
//! sequences.

use anyhow::Result;
use multifold::testing::assert_approx_eq;
use multifold::{all_of, any_of, average_of, max_of, min_of, sum_of};
use ordered_float::NotNan;

#[test]
fn empty_sum_succeeds_and_empty_average_fails() -> Result<()> {
    let empty: Vec<f64> = Vec::new();
    let set = sum_of(&empty).and_average();

    let (total, mean) = set.resolve_each();
    assert_eq!(total?, 0.0);

    let err = mean.unwrap_err();
    assert!(err.is_empty_sequence());
    assert_eq!(err.position(), Some(1));
    Ok(())
}

#[test]
fn all_none_counts_as_empty_for_average_but_not_sum() -> Result<()> {
    let blanks: Vec<Option<f64>> = vec![None, None, None];
    let set = sum_of(&blanks).and_average();

    let (total, mean) = set.resolve_each();
    assert_eq!(total?, 0.0);
    assert!(mean.unwrap_err().is_empty_sequence());
    Ok(())
}

#[test]
fn none_is_excluded_from_numerator_and_count() -> Result<()> {
    let sparse = vec![Some(2.0_f64), None, Some(4.0)];

    // Count still sees every element; the numeric state does not.
    let (total, mean, n) = sum_of(&sparse).and_average().and_count().resolve()?;
    assert_eq!(total, 6.0);
    assert_approx_eq(mean, 3.0, 1e-12);
    assert_eq!(n, 3);
    Ok(())
}

#[test]
fn average_of_integers_is_f64() -> Result<()> {
    let xs = vec![1_u32, 2, 3, 4];
    let (mean,) = average_of(&xs).resolve()?;
    assert_approx_eq(mean, 2.5, 1e-12);
    Ok(())
}

#[test]
fn min_and_max_over_values_and_options() -> Result<()> {
    let xs = vec![3_i32, 1, 4, 1, 5];
    let (lo, hi) = min_of(&xs).and_max().resolve()?;
    assert_eq!((lo, hi), (1, 5));

    let (hi, lo) = max_of(&xs).and_min().resolve()?;
    assert_eq!((hi, lo), (5, 1));

    let sparse = vec![None, Some(4_i32), Some(1)];
    let (lo, hi) = min_of(&sparse).and_max().resolve()?;
    assert_eq!((lo, hi), (1, 4));
    Ok(())
}

#[test]
fn min_over_empty_fails_per_position() -> Result<()> {
    let empty: Vec<u32> = Vec::new();
    let set = min_of(&empty).and_sum();

    let (lo, total) = set.resolve_each();
    assert!(lo.unwrap_err().is_empty_sequence());
    assert_eq!(total?, 0);
    Ok(())
}

#[test]
fn floats_order_through_not_nan() -> Result<()> {
    let xs: Vec<NotNan<f64>> = [2.5, 0.5, 9.25]
        .into_iter()
        .map(|v| NotNan::new(v).unwrap())
        .collect();

    let (lo, hi) = min_of(&xs).and_max().resolve()?;
    assert_eq!(lo.into_inner(), 0.5);
    assert_eq!(hi.into_inner(), 9.25);
    Ok(())
}

#[test]
fn predicates_have_vacuous_defaults() -> Result<()> {
    let empty: Vec<u32> = Vec::new();
    let (any_hit,) = any_of(&empty, |v: &u32| *v > 0).resolve()?;
    let (all_hold,) = all_of(&empty, |v: &u32| *v > 0).resolve()?;
    assert!(!any_hit);
    assert!(all_hold);

    let xs = vec![2_u32, 4, 5];
    let (any_odd, all_even) = any_of(&xs, |v: &u32| *v % 2 == 1)
        .and_all(|v: &u32| *v % 2 == 0)
        .resolve()?;
    assert!(any_odd);
    assert!(!all_even);
    Ok(())
}

// Zero is the sum identity for every numeric element type.
macro_rules! empty_sum_is_zero {
    ($($t:ty),+ $(,)?) => {
        paste::paste! { $(
            #[test]
            fn [<empty_sum_ $t _is_zero>]() {
                let items: Vec<$t> = Vec::new();
                let (total,) = sum_of(&items).resolve().unwrap();
                assert_eq!(total, 0 as $t);

                let blanks: Vec<Option<$t>> = vec![None, None];
                let (total,) = sum_of(&blanks).resolve().unwrap();
                assert_eq!(total, 0 as $t);
            }
        )+ }
    };
}

empty_sum_is_zero!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
