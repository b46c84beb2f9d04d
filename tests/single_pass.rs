//! The core guarantee: one enumeration, no matter how many aggregates or
//! how often results are read.

use anyhow::Result;
use multifold::testing::CountingSource;
use multifold::{count_of, sum_of};

#[test]
fn one_enumeration_regardless_of_arity() -> Result<()> {
    let source = CountingSource::new(vec![1.0_f64, 2.0, 3.0, 4.0]);

    let set = sum_of(&source)
        .and_average()
        .and_count()
        .and_any(|v: &f64| *v > 3.0);

    // Lazy: building the set enumerates nothing.
    assert_eq!(source.starts(), 0);

    let (total, mean, n, has_large) = set.resolve()?;
    assert_eq!(source.starts(), 1);
    assert_eq!(total, 10.0);
    assert_eq!(mean, 2.5);
    assert_eq!(n, 4);
    assert!(has_large);
    Ok(())
}

#[test]
fn repeated_reads_hit_the_cache() -> Result<()> {
    let source = CountingSource::new(vec![5_u64, 7, 9]);
    let set = sum_of(&source).and_count();

    let first = set.resolve()?;
    let second = set.resolve()?;
    let (total, n) = set.resolve_each();

    assert_eq!(first, (21, 3));
    assert_eq!(second, first);
    assert_eq!(total?, 21);
    assert_eq!(n?, 3);
    assert_eq!(source.starts(), 1);
    Ok(())
}

#[test]
fn sixteen_aggregates_share_one_pass() -> Result<()> {
    let source = CountingSource::new(vec![1_u64, 2, 3]);

    let set = sum_of(&source)
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count()
        .and_count();
    assert_eq!(set.arity(), 16);

    let (total, c1, c2, c3, c4, c5, c6, c7, c8, c9, c10, c11, c12, c13, c14, c15) =
        set.resolve()?;
    assert_eq!(source.starts(), 1);
    assert_eq!(total, 6);
    for n in [c1, c2, c3, c4, c5, c6, c7, c8, c9, c10, c11, c12, c13, c14, c15] {
        assert_eq!(n, 3);
    }
    Ok(())
}

#[test]
fn derived_sets_are_independent() -> Result<()> {
    let source = CountingSource::new(vec![2_i64, 4, 6]);

    let base = sum_of(&source);
    let with_count = base.and_count();
    let with_parity = base.and_any(|v: &i64| *v % 2 == 1);

    let (total_a, n) = with_count.resolve()?;
    let (total_b, any_odd) = with_parity.resolve()?;
    assert_eq!((total_a, n), (12, 3));
    assert_eq!(total_b, 12);
    assert!(!any_odd);

    // Each derived set ran its own pass; the base is still unresolved.
    assert_eq!(source.starts(), 2);
    assert!(!base.is_resolved());

    let (total_base,) = base.resolve()?;
    assert_eq!(total_base, 12);
    assert_eq!(source.starts(), 3);
    Ok(())
}

#[test]
fn resolution_state_is_observable() -> Result<()> {
    let xs = vec![1_u32, 2];
    let set = count_of(&xs);
    assert_eq!(set.arity(), 1);
    assert!(!set.is_resolved());

    let (n,) = set.resolve()?;
    assert_eq!(n, 2);
    assert!(set.is_resolved());
    Ok(())
}
