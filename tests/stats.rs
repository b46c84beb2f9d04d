#![cfg(feature = "stats")]

//! Pass statistics: populated lazily, never trigger enumeration.

use anyhow::Result;
use multifold::testing::CountingSource;
use multifold::{aggregate_of, sum_of, Sum, TryMapped};

#[test]
fn stats_appear_after_resolution() -> Result<()> {
    let source = CountingSource::new(vec![1_u32, 2, 3]);
    let set = sum_of(&source).and_count();

    // Asking for statistics is not a result read.
    assert!(set.stats().is_none());
    assert_eq!(source.starts(), 0);

    let (total, n) = set.resolve()?;
    assert_eq!((total, n), (6, 3));

    let stats = set.stats().expect("resolved");
    assert_eq!(stats.elements, 3);
    assert_eq!(stats.aggregates, ["sum", "count"]);
    assert!(!stats.failed);

    let json = stats.to_json()?;
    assert!(json.contains("\"elements\": 3"));
    assert!(json.contains("\"sum\""));
    Ok(())
}

#[test]
fn stats_round_trip_through_a_file() -> Result<()> {
    let xs = vec![4_u64, 5];
    let set = sum_of(&xs).and_count();
    set.resolve()?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pass_stats.json");
    set.stats().expect("resolved").save_to_file(&path)?;

    let written = std::fs::read_to_string(&path)?;
    assert!(written.contains("\"elements\": 2"));
    assert!(written.contains("\"count\""));
    Ok(())
}

#[test]
fn aborted_passes_report_partial_progress() {
    let raw = vec!["3".to_string(), "x".to_string(), "5".to_string()];
    let set = aggregate_of(
        &raw,
        TryMapped::new(|s: &String| s.parse::<u64>(), Sum::new()),
    );

    assert!(set.resolve().is_err());

    let stats = set.stats().expect("resolved");
    assert!(stats.failed);
    assert_eq!(stats.elements, 2); // aborted while feeding the second element
    assert_eq!(stats.aggregates, ["sum"]);
}
