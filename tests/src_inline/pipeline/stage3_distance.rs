use super::*;

fn ranking(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn reversed_table(n: usize) -> ScoreTable {
    ScoreTable::from_entries((0..n).map(|i| (format!("item{i}"), vec![(n - i) as f64, i as f64])))
        .unwrap()
}

#[test]
fn test_footrule_basic() {
    assert_eq!(footrule(&[0, 1, 2, 3], &[3, 1, 2, 0]), 6);
    assert_eq!(footrule(&[0, 1, 2], &[0, 1, 2]), 0);
    assert_eq!(footrule(&[], &[]), 0);
}

#[test]
fn test_footrule_is_symmetric() {
    let a = [2, 0, 3, 1, 4];
    let b = [4, 3, 0, 1, 2];
    assert_eq!(footrule(&a, &b), footrule(&b, &a));
}

#[test]
fn test_max_footrule() {
    assert_eq!(max_footrule(0), 0);
    assert_eq!(max_footrule(1), 0);
    assert_eq!(max_footrule(4), 8);
    assert_eq!(max_footrule(5), 12);
}

#[test]
fn test_full_reversal_reaches_max() {
    for n in 1..=9 {
        let table = reversed_table(n);
        let out = run_stage3(&table, &table.items().to_vec(), MetricReduction::FirstPair).unwrap();
        assert_eq!(out.distance, max_footrule(n), "n={n}");
    }
}

#[test]
fn test_first_pair_ignores_extra_metrics() {
    let table = ScoreTable::from_entries([
        ("A", vec![3.0, 3.0, 1.0]),
        ("B", vec![2.0, 2.0, 2.0]),
        ("C", vec![1.0, 1.0, 3.0]),
    ])
    .unwrap();
    let items = ranking(&["A", "B", "C"]);
    let first = run_stage3(&table, &items, MetricReduction::FirstPair).unwrap();
    assert_eq!(first.distance, 0);
    assert_eq!(first.pairs.len(), 1);

    let base = run_stage3(&table, &items, MetricReduction::AgainstBase).unwrap();
    assert_eq!(base.pairs.len(), 2);
    assert_eq!(base.distance, 4);
}

#[test]
fn test_against_base_equals_first_pair_for_two_metrics() {
    let table = ScoreTable::from_entries([
        ("A", vec![100.0, 0.1]),
        ("B", vec![90.0, 0.3]),
        ("C", vec![20.0, 0.2]),
        ("D", vec![10.0, 0.6]),
    ])
    .unwrap();
    let items = ranking(&["A", "B", "C", "D"]);
    let a = run_stage3(&table, &items, MetricReduction::FirstPair).unwrap();
    let b = run_stage3(&table, &items, MetricReduction::AgainstBase).unwrap();
    assert_eq!(a.distance, 6);
    assert_eq!(a.distance, b.distance);
}

#[test]
fn test_against_proposed_sums_every_metric() {
    let table = ScoreTable::from_entries([
        ("A", vec![100.0, 0.1]),
        ("B", vec![90.0, 0.3]),
        ("C", vec![20.0, 0.2]),
        ("D", vec![10.0, 0.6]),
    ])
    .unwrap();
    let out = run_stage3(&table, &ranking(&["B", "A", "C", "D"]), MetricReduction::AgainstProposed)
        .unwrap();
    // proposed ranks A=1 B=0 C=2 D=3; metric 0 ranks 0,1,2,3; metric 1 ranks 3,1,2,0
    assert_eq!(out.pairs[0].distance, 2);
    assert_eq!(out.pairs[1].distance, 6);
    assert_eq!(out.distance, 8);
    assert_eq!(out.pairs[0].left, RankSource::Proposed);
}

#[test]
fn test_against_proposed_needs_permutation() {
    let table = ScoreTable::from_entries([("A", vec![1.0]), ("B", vec![2.0])]).unwrap();
    let err = run_stage3(&table, &ranking(&["A"]), MetricReduction::AgainstProposed).unwrap_err();
    assert!(matches!(err, FootruleError::RankingNotPermutation(_)));
}

#[test]
fn test_too_few_metrics() {
    let table = ScoreTable::from_entries([("A", vec![1.0]), ("B", vec![2.0])]).unwrap();
    let err = run_stage3(&table, &ranking(&["A", "B"]), MetricReduction::FirstPair).unwrap_err();
    assert_eq!(
        err,
        FootruleError::TooFewMetrics {
            required: 2,
            found: 1,
        }
    );
}

#[test]
fn test_empty_and_single_are_zero() {
    let empty = run_stage3(&ScoreTable::new(), &[], MetricReduction::FirstPair).unwrap();
    assert_eq!(empty.distance, 0);
    assert!(empty.pairs.is_empty());

    let single = ScoreTable::from_entries([("A", vec![1.0, 2.0])]).unwrap();
    let out = run_stage3(&single, &ranking(&["A"]), MetricReduction::FirstPair).unwrap();
    assert_eq!(out.distance, 0);
}

#[test]
fn test_displacements_follow_first_pair() {
    let table = ScoreTable::from_entries([
        ("A", vec![100.0, 0.1]),
        ("B", vec![90.0, 0.3]),
        ("C", vec![20.0, 0.2]),
        ("D", vec![10.0, 0.6]),
    ])
    .unwrap();
    let out = run_stage3(&table, &ranking(&["A", "B", "C", "D"]), MetricReduction::FirstPair)
        .unwrap();
    let moved: Vec<usize> = out.displacements.iter().map(|d| d.displacement).collect();
    assert_eq!(moved, vec![3, 0, 0, 3]);
    assert_eq!(out.displacements[3].item, "D");
    assert_eq!(out.displacements[3].right_rank, 0);
}
