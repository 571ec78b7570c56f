use super::*;

#[test]
fn test_insertion_order_is_kept() {
    let table = ScoreTable::from_entries([
        ("C", vec![1.0, 2.0]),
        ("A", vec![3.0, 4.0]),
        ("B", vec![5.0, 6.0]),
    ])
    .unwrap();
    assert_eq!(table.items(), &["C", "A", "B"]);
    assert_eq!(table.n_metrics(), 2);
    assert_eq!(table.column(1), vec![2.0, 4.0, 6.0]);
    assert_eq!(table.position("B"), Some(2));
    assert_eq!(table.position("Z"), None);
}

#[test]
fn test_duplicate_item_rejected() {
    let err = ScoreTable::from_entries([("A", vec![1.0]), ("A", vec![2.0])]).unwrap_err();
    assert_eq!(err, ScoreTableError::DuplicateItem("A".to_string()));
}

#[test]
fn test_ragged_scores_rejected() {
    let err = ScoreTable::from_entries([("A", vec![1.0, 2.0]), ("B", vec![3.0])]).unwrap_err();
    assert_eq!(
        err,
        ScoreTableError::RaggedScores {
            item: "B".to_string(),
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn test_non_finite_rejected() {
    let err = ScoreTable::from_entries([("A", vec![1.0, f64::NAN])]).unwrap_err();
    assert_eq!(
        err,
        ScoreTableError::NonFiniteScore {
            item: "A".to_string(),
            metric: 1,
        }
    );
}

#[test]
fn test_empty_table() {
    let table = ScoreTable::new();
    assert!(table.is_empty());
    assert_eq!(table.n_metrics(), 0);
    assert!(table.column(0).is_empty());
}

#[test]
fn test_json_keeps_key_order() {
    let table: ScoreTable =
        serde_json::from_str(r#"{"D": [10, 0.6], "A": [100, 0.1], "B": [90, 0.3]}"#).unwrap();
    assert_eq!(table.items(), &["D", "A", "B"]);
    assert_eq!(table.scores(1), Some(&[100.0, 0.1][..]));

    let back = serde_json::to_string(&table).unwrap();
    assert!(back.starts_with(r#"{"D":"#));
}

#[test]
fn test_json_ragged_is_error() {
    let res: Result<ScoreTable, _> = serde_json::from_str(r#"{"A": [1, 2], "B": [3]}"#);
    let msg = res.unwrap_err().to_string();
    assert!(msg.contains("item B has 1 scores, expected 2"), "{msg}");
}
