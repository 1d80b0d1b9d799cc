//! Frequency table construction tests.

use playground_core::FrequencyTable;

#[test]
fn rows_sort_lexicographically() {
    let table = FrequencyTable::from_counts(vec![
        ("Tails".into(), 40),
        ("Heads".into(), 60),
    ]);

    let labels: Vec<&str> = table.rows().iter().map(|r| r.outcome.as_str()).collect();
    assert_eq!(labels, vec!["Heads", "Tails"]);
}

#[test]
fn relative_frequencies_are_count_over_total() {
    let table = FrequencyTable::from_counts(vec![
        ("1".into(), 25),
        ("2".into(), 75),
    ]);

    assert_eq!(table.total(), 100);
    assert_eq!(table.row("1").expect("row 1").relative_frequency, 0.25);
    assert_eq!(table.row("2").expect("row 2").relative_frequency, 0.75);
}

#[test]
fn zero_total_yields_zero_frequencies() {
    let table = FrequencyTable::from_counts(vec![
        ("Heads".into(), 0),
        ("Tails".into(), 0),
    ]);

    for row in table.rows() {
        assert_eq!(
            row.relative_frequency, 0.0,
            "Empty table must report 0 frequency, not NaN"
        );
    }
}

#[test]
fn max_row_ties_break_to_lowest_label() {
    let table = FrequencyTable::from_counts(vec![
        ("3".into(), 10),
        ("1".into(), 10),
        ("2".into(), 5),
    ]);

    let top = table.max_row().expect("max row");
    assert_eq!(top.outcome, "1", "Ties must break toward the lowest label");
    assert_eq!(top.count, 10);
}

#[test]
fn empty_table_has_no_max_row() {
    let table = FrequencyTable::from_counts(vec![]);
    assert!(table.max_row().is_none());
    assert_eq!(table.total(), 0);
}
