// File: crates/chart-dataset/tests/ordering.rs
// Purpose: Validate ascending x-order handling for plain, checked, and ordered inserts.

use chart_dataset::{DataSet, DataSetError, Entry};

#[test]
fn plain_append_accepts_out_of_order() {
    let mut set = DataSet::from_entries(vec![Entry::new(5, 1.0)]);
    set.add_entry(Entry::new(2, 2.0));
    assert_eq!(set.entry_count(), 2);
    assert!(!set.is_sorted_by_x());
}

#[test]
fn checked_append_rejects_out_of_order() {
    let mut set = DataSet::from_entries(vec![Entry::new(5, 1.0)]);
    let err = set.add_entry_checked(Entry::new(2, 9.0)).unwrap_err();
    assert_eq!(err, DataSetError::OutOfOrder { x_index: 2, last_x_index: 5 });
    assert_eq!(set.entry_count(), 1);
    assert_eq!(set.y_max(), 1.0, "rejected entry must not touch aggregates");

    set.add_entry_checked(Entry::new(5, 3.0)).expect("equal x is allowed");
    set.add_entry_checked(Entry::new(6, 4.0)).expect("larger x is allowed");
    assert!(set.is_sorted_by_x());
    assert_eq!(set.y_max(), 4.0);
}

#[test]
fn ordered_insert_keeps_sort_and_places_after_duplicates() {
    let mut set = DataSet::from_entries(vec![
        Entry::new(0, 0.0),
        Entry::new(2, 1.0),
        Entry::new(4, 2.0),
    ]);
    assert_eq!(set.add_entry_ordered(Entry::new(3, 7.0)), 2);
    assert_eq!(set.add_entry_ordered(Entry::new(2, 8.0)), 2);
    assert_eq!(set.add_entry_ordered(Entry::new(-1, -9.0)), 0);
    assert!(set.is_sorted_by_x());

    let run: Vec<f64> = set.entries_for_x_index(2).iter().map(|e| e.value).collect();
    assert_eq!(run, vec![1.0, 8.0]);
    assert_eq!(set.y_bounds(), Some((-9.0, 8.0)));
}
