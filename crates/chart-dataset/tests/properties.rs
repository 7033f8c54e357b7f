// File: crates/chart-dataset/tests/properties.rs
// Purpose: Property checks for aggregate invariants and x-index lookup contracts.

use chart_dataset::{DataSet, Entry};
use proptest::prelude::*;

fn mixed_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1000.0f64..1000.0,
        1 => -1e17f64..1e17,
    ]
}

fn sorted_entries() -> impl Strategy<Value = Vec<Entry>> {
    proptest::collection::vec((0i64..30, mixed_value()), 0..60).prop_map(|mut raw| {
        raw.sort_by_key(|(x, _)| *x);
        raw.into_iter().map(|(x, v)| Entry::new(x, v)).collect()
    })
}

fn assert_aggregates_fresh(set: &DataSet) {
    let values: Vec<f64> = set.entries().iter().map(|e| e.value).collect();
    if values.is_empty() {
        assert_eq!(set.y_bounds(), None);
        assert_eq!(set.y_value_sum(), 0.0);
        return;
    }
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = values.iter().map(|v| v.abs()).sum();
    assert_eq!(set.y_bounds(), Some((lo, hi)));
    let tolerance = 1e-12 * sum.max(1.0);
    assert!((set.y_value_sum() - sum).abs() <= tolerance, "sum drifted: {} vs {}", set.y_value_sum(), sum);
}

proptest! {
    #[test]
    fn construction_matches_recomputation(entries in sorted_entries()) {
        let set = DataSet::from_entries(entries);
        assert_aggregates_fresh(&set);
    }

    #[test]
    fn mutations_keep_aggregates_fresh(
        entries in sorted_entries(),
        ops in proptest::collection::vec((any::<bool>(), 0i64..30, mixed_value()), 0..40),
    ) {
        let mut set = DataSet::from_entries(entries);
        for (add, x, v) in ops {
            let before = set.entry_count();
            if add {
                set.add_entry_ordered(Entry::new(x, v));
                prop_assert_eq!(set.entry_count(), before + 1);
            } else if let Some(target) = set.entry_for_x_index(x).cloned() {
                prop_assert!(set.remove_entry(&target));
                prop_assert_eq!(set.entry_count(), before - 1);
            }
            assert_aggregates_fresh(&set);
        }
        prop_assert!(set.is_sorted_by_x());
    }

    #[test]
    fn exact_hits_find_first_of_run(entries in sorted_entries(), x in 0i64..30) {
        let set = DataSet::from_entries(entries);
        let expected: Vec<f64> = set.entries().iter().filter(|e| e.x_index == x).map(|e| e.value).collect();
        let run: Vec<f64> = set.entries_for_x_index(x).iter().map(|e| e.value).collect();
        prop_assert_eq!(&run, &expected);

        let first = set.entries().iter().position(|e| e.x_index == x);
        match first {
            Some(i) => prop_assert_eq!(set.index_for_x_index(x), Some(i)),
            None => prop_assert_eq!(set.index_for_x_index(x).is_none(), set.is_empty()),
        }
    }

    #[test]
    fn nan_value_iff_no_entry(entries in sorted_entries(), x in -5i64..35) {
        let set = DataSet::from_entries(entries);
        prop_assert_eq!(set.value_for_x_index(x).is_nan(), set.entry_for_x_index(x).is_none());
    }

    #[test]
    fn contains_ignores_identity(entries in sorted_entries(), pick in any::<prop::sample::Index>()) {
        let set = DataSet::from_entries(entries);
        prop_assume!(!set.is_empty());
        let e = pick.get(set.entries());
        let twin = Entry::new(e.x_index, e.value);
        prop_assert!(set.contains(&twin));
        prop_assert!(set.index_of_entry(&twin).is_none());
    }
}
