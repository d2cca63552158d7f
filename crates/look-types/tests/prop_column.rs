// ─────────────────────────────────────────────────────────────────────
// LookLab — Property-Based Tests for the Column Store
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Covers: slot roundtrips, row deletion arithmetic, clamping behavior.

use look_types::column::{ColumnStore, MAX_COLUMNS};
use ndarray::Array1;
use proptest::prelude::*;

proptest! {
    /// Any in-range slot stores and returns data unchanged.
    #[test]
    fn slot_roundtrip(
        index in 0usize..MAX_COLUMNS,
        values in proptest::collection::vec(-1e9f64..1e9, 1..64),
    ) {
        let mut store = ColumnStore::new();
        store.set_data(index, Array1::from_vec(values.clone())).unwrap();
        store.set_name(index, Some("chan".into())).unwrap();

        prop_assert_eq!(store.data(index).unwrap().to_vec(), values);
        prop_assert_eq!(store.occupied().count(), 1);
    }

    /// Deleting a row range shortens every column by exactly the
    /// clamped range width and preserves the order of survivors.
    #[test]
    fn delete_rows_arithmetic(
        len in 1usize..128,
        start in 0usize..160,
        width in 0usize..160,
    ) {
        let values: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let mut store = ColumnStore::new();
        store.set_data(0, Array1::from_vec(values)).unwrap();

        let stop = start + width;
        store.delete_rows(start, Some(stop));

        let lo = start.min(len);
        let hi = stop.min(len);
        let kept = store.data(0).unwrap();
        prop_assert_eq!(kept.len(), len - (hi - lo));
        // Survivors keep their original values in order.
        for (i, &v) in kept.iter().enumerate() {
            let expected = if i < lo { i } else { i + (hi - lo) };
            prop_assert_eq!(v, expected as f64);
        }
    }

    /// Delete-to-end always leaves exactly the prefix.
    #[test]
    fn delete_rows_open_ended(
        len in 1usize..128,
        start in 0usize..160,
    ) {
        let values: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let mut store = ColumnStore::new();
        store.set_data(0, Array1::from_vec(values)).unwrap();

        store.delete_rows(start, None);
        prop_assert_eq!(store.data(0).unwrap().len(), start.min(len));
    }

    /// Out-of-range indices always error, never panic.
    #[test]
    fn out_of_range_is_error(index in MAX_COLUMNS..MAX_COLUMNS * 4) {
        let store = ColumnStore::new();
        prop_assert!(store.data(index).is_err());
        prop_assert!(store.name(index).is_err());
        prop_assert!(store.unit(index).is_err());
    }
}
