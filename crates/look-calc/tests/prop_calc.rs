// ─────────────────────────────────────────────────────────────────────
// LookLab — Property-Based Tests for Reduction Calculations
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Covers: zeroing invariants, offset removal continuity, elastic
//! correction degenerate cases.

use look_calc::{elastic_correction, remove_offset, zero, ZeroConfig};
use look_units::{Quantity, Scalar};
use ndarray::Array1;
use proptest::prelude::*;

fn quantity(values: Vec<f64>) -> Quantity {
    Quantity::dimensionless(Array1::from_vec(values))
}

proptest! {
    /// The record zeroed at is exactly zero afterwards, and all other
    /// records shift by the same amount.
    #[test]
    fn zero_pins_the_pivot(
        values in proptest::collection::vec(-1e6f64..1e6, 1..64),
        idx_seed in 0usize..64,
    ) {
        let idx = idx_seed % values.len();
        let q = quantity(values.clone());
        let zeroed = zero(&q, idx, &ZeroConfig::default()).unwrap();

        prop_assert!(zeroed.values()[idx].abs() < 1e-9);
        let shift = values[idx];
        for (orig, new) in values.iter().zip(zeroed.values().iter()) {
            prop_assert!((orig - shift - new).abs() < 1e-9);
        }
    }

    /// Zeroing is idempotent.
    #[test]
    fn zero_is_idempotent(
        values in proptest::collection::vec(-1e6f64..1e6, 1..64),
        idx_seed in 0usize..64,
    ) {
        let idx = idx_seed % values.len();
        let once = zero(&quantity(values), idx, &ZeroConfig::default()).unwrap();
        let twice = zero(&once, idx, &ZeroConfig::default()).unwrap();
        for (a, b) in once.values().iter().zip(twice.values().iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    /// After offset removal the stop record equals the start record, and
    /// records before the interval are untouched.
    #[test]
    fn remove_offset_closes_the_step(
        values in proptest::collection::vec(-1e6f64..1e6, 2..64),
        bounds_seed in (0usize..64, 0usize..64),
    ) {
        let n = values.len();
        let (a, b) = (bounds_seed.0 % n, bounds_seed.1 % n);
        let (start, stop) = (a.min(b), a.max(b));
        prop_assume!(start < stop);

        let result = remove_offset(&quantity(values.clone()), start, stop, false).unwrap();
        prop_assert!((result.values()[stop] - values[start]).abs() < 1e-9);
        for i in 0..start {
            prop_assert_eq!(result.values()[i], values[i]);
        }
    }

    /// A zero-coefficient polynomial leaves the displacement unchanged.
    #[test]
    fn elastic_correction_zero_poly_is_identity(
        values in proptest::collection::vec(-1e6f64..1e6, 1..64),
    ) {
        let disp = quantity(values.clone());
        let load = quantity(values.iter().map(|v| v * 2.0).collect());
        let corrected =
            elastic_correction(&load, &disp, &[Scalar::dimensionless(0.0)]).unwrap();
        for (a, b) in corrected.values().iter().zip(values.iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }
}
