// ─────────────────────────────────────────────────────────────────────
// LookLab — Property-Based Tests (proptest) for look-units
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for look-units using proptest.
//!
//! Covers: conversion round-trips, arithmetic unit bookkeeping, parser
//! equivalences between explicit and UDUNITS power syntax.

use look_units::{Quantity, UnitRegistry};
use ndarray::Array1;
use proptest::prelude::*;

fn length_units() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["m", "mm", "cm", "km", "micron", "in"])
}

fn pressure_units() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Pa", "kPa", "MPa", "GPa", "bar", "psi"])
}

proptest! {
    /// Converting to another unit and back reproduces the magnitudes.
    #[test]
    fn conversion_roundtrip(
        values in prop::collection::vec(-1e6f64..1e6, 1..64),
        from in length_units(),
        to in length_units(),
    ) {
        let reg = UnitRegistry::default();
        let q = reg.quantity(Array1::from_vec(values.clone()), from).unwrap();
        let there = q.to(&reg.get(to).unwrap()).unwrap();
        let back = there.to(&reg.get(from).unwrap()).unwrap();

        for (orig, round) in values.iter().zip(back.values().iter()) {
            // Relative tolerance: km <-> micron spans 9 decades.
            let tol = 1e-9 * orig.abs().max(1.0);
            prop_assert!((orig - round).abs() <= tol,
                "{from}->{to}->{from}: {orig} became {round}");
        }
    }

    /// Addition after conversion is commutative up to unit choice.
    #[test]
    fn addition_commutes_across_units(
        a in prop::collection::vec(-1e3f64..1e3, 1..32),
        from in pressure_units(),
        to in pressure_units(),
    ) {
        let reg = UnitRegistry::default();
        let b: Vec<f64> = a.iter().map(|v| v * 0.5 + 1.0).collect();
        let qa = reg.quantity(Array1::from_vec(a), from).unwrap();
        let qb = reg.quantity(Array1::from_vec(b), to).unwrap();

        let left = qa.add(&qb).unwrap();
        let right = qb.add(&qa).unwrap().to(left.unit()).unwrap();

        for (l, r) in left.values().iter().zip(right.values().iter()) {
            let tol = 1e-9 * l.abs().max(1.0);
            prop_assert!((l - r).abs() <= tol);
        }
    }

    /// A quantity divided by itself is dimensionless ones.
    #[test]
    fn self_division_is_dimensionless(
        values in prop::collection::vec(0.1f64..1e4, 1..32),
        unit in length_units(),
    ) {
        let reg = UnitRegistry::default();
        let q = reg.quantity(Array1::from_vec(values), unit).unwrap();
        let ratio = q.div(&q).unwrap();

        prop_assert!(ratio.unit().is_dimensionless());
        for v in ratio.values() {
            prop_assert!((v - 1.0).abs() < 1e-12);
        }
    }

    /// Explicit `**` powers and UDUNITS attached powers parse identically.
    #[test]
    fn power_syntax_equivalence(power in 1i32..4) {
        let reg = UnitRegistry::default();
        let explicit = reg.parse(&format!("m**{power}")).unwrap();
        let attached = reg.parse(&format!("m{power}")).unwrap();

        prop_assert_eq!(explicit.dims(), attached.dims());
        prop_assert!((explicit.scale() - attached.scale()).abs() < 1e-15);
    }

    /// Cumulative sum's final element equals the plain sum.
    #[test]
    fn cumsum_total_matches_sum(
        values in prop::collection::vec(-1e3f64..1e3, 1..64),
    ) {
        let total: f64 = values.iter().sum();
        let q = Quantity::dimensionless(Array1::from_vec(values));
        let c = q.cumsum();

        let last = c.values()[c.len() - 1];
        prop_assert!((last - total).abs() < 1e-6,
            "cumsum end {last} vs sum {total}");
    }
}
