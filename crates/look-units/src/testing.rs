// ─────────────────────────────────────────────────────────────────────
// LookLab — Testing Helpers
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Unit-aware assertions shared by the workspace test suites.

use crate::quantity::Quantity;

/// Assert two quantities agree element-wise within `tol`, converting
/// `actual` into `desired`'s unit first.
///
/// Panics with a descriptive message on incommensurable units, length
/// mismatch, or an out-of-tolerance element.
pub fn assert_quantity_close(actual: &Quantity, desired: &Quantity, tol: f64) {
    let converted = match actual.to(desired.unit()) {
        Ok(q) => q,
        Err(e) => panic!(
            "units are not compatible: '{}' should be '{}' ({e})",
            actual.unit(),
            desired.unit()
        ),
    };
    assert_eq!(
        converted.len(),
        desired.len(),
        "quantity lengths differ: {} vs {}",
        converted.len(),
        desired.len()
    );
    for (i, (a, d)) in converted
        .values()
        .iter()
        .zip(desired.values().iter())
        .enumerate()
    {
        assert!(
            (a - d).abs() <= tol,
            "element {i}: {a} != {d} (tolerance {tol}, units {})",
            desired.unit()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::UnitRegistry;
    use ndarray::array;

    #[test]
    fn test_close_across_units() {
        let reg = UnitRegistry::default();
        let a = reg.quantity(array![1.0, 2.0], "mm").unwrap();
        let b = reg.quantity(array![1000.0, 2000.0], "micron").unwrap();
        assert_quantity_close(&a, &b, 1e-9);
    }

    #[test]
    #[should_panic(expected = "not compatible")]
    fn test_incompatible_units_panic() {
        let reg = UnitRegistry::default();
        let a = reg.quantity(array![1.0], "mm").unwrap();
        let b = reg.quantity(array![1.0], "s").unwrap();
        assert_quantity_close(&a, &b, 1e-9);
    }

    #[test]
    #[should_panic(expected = "element 1")]
    fn test_out_of_tolerance_panics() {
        let reg = UnitRegistry::default();
        let a = reg.quantity(array![1.0, 2.0], "mm").unwrap();
        let b = reg.quantity(array![1.0, 2.5], "mm").unwrap();
        assert_quantity_close(&a, &b, 1e-9);
    }
}
