// ─────────────────────────────────────────────────────────────────────
// LookLab — Basic Calculations
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Basic calculations needed when reducing experiment data: zeroing a
//! channel, removing instantaneous offsets, and elastic correction of
//! displacement records.

use look_types::error::{LookError, LookResult};
use look_units::{Quantity, Scalar};

/// How [`zero`] treats records away from the zero index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroMode {
    /// Subtract the zero value from every record.
    #[default]
    At,
    /// Additionally flatten all records before the index to the pivot.
    Before,
    /// Additionally flatten all records after the index to the pivot.
    After,
}

/// Options for [`zero`].
#[derive(Debug, Clone, Default)]
pub struct ZeroConfig {
    /// Records either side of the index averaged to get the zero value.
    /// Zero means "use the single record".
    pub window: usize,
    /// Value the pivot record is set to after zeroing.
    pub value: Option<Scalar>,
    pub mode: ZeroMode,
}

/// Zero a channel at a given record.
///
/// Subtracts the value at `zero_idx` (or the mean over the window around
/// it) from the whole array, then adds `value` if given. In `Before` /
/// `After` modes the records before/after the index are flattened to the
/// pivot value, which is how XLook handled pre-load and post-run data.
pub fn zero(data: &Quantity, zero_idx: usize, config: &ZeroConfig) -> LookResult<Quantity> {
    let n = data.len();
    if zero_idx >= n {
        return Err(LookError::RecordOutOfBounds {
            index: zero_idx,
            len: n,
        });
    }

    let zero_value = if config.window > 0 {
        let lo = zero_idx.saturating_sub(config.window);
        let hi = (zero_idx + config.window + 1).min(n);
        data.mean_range(lo, hi)?
    } else {
        data.get(zero_idx)?
    };

    let mut result = data.sub_scalar(&zero_value)?;
    if let Some(value) = &config.value {
        result = result.add_scalar(value)?;
    }

    let pivot = result.values()[zero_idx];
    let mut values = result.into_values();
    match config.mode {
        ZeroMode::At => {}
        ZeroMode::Before => values.slice_mut(ndarray::s![..zero_idx]).fill(pivot),
        ZeroMode::After => values.slice_mut(ndarray::s![zero_idx..]).fill(pivot),
    }

    Ok(Quantity::new(values, data.unit().clone()))
}

/// Remove an instantaneous offset between records `start` and `stop`.
///
/// Sensor re-ranging and hitting displacement stops produce step offsets
/// in a channel. The step `data[stop] - data[start]` is subtracted from
/// every record at and after `stop`; with `set_between` the transition
/// records are flattened to `data[start]`.
pub fn remove_offset(
    data: &Quantity,
    start: usize,
    stop: usize,
    set_between: bool,
) -> LookResult<Quantity> {
    let n = data.len();
    if stop >= n || start > stop {
        return Err(LookError::RecordOutOfBounds { index: stop, len: n });
    }

    let mut values = data.values().clone();
    let offset = values[stop] - values[start];
    for i in stop..n {
        values[i] -= offset;
    }
    if set_between {
        let pivot = values[start];
        for i in start..stop {
            values[i] = pivot;
        }
    }

    Ok(Quantity::new(values, data.unit().clone()))
}

/// Apply an elastic correction to a displacement record.
///
/// `coeffs` is the elastic-distortion polynomial in the load, highest
/// power first. The polynomial is evaluated at each load record and
/// subtracted from the displacement, yielding the sample displacement in
/// the displacement's original unit. Inputs may be in any commensurable
/// units; each term is converted as it is accumulated.
pub fn elastic_correction(
    load: &Quantity,
    displacement: &Quantity,
    coeffs: &[Scalar],
) -> LookResult<Quantity> {
    if coeffs.is_empty() {
        return Err(LookError::Format(
            "elastic correction needs at least one polynomial coefficient".into(),
        ));
    }
    if load.len() != displacement.len() {
        return Err(LookError::LengthMismatch {
            left: load.len(),
            right: displacement.len(),
        });
    }

    // Horner evaluation with unit bookkeeping at every step.
    let mut poly = Quantity::full(load.len(), &coeffs[0]);
    for coeff in &coeffs[1..] {
        poly = poly.mul(load)?;
        poly = poly.add_scalar(coeff)?;
    }

    displacement.sub(&poly)
}
