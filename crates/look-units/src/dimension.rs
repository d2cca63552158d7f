// ─────────────────────────────────────────────────────────────────────
// LookLab — Dimensions
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Exponent vectors over the seven SI base dimensions.

use std::fmt;

/// Base dimension axes, in SI order.
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOSITY: usize = 6;

/// SI base unit symbols corresponding to each axis.
const BASE_SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "mol", "cd"];

/// Integer exponent vector over the SI base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimension {
    exps: [i32; 7],
}

impl Dimension {
    pub const NONE: Dimension = Dimension { exps: [0; 7] };

    /// Single base dimension with exponent 1.
    pub fn base(axis: usize) -> Self {
        let mut exps = [0; 7];
        exps[axis] = 1;
        Dimension { exps }
    }

    pub fn from_exps(exps: [i32; 7]) -> Self {
        Dimension { exps }
    }

    pub fn is_none(&self) -> bool {
        self.exps.iter().all(|&e| e == 0)
    }

    pub fn mul(self, other: Self) -> Self {
        let mut exps = [0; 7];
        for i in 0..7 {
            exps[i] = self.exps[i] + other.exps[i];
        }
        Dimension { exps }
    }

    pub fn div(self, other: Self) -> Self {
        let mut exps = [0; 7];
        for i in 0..7 {
            exps[i] = self.exps[i] - other.exps[i];
        }
        Dimension { exps }
    }

    pub fn pow(self, n: i32) -> Self {
        let mut exps = [0; 7];
        for i in 0..7 {
            exps[i] = self.exps[i] * n;
        }
        Dimension { exps }
    }
}

impl fmt::Display for Dimension {
    /// Render as SI base symbols, e.g. `m kg s^-2`; `1` when dimensionless.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "1");
        }
        let mut first = true;
        for (i, &e) in self.exps.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if e == 1 {
                write!(f, "{}", BASE_SYMBOLS[i])?;
            } else {
                write!(f, "{}^{}", BASE_SYMBOLS[i], e)?;
            }
        }
        Ok(())
    }
}
