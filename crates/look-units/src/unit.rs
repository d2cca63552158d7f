// ─────────────────────────────────────────────────────────────────────
// LookLab — Unit
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! A resolved unit: multiplicative scale to coherent SI, an additive
//! offset (offset temperature scales only), and a dimension vector.

use std::fmt;

use look_types::error::{LookError, LookResult};

use crate::dimension::Dimension;

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    name: String,
    scale: f64,
    offset: f64,
    dims: Dimension,
}

impl Unit {
    pub fn new(name: impl Into<String>, scale: f64, dims: Dimension) -> Self {
        Unit {
            name: name.into(),
            scale,
            offset: 0.0,
            dims,
        }
    }

    /// Offset unit (degC). Offset units convert to base on quantity
    /// construction and may not appear in compound expressions.
    pub fn with_offset(name: impl Into<String>, scale: f64, offset: f64, dims: Dimension) -> Self {
        Unit {
            name: name.into(),
            scale,
            offset,
            dims,
        }
    }

    pub fn dimensionless() -> Self {
        Unit::new("dimensionless", 1.0, Dimension::NONE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn has_offset(&self) -> bool {
        self.offset != 0.0
    }

    pub fn dims(&self) -> Dimension {
        self.dims
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_none()
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dims == other.dims
    }

    /// Coherent SI base unit carrying the same dimensions.
    pub fn base(&self) -> Unit {
        Unit::new(self.dims.to_string(), 1.0, self.dims)
    }

    /// Multiplicative factor converting magnitudes in `self` to `to`.
    ///
    /// Conversions involving an offset unit are affine, not a pure scale,
    /// and are rejected here; quantity conversion applies them directly.
    pub fn conversion_factor(&self, to: &Unit) -> LookResult<f64> {
        if self.dims != to.dims {
            return Err(LookError::Dimensionality {
                from: self.name.clone(),
                to: to.name.clone(),
            });
        }
        if self.has_offset() || to.has_offset() {
            return Err(LookError::Format(format!(
                "conversion between '{}' and '{}' is affine, not a pure scale",
                self.name, to.name
            )));
        }
        Ok(self.scale / to.scale)
    }

    /// Convert one magnitude in `self` to `to`, applying offsets.
    pub fn convert(&self, value: f64, to: &Unit) -> LookResult<f64> {
        if self.dims != to.dims {
            return Err(LookError::Dimensionality {
                from: self.name.clone(),
                to: to.name.clone(),
            });
        }
        Ok((value * self.scale + self.offset - to.offset) / to.scale)
    }

    pub fn multiply(&self, other: &Unit) -> Unit {
        // Dimensionless factors of scale 1 vanish from the display name.
        if other.dims.is_none() && other.scale == 1.0 {
            return Unit::new(self.name.clone(), self.scale, self.dims);
        }
        if self.dims.is_none() && self.scale == 1.0 {
            return Unit::new(other.name.clone(), other.scale, other.dims);
        }
        Unit::new(
            format!("{} * {}", self.name, other.name),
            self.scale * other.scale,
            self.dims.mul(other.dims),
        )
    }

    pub fn divide(&self, other: &Unit) -> Unit {
        if other.dims.is_none() && other.scale == 1.0 {
            return Unit::new(self.name.clone(), self.scale, self.dims);
        }
        Unit::new(
            format!("{} / {}", self.name, other.name),
            self.scale / other.scale,
            self.dims.div(other.dims),
        )
    }

    pub fn powi(&self, n: i32) -> Unit {
        if n == 1 {
            return self.clone();
        }
        let name = if self.name.contains(' ') {
            format!("({}) ** {}", self.name, n)
        } else {
            format!("{} ** {}", self.name, n)
        };
        Unit::new(name, self.scale.powi(n), self.dims.pow(n))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
