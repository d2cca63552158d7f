// ─────────────────────────────────────────────────────────────────────
// LookLab — Quantities
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! United arrays and scalars.
//!
//! Arithmetic between quantities converts the right-hand side into the
//! left-hand side's unit; incommensurable dimensions are an error rather
//! than a silent magnitude mix. Offset temperature units are normalized
//! to kelvin on construction, so all arithmetic is purely multiplicative.

use ndarray::Array1;

use look_types::error::{LookError, LookResult};

use crate::unit::Unit;

/// A single value with a unit.
#[derive(Debug, Clone)]
pub struct Scalar {
    value: f64,
    unit: Unit,
}

impl Scalar {
    pub fn new(value: f64, unit: Unit) -> Self {
        let (value, unit) = normalize_offset_scalar(value, unit);
        Scalar { value, unit }
    }

    pub fn dimensionless(value: f64) -> Self {
        Scalar {
            value,
            unit: Unit::dimensionless(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn to(&self, unit: &Unit) -> LookResult<Scalar> {
        Ok(Scalar {
            value: self.unit.convert(self.value, unit)?,
            unit: unit.clone(),
        })
    }
}

/// An array of magnitudes with a unit.
#[derive(Debug, Clone)]
pub struct Quantity {
    values: Array1<f64>,
    unit: Unit,
}

impl Quantity {
    /// Wrap values in a unit. Offset units (degC) are converted to their
    /// base unit immediately.
    pub fn new(values: Array1<f64>, unit: Unit) -> Self {
        if unit.has_offset() {
            let scale = unit.scale();
            let offset = unit.offset();
            let values = values.mapv(|v| v * scale + offset);
            return Quantity {
                values,
                unit: unit.base(),
            };
        }
        Quantity { values, unit }
    }

    pub fn dimensionless(values: Array1<f64>) -> Self {
        Quantity {
            values,
            unit: Unit::dimensionless(),
        }
    }

    /// Constant array from a scalar.
    pub fn full(len: usize, scalar: &Scalar) -> Self {
        Quantity {
            values: Array1::from_elem(len, scalar.value()),
            unit: scalar.unit().clone(),
        }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn into_values(self) -> Array1<f64> {
        self.values
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert to another unit of the same dimensions. Conversions into
    /// an offset unit (degC) apply the affine shift, so kelvin magnitudes
    /// read back as Celsius values.
    pub fn to(&self, unit: &Unit) -> LookResult<Quantity> {
        if self.unit.has_offset() || unit.has_offset() {
            if self.unit.dims() != unit.dims() {
                return Err(LookError::Dimensionality {
                    from: self.unit.name().to_string(),
                    to: unit.name().to_string(),
                });
            }
            let (scale, offset) = (self.unit.scale(), self.unit.offset());
            let values = self
                .values
                .mapv(|v| (v * scale + offset - unit.offset()) / unit.scale());
            return Ok(Quantity {
                values,
                unit: unit.clone(),
            });
        }
        let factor = self.unit.conversion_factor(unit)?;
        Ok(Quantity {
            values: self.values.mapv(|v| v * factor),
            unit: unit.clone(),
        })
    }

    fn check_len(&self, rhs: &Quantity) -> LookResult<()> {
        if self.len() != rhs.len() {
            return Err(LookError::LengthMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        Ok(())
    }

    pub fn add(&self, rhs: &Quantity) -> LookResult<Quantity> {
        self.check_len(rhs)?;
        let rhs = rhs.to(&self.unit)?;
        Ok(Quantity {
            values: &self.values + &rhs.values,
            unit: self.unit.clone(),
        })
    }

    pub fn sub(&self, rhs: &Quantity) -> LookResult<Quantity> {
        self.check_len(rhs)?;
        let rhs = rhs.to(&self.unit)?;
        Ok(Quantity {
            values: &self.values - &rhs.values,
            unit: self.unit.clone(),
        })
    }

    pub fn mul(&self, rhs: &Quantity) -> LookResult<Quantity> {
        self.check_len(rhs)?;
        Ok(Quantity {
            values: &self.values * &rhs.values,
            unit: self.unit.multiply(&rhs.unit),
        })
    }

    pub fn div(&self, rhs: &Quantity) -> LookResult<Quantity> {
        self.check_len(rhs)?;
        Ok(Quantity {
            values: &self.values / &rhs.values,
            unit: self.unit.divide(&rhs.unit),
        })
    }

    pub fn add_scalar(&self, rhs: &Scalar) -> LookResult<Quantity> {
        let rhs = rhs.to(&self.unit)?;
        Ok(Quantity {
            values: self.values.mapv(|v| v + rhs.value()),
            unit: self.unit.clone(),
        })
    }

    pub fn sub_scalar(&self, rhs: &Scalar) -> LookResult<Quantity> {
        let rhs = rhs.to(&self.unit)?;
        Ok(Quantity {
            values: self.values.mapv(|v| v - rhs.value()),
            unit: self.unit.clone(),
        })
    }

    pub fn mul_scalar(&self, rhs: &Scalar) -> Quantity {
        Quantity {
            values: self.values.mapv(|v| v * rhs.value()),
            unit: self.unit.multiply(rhs.unit()),
        }
    }

    pub fn div_scalar(&self, rhs: &Scalar) -> Quantity {
        Quantity {
            values: self.values.mapv(|v| v / rhs.value()),
            unit: self.unit.divide(rhs.unit()),
        }
    }

    /// Raise to a power. Integer powers raise the unit as well;
    /// fractional powers require a dimensionless quantity.
    pub fn powf(&self, power: f64) -> LookResult<Quantity> {
        if power.fract() == 0.0 && power.abs() <= i32::MAX as f64 {
            let n = power as i32;
            return Ok(Quantity {
                values: self.values.mapv(|v| v.powf(power)),
                unit: self.unit.powi(n),
            });
        }
        if !self.unit.is_dimensionless() {
            return Err(LookError::Dimensionality {
                from: self.unit.name().to_string(),
                to: format!("dimensionless (fractional power {power})"),
            });
        }
        Ok(Quantity {
            values: self.values.mapv(|v| v.powf(power)),
            unit: self.unit.clone(),
        })
    }

    /// Negate the magnitudes, unit preserved.
    pub fn neg(&self) -> Quantity {
        Quantity {
            values: self.values.mapv(|v| -v),
            unit: self.unit.clone(),
        }
    }

    /// Cumulative sum over records, unit preserved.
    pub fn cumsum(&self) -> Quantity {
        let mut running = 0.0;
        let values = self.values.mapv(|v| {
            running += v;
            running
        });
        Quantity {
            values,
            unit: self.unit.clone(),
        }
    }

    /// Mean of the magnitudes over a record range, as a scalar in this
    /// quantity's unit.
    pub fn mean_range(&self, start: usize, stop: usize) -> LookResult<Scalar> {
        if start >= stop || stop > self.len() {
            return Err(LookError::RecordOutOfBounds {
                index: stop,
                len: self.len(),
            });
        }
        let slice = self.values.slice(ndarray::s![start..stop]);
        Ok(Scalar {
            value: slice.sum() / slice.len() as f64,
            unit: self.unit.clone(),
        })
    }

    /// Single record as a scalar in this quantity's unit.
    pub fn get(&self, index: usize) -> LookResult<Scalar> {
        if index >= self.len() {
            return Err(LookError::RecordOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(Scalar {
            value: self.values[index],
            unit: self.unit.clone(),
        })
    }
}

fn normalize_offset_scalar(value: f64, unit: Unit) -> (f64, Unit) {
    if unit.has_offset() {
        let base = unit.base();
        (value * unit.scale() + unit.offset(), base)
    } else {
        (value, unit)
    }
}
