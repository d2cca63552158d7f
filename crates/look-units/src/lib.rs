// ─────────────────────────────────────────────────────────────────────
// LookLab — Look Units
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Runtime unit support for lab data reduction.
//!
//! Channel units arrive as free-form strings in legacy file headers and r
//! files, so units must be resolved at runtime rather than in the type
//! system. The registry ships the units that appear in rock-mechanics
//! look files and can be extended with lab-specific definitions.

pub mod dimension;
pub mod parse;
pub mod quantity;
pub mod registry;
pub mod testing;
pub mod unit;

pub use dimension::Dimension;
pub use quantity::{Quantity, Scalar};
pub use registry::UnitRegistry;
pub use unit::Unit;
