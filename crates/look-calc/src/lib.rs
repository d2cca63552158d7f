// ─────────────────────────────────────────────────────────────────────
// LookLab — Look Calc
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Unit-aware calculations for reducing raw experiment data.

pub mod basic;

pub use basic::{elastic_correction, remove_offset, zero, ZeroConfig, ZeroMode};
