// ─────────────────────────────────────────────────────────────────────
// LookLab — Error Types
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Crate-wide error type shared by every LookLab crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookError {
    #[error("Undefined unit '{0}'")]
    UndefinedUnit(String),

    #[error("Cannot convert '{from}' to '{to}': dimensions differ")]
    Dimensionality { from: String, to: String },

    #[error("Column index {index} out of bounds (store holds {max} columns)")]
    ColumnOutOfBounds { index: usize, max: usize },

    #[error("Record index {index} out of bounds (column holds {len} records)")]
    RecordOutOfBounds { index: usize, len: usize },

    #[error("Array length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Malformed look file: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LookResult<T> = Result<T, LookError>;
