// ─────────────────────────────────────────────────────────────────────
// LookLab — Experiment Metadata
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Header metadata carried by look binary files.

use serde::{Deserialize, Serialize};

/// Metadata from the fixed header of a look binary file.
///
/// `swp` and `dtime` are legacy header words no longer written with
/// meaningful values by modern acquisition systems; they are preserved
/// for provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentMeta {
    pub name: String,
    pub records: usize,
    pub columns: usize,
    pub swp: i32,
    pub dtime: i32,
}
