// ─────────────────────────────────────────────────────────────────────
// LookLab — Look Types
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
pub mod column;
pub mod error;
pub mod meta;
