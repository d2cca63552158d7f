// ─────────────────────────────────────────────────────────────────────
// LookLab — Look IO
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Utilities to work with "look" style data files and associated r files.

pub mod binary;
pub mod dataset;
pub mod rfile;

pub use binary::{read_binary, read_binary_from, BinaryReadOptions, Endianness, UnknownUnits};
pub use dataset::DataSet;
pub use rfile::RFileInterpreter;
