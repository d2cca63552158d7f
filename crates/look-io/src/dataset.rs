// ─────────────────────────────────────────────────────────────────────
// LookLab — DataSet
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Ordered collection of named, united data columns.

use std::fs::File;
use std::path::Path;

use ndarray_npy::NpzWriter;

use look_types::error::LookResult;
use look_types::meta::ExperimentMeta;
use look_units::Quantity;

/// Named `Quantity` columns in insertion order.
///
/// This is the hand-off structure between the readers/interpreter and
/// downstream analysis or plotting tools.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    columns: Vec<(String, Quantity)>,
}

impl DataSet {
    pub fn new() -> Self {
        DataSet {
            columns: Vec::new(),
        }
    }

    /// Insert a column, replacing any existing column of the same name in
    /// place (the position is preserved, as later reduction steps rely on
    /// column order).
    pub fn insert(&mut self, name: impl Into<String>, quantity: Quantity) {
        let name = name.into();
        if let Some(slot) = self.columns.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = quantity;
        } else {
            self.columns.push((name, quantity));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, q)| q)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.columns.iter().map(|(n, q)| (n.as_str(), q))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Write column magnitudes to a NumPy `.npz` archive, one array per
    /// column under its channel name. Units are not embedded in the
    /// archive; pair with the unit map or the experiment metadata JSON.
    pub fn to_npz<P: AsRef<Path>>(&self, path: P) -> LookResult<()> {
        let file = File::create(path)?;
        let mut writer = NpzWriter::new(file);
        for (name, quantity) in &self.columns {
            writer
                .add_array(name.as_str(), quantity.values())
                .map_err(|e| {
                    look_types::error::LookError::Format(format!(
                        "npz write failed for column '{name}': {e}"
                    ))
                })?;
        }
        writer.finish().map_err(|e| {
            look_types::error::LookError::Format(format!("npz finish failed: {e}"))
        })?;
        Ok(())
    }

    /// Column name → unit display name, for sidecar serialization.
    pub fn unit_map(&self) -> Vec<(String, String)> {
        self.columns
            .iter()
            .map(|(n, q)| (n.clone(), q.unit().name().to_string()))
            .collect()
    }

    /// Write the JSON sidecar for an `.npz` export: the experiment header
    /// plus each column's unit, in column order.
    pub fn write_meta_json<P: AsRef<Path>>(
        &self,
        path: P,
        meta: &ExperimentMeta,
    ) -> LookResult<()> {
        let units: Vec<serde_json::Value> = self
            .columns
            .iter()
            .map(|(n, q)| serde_json::json!({ "column": n, "unit": q.unit().name() }))
            .collect();
        let doc = serde_json::json!({ "experiment": meta, "units": units });
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &doc)?;
        Ok(())
    }
}
