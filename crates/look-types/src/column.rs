// ─────────────────────────────────────────────────────────────────────
// LookLab — Column Store
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! The Look data model: a fixed bank of 32 data columns.
//!
//! XLook operated on 32 numbered column slots; r files address columns by
//! zero-based slot index. Units are carried as opaque strings at this
//! layer, exactly as the legacy tool did; dimensional analysis happens
//! only when a store is converted to united quantities.

use ndarray::Array1;

use crate::error::{LookError, LookResult};

/// Maximum number of columns in a look file / column store.
pub const MAX_COLUMNS: usize = 32;

/// One column slot: data plus optional name and unit label.
#[derive(Debug, Clone)]
pub struct ColumnSlot {
    pub data: Array1<f64>,
    pub name: Option<String>,
    pub unit: Option<String>,
}

impl ColumnSlot {
    fn empty() -> Self {
        ColumnSlot {
            data: Array1::from_vec(Vec::new()),
            name: None,
            unit: None,
        }
    }

    /// A slot is occupied once it holds data under a name.
    pub fn is_occupied(&self) -> bool {
        self.name.is_some() && !self.data.is_empty()
    }
}

/// Fixed bank of [`MAX_COLUMNS`] column slots.
#[derive(Debug, Clone)]
pub struct ColumnStore {
    slots: Vec<ColumnSlot>,
}

impl Default for ColumnStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnStore {
    pub fn new() -> Self {
        ColumnStore {
            slots: (0..MAX_COLUMNS).map(|_| ColumnSlot::empty()).collect(),
        }
    }

    fn check_index(&self, index: usize) -> LookResult<()> {
        if index >= MAX_COLUMNS {
            return Err(LookError::ColumnOutOfBounds {
                index,
                max: MAX_COLUMNS,
            });
        }
        Ok(())
    }

    pub fn data(&self, index: usize) -> LookResult<&Array1<f64>> {
        self.check_index(index)?;
        Ok(&self.slots[index].data)
    }

    pub fn set_data(&mut self, index: usize, data: Array1<f64>) -> LookResult<()> {
        self.check_index(index)?;
        self.slots[index].data = data;
        Ok(())
    }

    pub fn name(&self, index: usize) -> LookResult<Option<&str>> {
        self.check_index(index)?;
        Ok(self.slots[index].name.as_deref())
    }

    pub fn set_name(&mut self, index: usize, name: Option<String>) -> LookResult<()> {
        self.check_index(index)?;
        self.slots[index].name = name;
        Ok(())
    }

    pub fn unit(&self, index: usize) -> LookResult<Option<&str>> {
        self.check_index(index)?;
        Ok(self.slots[index].unit.as_deref())
    }

    pub fn set_unit(&mut self, index: usize, unit: Option<String>) -> LookResult<()> {
        self.check_index(index)?;
        self.slots[index].unit = unit;
        Ok(())
    }

    /// Clear a slot entirely: empty data, no name, no unit.
    pub fn clear_column(&mut self, index: usize) -> LookResult<()> {
        self.check_index(index)?;
        self.slots[index] = ColumnSlot::empty();
        Ok(())
    }

    /// Delete a record range from every non-empty column.
    ///
    /// `stop` of `None` deletes through the last record (the XLook `-1`
    /// convention). Ranges are clamped to each column's length, so columns
    /// shorter than `start` are left untouched.
    pub fn delete_rows(&mut self, start: usize, stop: Option<usize>) {
        for slot in &mut self.slots {
            let len = slot.data.len();
            if len == 0 {
                continue;
            }
            let lo = start.min(len);
            let hi = stop.unwrap_or(len).min(len);
            if lo >= hi {
                continue;
            }
            let mut kept = Vec::with_capacity(len - (hi - lo));
            kept.extend(slot.data.iter().take(lo).copied());
            kept.extend(slot.data.iter().skip(hi).copied());
            slot.data = Array1::from_vec(kept);
        }
    }

    /// Iterate occupied slots in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ColumnSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_occupied())
    }
}
