// ─────────────────────────────────────────────────────────────────────
// LookLab — XLook R-File Interpreter
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Interpreter for legacy XLook "r file" reduction scripts.
//!
//! Decades of experiments were reduced with these scripts, so the
//! interpreter reproduces XLook's forgiving behavior: unknown commands,
//! wrong argument counts, and malformed numeric fields are warned about
//! and skipped, and processing continues. Only real I/O failures abort a
//! run. Units are opaque strings at this layer; dimensional analysis
//! happens when the finished store is converted with [`RFileInterpreter::into_dataset`].

use std::path::Path;

use ndarray::Array1;
use tracing::warn;

use look_calc::{elastic_correction, remove_offset, zero, ZeroConfig};
use look_types::column::{ColumnStore, MAX_COLUMNS};
use look_types::error::LookResult;
use look_units::{Quantity, Scalar, UnitRegistry};

use crate::binary::{read_binary, resolve_unit, BinaryReadOptions, UnknownUnits};
use crate::dataset::DataSet;

/// Second operand of a `math` / `math_int` command.
enum Operand {
    Column(Array1<f64>),
    Scalar(f64),
}

pub struct RFileInterpreter {
    store: ColumnStore,
    registry: UnitRegistry,
    read_options: BinaryReadOptions,
}

impl Default for RFileInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl RFileInterpreter {
    pub fn new() -> Self {
        RFileInterpreter {
            store: ColumnStore::new(),
            registry: UnitRegistry::default(),
            read_options: BinaryReadOptions::new(),
        }
    }

    /// Interpreter with a custom registry (lab-specific unit symbols).
    pub fn with_registry(registry: UnitRegistry) -> Self {
        RFileInterpreter {
            store: ColumnStore::new(),
            registry,
            read_options: BinaryReadOptions::new(),
        }
    }

    /// Options used by the `read` command.
    pub fn set_read_options(&mut self, options: BinaryReadOptions) {
        self.read_options = options;
    }

    pub fn store(&self) -> &ColumnStore {
        &self.store
    }

    /// Run an r file. An `end` command terminates the run early.
    pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> LookResult<()> {
        let text = std::fs::read_to_string(path)?;
        for raw in text.lines() {
            // Inline comments: keep only the part before '#'.
            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            if line.trim() == "end" {
                return Ok(());
            }
            self.run_line(line)?;
        }
        Ok(())
    }

    /// Parse and execute one r-file command line.
    pub fn run_line(&mut self, line: &str) -> LookResult<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        // Commas were never part of the syntax but appear in old files;
        // XLook ignored them.
        let cleaned = line.replace(',', "");
        let parts: Vec<&str> = cleaned.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(());
        };

        match command {
            "math" => self.cmd_math(&parts, line),
            "math_int" => self.cmd_math_int(&parts, line),
            "summation" => self.cmd_summation(&parts, line),
            "power" => self.cmd_power(&parts, line),
            "zero" => self.cmd_zero(&parts, line),
            "ec" => self.cmd_ec(&parts, line),
            "offset_int" => self.cmd_offset_int(&parts, line),
            "r_col" => self.cmd_r_col(&parts, line),
            "r_row" => self.cmd_r_row(&parts, line),
            "read" => return self.cmd_read(&parts, line),
            // Structural commands, accepted and ignored.
            "begin" | "com_file" => {}
            _ => warn!("invalid command '{line}', ignoring and continuing"),
        }
        Ok(())
    }

    /// Convert the column store into united quantities.
    ///
    /// Stored unit strings are resolved against the registry; unresolvable
    /// ones follow `policy`, exactly as in the binary reader.
    pub fn into_dataset(&self, policy: UnknownUnits) -> LookResult<DataSet> {
        let mut dataset = DataSet::new();
        for (_, slot) in self.store.occupied() {
            let name = slot.name.as_deref().unwrap_or_default();
            let unit = resolve_unit(&self.registry, slot.unit.as_deref().unwrap_or(""), policy)?;
            dataset.insert(name, Quantity::new(slot.data.clone(), unit));
        }
        Ok(dataset)
    }

    // ── command implementations ──────────────────────────────────────

    /// `math x_col op y type out_col name unit`, where `type` is `:` for
    /// column-by-column math and `=` for column-by-scalar.
    fn cmd_math(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 8, line) {
            return;
        }
        let (Some(x_col), Some(out_col)) = (parse_index(parts[1], line), parse_index(parts[5], line))
        else {
            return;
        };
        let Some(result) = self.eval_math(x_col, parts[2], parts[3], parts[4], line) else {
            return;
        };
        self.write_column(out_col, result, parts[6], parts[7], line);
    }

    /// `math_int x_col op y type out_col start stop name unit`: like
    /// `math`, but the result only replaces the interval `start..stop` of
    /// the x column.
    fn cmd_math_int(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 10, line) {
            return;
        }
        let (Some(x_col), Some(out_col)) = (parse_index(parts[1], line), parse_index(parts[5], line))
        else {
            return;
        };
        let (Some(start), Some(stop)) = (parse_index(parts[6], line), parse_index(parts[7], line))
        else {
            return;
        };
        let Some(result) = self.eval_math(x_col, parts[2], parts[3], parts[4], line) else {
            return;
        };
        let Some(mut base) = self.column(x_col, line) else {
            return;
        };
        let hi = stop.min(base.len());
        let lo = start.min(hi);
        for i in lo..hi {
            base[i] = result[i];
        }
        self.write_column(out_col, base, parts[8], parts[9], line);
    }

    /// `summation col out_col name unit`: cumulative sum.
    fn cmd_summation(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 5, line) {
            return;
        }
        let (Some(in_col), Some(out_col)) = (parse_index(parts[1], line), parse_index(parts[2], line))
        else {
            return;
        };
        let Some(data) = self.column(in_col, line) else {
            return;
        };
        let mut running = 0.0;
        let summed = data.mapv(|v| {
            running += v;
            running
        });
        self.write_column(out_col, summed, parts[3], parts[4], line);
    }

    /// `power p col out_col name unit`: raise a column to a power.
    fn cmd_power(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 6, line) {
            return;
        }
        let Some(power) = parse_float(parts[1], line) else {
            return;
        };
        let (Some(in_col), Some(out_col)) = (parse_index(parts[2], line), parse_index(parts[3], line))
        else {
            return;
        };
        let Some(data) = self.column(in_col, line) else {
            return;
        };
        self.write_column(out_col, data.mapv(|v| v.powf(power)), parts[4], parts[5], line);
    }

    /// `zero col record`: zero a column at a record, in place.
    fn cmd_zero(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 3, line) {
            return;
        }
        let (Some(col), Some(record)) = (parse_index(parts[1], line), parse_index(parts[2], line))
        else {
            return;
        };
        let Some(data) = self.column(col, line) else {
            return;
        };
        match zero(
            &Quantity::dimensionless(data),
            record,
            &ZeroConfig::default(),
        ) {
            Ok(result) => {
                // Name and units are untouched.
                let _ = self.store.set_data(col, result.into_values());
            }
            Err(e) => warn!("'{line}' failed ({e}), ignoring and continuing"),
        }
    }

    /// `ec disp_col load_col out_col first last slope name unit`: linear
    /// elastic correction of a displacement column over a row interval.
    /// `slope` is the apparatus stiffness; its reciprocal multiplies the
    /// load. Raw magnitudes only, as in XLook.
    fn cmd_ec(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 9, line) {
            return;
        }
        let (Some(disp_col), Some(load_col), Some(out_col)) = (
            parse_index(parts[1], line),
            parse_index(parts[2], line),
            parse_index(parts[3], line),
        ) else {
            return;
        };
        let (Some(first), Some(last)) = (parse_index(parts[4], line), parse_index(parts[5], line))
        else {
            return;
        };
        let Some(stiffness) = parse_float(parts[6], line) else {
            return;
        };
        if stiffness == 0.0 {
            warn!("zero stiffness in '{line}', ignoring and continuing");
            return;
        }
        let (Some(disp), Some(load)) = (self.column(disp_col, line), self.column(load_col, line))
        else {
            return;
        };

        let disp_q = Quantity::dimensionless(disp.clone());
        let load_q = Quantity::dimensionless(load);
        let coeffs = [
            Scalar::dimensionless(1.0 / stiffness),
            Scalar::dimensionless(0.0),
        ];
        let corrected = elastic_correction(&load_q, &disp_q, &coeffs)
            .and_then(|elastic| disp_q.sub(&elastic));
        match corrected {
            Ok(corrected) => {
                let mut out = disp;
                let hi = last.min(out.len());
                let lo = first.min(hi);
                for i in lo..hi {
                    out[i] = corrected.values()[i];
                }
                self.write_column(out_col, out, parts[7], parts[8], line);
            }
            Err(e) => warn!("'{line}' failed ({e}), ignoring and continuing"),
        }
    }

    /// `offset_int col start stop y|n`: remove an offset over an
    /// interval; `y` flattens the records in between.
    fn cmd_offset_int(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 5, line) {
            return;
        }
        let (Some(col), Some(start), Some(stop)) = (
            parse_index(parts[1], line),
            parse_index(parts[2], line),
            parse_index(parts[3], line),
        ) else {
            return;
        };
        let set_between = match parts[4].to_ascii_lowercase().as_str() {
            "y" => true,
            "n" => false,
            other => {
                warn!("bad flag '{other}' in '{line}', ignoring and continuing");
                return;
            }
        };
        let Some(data) = self.column(col, line) else {
            return;
        };
        match remove_offset(&Quantity::dimensionless(data), start, stop, set_between) {
            Ok(result) => {
                let _ = self.store.set_data(col, result.into_values());
            }
            Err(e) => warn!("'{line}' failed ({e}), ignoring and continuing"),
        }
    }

    /// `r_col col`: clear a column slot.
    fn cmd_r_col(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 2, line) {
            return;
        }
        let Some(col) = parse_index(parts[1], line) else {
            return;
        };
        if self.store.clear_column(col).is_err() {
            warn!("column {col} out of range in '{line}', ignoring and continuing");
        }
    }

    /// `r_row start stop`: delete a record range from every column;
    /// `stop` of -1 means through the last record.
    fn cmd_r_row(&mut self, parts: &[&str], line: &str) {
        if !check_args(parts, 3, line) {
            return;
        }
        let Some(start) = parse_index(parts[1], line) else {
            return;
        };
        let stop = match parts[2].parse::<i64>() {
            Ok(-1) => None,
            Ok(v) if v >= 0 => Some(v as usize),
            _ => {
                warn!("bad record index '{}' in '{line}', ignoring and continuing", parts[2]);
                return;
            }
        };
        self.store.delete_rows(start, stop);
    }

    /// `read filename`: load a look binary file into the column store.
    ///
    /// Slot 0 holds `rec_num`, matching r-file column numbering, so a
    /// maximal 32-channel file overflows the store and its last channel
    /// is dropped with a warning.
    fn cmd_read(&mut self, parts: &[&str], line: &str) -> LookResult<()> {
        if !check_args(parts, 2, line) {
            return Ok(());
        }
        let (dataset, _) = read_binary(parts[1], &self.read_options, &self.registry)?;
        for (i, (name, quantity)) in dataset.iter().enumerate() {
            if i >= MAX_COLUMNS {
                warn!("file in '{line}' holds more than {MAX_COLUMNS} columns, extra ignored");
                break;
            }
            self.store.set_data(i, quantity.values().clone())?;
            self.store.set_name(i, Some(name.to_string()))?;
            self.store
                .set_unit(i, Some(quantity.unit().name().to_string()))?;
        }
        Ok(())
    }

    // ── helpers ──────────────────────────────────────────────────────

    /// Column data by slot index, warning on anything unusable.
    fn column(&self, index: usize, line: &str) -> Option<Array1<f64>> {
        match self.store.data(index) {
            Ok(data) if !data.is_empty() => Some(data.clone()),
            Ok(_) => {
                warn!("column {index} is empty in '{line}', ignoring and continuing");
                None
            }
            Err(_) => {
                warn!("column {index} out of range in '{line}', ignoring and continuing");
                None
            }
        }
    }

    /// Shared evaluation for `math` / `math_int`.
    fn eval_math(
        &self,
        x_col: usize,
        op: &str,
        y: &str,
        math_type: &str,
        line: &str,
    ) -> Option<Array1<f64>> {
        let x = self.column(x_col, line)?;
        let operand = match math_type {
            ":" => {
                let y_col = parse_index(y, line)?;
                let y_data = self.column(y_col, line)?;
                if y_data.len() != x.len() {
                    warn!(
                        "column lengths differ ({} vs {}) in '{line}', ignoring and continuing",
                        x.len(),
                        y_data.len()
                    );
                    return None;
                }
                Operand::Column(y_data)
            }
            "=" => Operand::Scalar(parse_float(y, line)?),
            other => {
                warn!("bad math type '{other}' in '{line}', ignoring and continuing");
                return None;
            }
        };

        let result = match (op, operand) {
            ("*", Operand::Column(y)) => &x * &y,
            ("/", Operand::Column(y)) => &x / &y,
            ("+", Operand::Column(y)) => &x + &y,
            ("-", Operand::Column(y)) => &x - &y,
            ("*", Operand::Scalar(s)) => x.mapv(|v| v * s),
            ("/", Operand::Scalar(s)) => x.mapv(|v| v / s),
            ("+", Operand::Scalar(s)) => x.mapv(|v| v + s),
            ("-", Operand::Scalar(s)) => x.mapv(|v| v - s),
            (other, _) => {
                warn!("bad operator '{other}' in '{line}', ignoring and continuing");
                return None;
            }
        };
        Some(result)
    }

    /// Store a result column with its new name and unit label.
    fn write_column(&mut self, index: usize, data: Array1<f64>, name: &str, unit: &str, line: &str) {
        if self.store.set_data(index, data).is_err() {
            warn!("column {index} out of range in '{line}', ignoring and continuing");
            return;
        }
        let _ = self.store.set_name(index, Some(name.to_string()));
        let _ = self.store.set_unit(index, Some(unit.to_string()));
    }
}

/// Check the whitespace-split argument count (the command word counts).
fn check_args(parts: &[&str], expected: usize, line: &str) -> bool {
    if parts.len() != expected {
        warn!(
            "'{line}' expected {expected} fields, got {}, ignoring and continuing",
            parts.len()
        );
        return false;
    }
    true
}

fn parse_index(token: &str, line: &str) -> Option<usize> {
    match token.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("bad index '{token}' in '{line}', ignoring and continuing");
            None
        }
    }
}

fn parse_float(token: &str, line: &str) -> Option<f64> {
    match token.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("bad number '{token}' in '{line}', ignoring and continuing");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Interpreter preloaded with two columns, as after a `read`.
    fn loaded() -> RFileInterpreter {
        let mut interp = RFileInterpreter::new();
        interp
            .store
            .set_data(0, array![0.0, 1.0, 2.0, 3.0, 4.0])
            .unwrap();
        interp.store.set_name(0, Some("Time".into())).unwrap();
        interp.store.set_unit(0, Some("s".into())).unwrap();
        interp
            .store
            .set_data(1, array![10.0, 20.0, 30.0, 40.0, 50.0])
            .unwrap();
        interp.store.set_name(1, Some("Load".into())).unwrap();
        interp.store.set_unit(1, Some("kN".into())).unwrap();
        interp
    }

    #[test]
    fn test_math_column_by_scalar() {
        let mut interp = loaded();
        interp.run_line("math 1 * 2 = 5 DoubleLoad kN").unwrap();
        assert_eq!(
            interp.store.data(5).unwrap().to_vec(),
            vec![20.0, 40.0, 60.0, 80.0, 100.0]
        );
        assert_eq!(interp.store.name(5).unwrap(), Some("DoubleLoad"));
        assert_eq!(interp.store.unit(5).unwrap(), Some("kN"));
    }

    #[test]
    fn test_math_column_by_column() {
        let mut interp = loaded();
        interp.run_line("math 1 / 0 : 6 Rate kN/s").unwrap();
        let rate = interp.store.data(6).unwrap();
        assert!(rate[0].is_infinite()); // 10 / 0
        assert!((rate[1] - 20.0).abs() < 1e-12);
        assert!((rate[4] - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_math_commas_are_stripped() {
        let mut interp = loaded();
        interp.run_line("math 1, * 2, = 5, DoubleLoad, kN").unwrap();
        assert_eq!(interp.store.name(5).unwrap(), Some("DoubleLoad"));
    }

    #[test]
    fn test_math_wrong_arg_count_is_skipped() {
        let mut interp = loaded();
        interp.run_line("math 1 * 2").unwrap();
        assert!(interp.store.data(2).unwrap().is_empty());
    }

    #[test]
    fn test_math_bad_operator_is_skipped() {
        let mut interp = loaded();
        interp.run_line("math 1 % 2 = 5 Mod kN").unwrap();
        assert!(interp.store.data(5).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_command_keeps_running() {
        let mut interp = loaded();
        interp.run_line("strain 0 1 2 3").unwrap();
        interp.run_line("math 1 + 0 : 4 Sum kN").unwrap();
        assert_eq!(interp.store.name(4).unwrap(), Some("Sum"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let mut interp = loaded();
        interp.run_line("# full line comment").unwrap();
        interp.run_line("   ").unwrap();
        interp.run_line("begin").unwrap();
        interp.run_line("com_file").unwrap();
        assert_eq!(interp.store.occupied().count(), 2);
    }

    #[test]
    fn test_math_int_replaces_interval_only() {
        let mut interp = loaded();
        interp.run_line("math_int 1 * 2 = 3 1 3 Scaled kN").unwrap();
        assert_eq!(
            interp.store.data(3).unwrap().to_vec(),
            vec![10.0, 40.0, 60.0, 40.0, 50.0]
        );
        assert_eq!(interp.store.name(3).unwrap(), Some("Scaled"));
    }

    #[test]
    fn test_summation() {
        let mut interp = loaded();
        interp.run_line("summation 1 7 CumLoad kN").unwrap();
        assert_eq!(
            interp.store.data(7).unwrap().to_vec(),
            vec![10.0, 30.0, 60.0, 100.0, 150.0]
        );
    }

    #[test]
    fn test_power() {
        let mut interp = loaded();
        interp.run_line("power 2 0 8 TimeSq s**2").unwrap();
        assert_eq!(
            interp.store.data(8).unwrap().to_vec(),
            vec![0.0, 1.0, 4.0, 9.0, 16.0]
        );
    }

    #[test]
    fn test_zero_command_in_place() {
        let mut interp = loaded();
        interp.run_line("zero 1 2").unwrap();
        assert_eq!(
            interp.store.data(1).unwrap().to_vec(),
            vec![-20.0, -10.0, 0.0, 10.0, 20.0]
        );
        // Name and unit untouched.
        assert_eq!(interp.store.name(1).unwrap(), Some("Load"));
        assert_eq!(interp.store.unit(1).unwrap(), Some("kN"));
    }

    #[test]
    fn test_zero_bad_record_is_skipped() {
        let mut interp = loaded();
        interp.run_line("zero 1 99").unwrap();
        assert_eq!(
            interp.store.data(1).unwrap().to_vec(),
            vec![10.0, 20.0, 30.0, 40.0, 50.0]
        );
    }

    #[test]
    fn test_ec_command() {
        let mut interp = RFileInterpreter::new();
        interp
            .store
            .set_data(0, array![1.0, 5.0, 6.0, 4.0])
            .unwrap();
        interp.store.set_name(0, Some("Disp".into())).unwrap();
        interp
            .store
            .set_data(1, array![10.0, 20.0, 30.0, 40.0])
            .unwrap();
        interp.store.set_name(1, Some("Load".into())).unwrap();

        // Stiffness 10 -> records in [1, 3) become load / 10.
        interp.run_line("ec 0 1 2 1 3 10 ec_disp micron").unwrap();
        assert_eq!(
            interp.store.data(2).unwrap().to_vec(),
            vec![1.0, 2.0, 3.0, 4.0]
        );
        assert_eq!(interp.store.name(2).unwrap(), Some("ec_disp"));
    }

    #[test]
    fn test_offset_int_command() {
        let mut interp = RFileInterpreter::new();
        interp
            .store
            .set_data(0, array![0.0, 1.0, 2.0, 4.0, 4.0, 10.0, 10.0, 11.0])
            .unwrap();
        interp.store.set_name(0, Some("Disp".into())).unwrap();

        interp.run_line("offset_int 0 4 6 y").unwrap();
        assert_eq!(
            interp.store.data(0).unwrap().to_vec(),
            vec![0.0, 1.0, 2.0, 4.0, 4.0, 4.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_r_col_clears_slot() {
        let mut interp = loaded();
        interp.run_line("r_col 1").unwrap();
        assert!(interp.store.data(1).unwrap().is_empty());
        assert!(interp.store.name(1).unwrap().is_none());
        assert!(interp.store.unit(1).unwrap().is_none());
    }

    #[test]
    fn test_r_row_range() {
        let mut interp = loaded();
        interp.run_line("r_row 1 3").unwrap();
        assert_eq!(
            interp.store.data(0).unwrap().to_vec(),
            vec![0.0, 3.0, 4.0]
        );
        assert_eq!(
            interp.store.data(1).unwrap().to_vec(),
            vec![10.0, 40.0, 50.0]
        );
    }

    #[test]
    fn test_r_row_minus_one_deletes_to_end() {
        let mut interp = loaded();
        interp.run_line("r_row 2 -1").unwrap();
        assert_eq!(interp.store.data(0).unwrap().to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_into_dataset_resolves_units() {
        let interp = loaded();
        let dataset = interp.into_dataset(UnknownUnits::Warn).unwrap();
        let names: Vec<&str> = dataset.names().collect();
        assert_eq!(names, vec!["Time", "Load"]);
        let load = dataset.get("Load").unwrap();
        assert!((load.unit().scale() - 1e3).abs() < 1e-9);
    }

    #[test]
    fn test_into_dataset_unknown_unit_policies() {
        let mut interp = loaded();
        interp.store.set_unit(1, Some("mcrons".into())).unwrap();

        let warned = interp.into_dataset(UnknownUnits::Warn).unwrap();
        assert!(warned.get("Load").unwrap().unit().is_dimensionless());

        assert!(interp.into_dataset(UnknownUnits::Error).is_err());
    }
}
