// ─────────────────────────────────────────────────────────────────────
// LookLab — Look Binary Reader
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Reader for the legacy look binary file format.
//!
//! Layout, as written by XLook and the lab acquisition programs:
//! - 20-byte NUL-padded experiment name
//! - header words, always big endian: record count, column count, and the
//!   legacy `swp`/`dtime` fields (i32 each)
//! - 32 fixed channel blocks: 13-byte name, 13-byte unit string, an
//!   unused i32, a 50-byte unused comment, and the channel's element
//!   count (i32, big endian). Blank channels are named `no_val...`.
//! - the data section: per retained column, `element count` f64 records
//!   in the native endianness of the acquisition machine (little on
//!   modern hardware, big for old PowerPC-era files).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use ndarray::{Array1, Array2};
use tracing::warn;

use look_types::error::{LookError, LookResult};
use look_types::meta::ExperimentMeta;
use look_units::{Quantity, Unit, UnitRegistry};

use crate::dataset::DataSet;

const NAME_LEN: usize = 20;
const CHANNEL_BLOCKS: usize = 32;
const CHANNEL_NAME_LEN: usize = 13;
const CHANNEL_UNIT_LEN: usize = 13;
const CHANNEL_COMMENT_LEN: usize = 50;
const BLANK_CHANNEL_PREFIX: &str = "no_val";

/// Endianness of the data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

/// Policy for unit strings the registry cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownUnits {
    /// Warn and assign dimensionless (what XLook effectively did).
    #[default]
    Warn,
    /// Fail the read.
    Error,
}

/// Options for [`read_binary`].
#[derive(Debug, Clone)]
pub struct BinaryReadOptions {
    pub data_endianness: Endianness,
    pub unknown_units: UnknownUnits,
    /// Trim whitespace from header names and unit strings.
    pub clean_header: bool,
}

impl Default for BinaryReadOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryReadOptions {
    pub fn new() -> Self {
        BinaryReadOptions {
            data_endianness: Endianness::Little,
            unknown_units: UnknownUnits::Warn,
            clean_header: true,
        }
    }
}

/// Read a look binary file into united columns plus header metadata.
pub fn read_binary<P: AsRef<Path>>(
    path: P,
    options: &BinaryReadOptions,
    registry: &UnitRegistry,
) -> LookResult<(DataSet, ExperimentMeta)> {
    let file = File::open(path)?;
    read_binary_from(BufReader::new(file), options, registry)
}

/// Read the look binary format from any byte source.
pub fn read_binary_from<R: Read>(
    mut reader: R,
    options: &BinaryReadOptions,
    registry: &UnitRegistry,
) -> LookResult<(DataSet, ExperimentMeta)> {
    let mut name = read_fixed_string(&mut reader, NAME_LEN)?;
    if options.clean_header {
        name = name.trim().to_string();
    }

    let num_recs = read_count(&mut reader, "record count")?;
    let num_cols = read_count(&mut reader, "column count")?;
    let swp = reader.read_i32::<BigEndian>()?;
    let dtime = reader.read_i32::<BigEndian>()?;

    if num_cols > CHANNEL_BLOCKS {
        return Err(LookError::Format(format!(
            "header declares {num_cols} columns, format allows at most {CHANNEL_BLOCKS}"
        )));
    }

    // Fixed bank of 32 channel headers; only those with real names carry
    // data in the data section.
    let mut channels: Vec<(String, String, usize)> = Vec::new();
    for _ in 0..CHANNEL_BLOCKS {
        let mut ch_name = read_fixed_string(&mut reader, CHANNEL_NAME_LEN)?;
        let mut ch_unit = read_fixed_string(&mut reader, CHANNEL_UNIT_LEN)?;
        let _unused = reader.read_i32::<BigEndian>()?;
        skip_bytes(&mut reader, CHANNEL_COMMENT_LEN)?;
        let nelem = read_count(&mut reader, "channel element count")?;

        if options.clean_header {
            ch_name = ch_name.trim().to_string();
            ch_unit = ch_unit.trim().to_string();
        }
        if ch_name.starts_with(BLANK_CHANNEL_PREFIX) {
            continue;
        }
        channels.push((ch_name, ch_unit, nelem));
    }

    if channels.len() != num_cols {
        return Err(LookError::Format(format!(
            "header declares {num_cols} columns but {} channels are named",
            channels.len()
        )));
    }

    // Data section is column major: all records of column 0, then 1, ...
    let mut data = Array2::<f64>::zeros((num_recs, num_cols));
    for (col, (_, _, nelem)) in channels.iter().enumerate() {
        if *nelem > num_recs {
            return Err(LookError::Format(format!(
                "channel {col} holds {nelem} records, header allows {num_recs}"
            )));
        }
        for row in 0..*nelem {
            data[[row, col]] = match options.data_endianness {
                Endianness::Little => reader.read_f64::<LittleEndian>()?,
                Endianness::Big => reader.read_f64::<BigEndian>()?,
            };
        }
    }

    let mut dataset = DataSet::new();
    let rec_num = Array1::from_iter((0..num_recs).map(|i| i as f64));
    dataset.insert("rec_num", Quantity::dimensionless(rec_num));

    for (col, (ch_name, ch_unit, _)) in channels.iter().enumerate() {
        let unit = resolve_unit(registry, ch_unit, options.unknown_units)?;
        let values = data.column(col).to_owned();
        dataset.insert(ch_name.clone(), Quantity::new(values, unit));
    }

    let meta = ExperimentMeta {
        name,
        records: num_recs,
        columns: num_cols,
        swp,
        dtime,
    };
    Ok((dataset, meta))
}

/// Resolve a header unit string under the configured unknown-unit policy.
pub(crate) fn resolve_unit(
    registry: &UnitRegistry,
    unit_str: &str,
    policy: UnknownUnits,
) -> LookResult<Unit> {
    match registry.parse(unit_str) {
        Ok(unit) => Ok(unit),
        Err(e) => match policy {
            UnknownUnits::Warn => {
                warn!("unknown unit '{unit_str}' - assigning dimensionless");
                Ok(Unit::dimensionless())
            }
            UnknownUnits::Error => Err(e),
        },
    }
}

fn read_fixed_string<R: Read>(reader: &mut R, len: usize) -> LookResult<String> {
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    let end = buf.iter().position(|&b| b == 0).unwrap_or(len);
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}

fn skip_bytes<R: Read>(reader: &mut R, len: usize) -> LookResult<()> {
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    Ok(())
}

fn read_count<R: Read>(reader: &mut R, what: &str) -> LookResult<usize> {
    let value = reader.read_i32::<BigEndian>()?;
    usize::try_from(value)
        .map_err(|_| LookError::Format(format!("negative {what} in header: {value}")))
}
