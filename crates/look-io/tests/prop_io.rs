// ─────────────────────────────────────────────────────────────────────
// LookLab — Property-Based Tests for Look IO
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Covers: interpreter tolerance of arbitrary script lines, binary
//! reader behavior on truncated or garbage input.

use std::io::Cursor;

use look_io::{read_binary_from, BinaryReadOptions, RFileInterpreter};
use look_units::UnitRegistry;
use proptest::prelude::*;

proptest! {
    /// Any printable line that is not a `read` command is tolerated:
    /// the interpreter warns and continues, it never errors or panics.
    #[test]
    fn arbitrary_lines_never_abort(line in "[ -~]{0,80}") {
        prop_assume!(!line.replace(',', "").trim_start().starts_with("read"));
        let mut interp = RFileInterpreter::new();
        prop_assert!(interp.run_line(&line).is_ok());
    }

    /// Truncated or garbage byte streams produce an error, not a panic.
    /// 512 bytes is far short of the fixed 2724-byte header.
    #[test]
    fn garbage_input_is_an_error(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let result = read_binary_from(
            Cursor::new(bytes),
            &BinaryReadOptions::new(),
            &UnitRegistry::default(),
        );
        prop_assert!(result.is_err());
    }
}
