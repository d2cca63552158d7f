// ─────────────────────────────────────────────────────────────────────
// LookLab — Unit Registry
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Registry mapping unit symbols and aliases to resolved units.
//!
//! The default table carries the units that show up in look file headers
//! and r files from rock-mechanics labs: SI length/force/pressure ladders,
//! legacy US gear (psi, lbf), voltages from transducers, and percent.
//! Lab-specific symbols can be added programmatically or from a JSON
//! definitions file.

use std::collections::HashMap;
use std::path::Path;

use ndarray::Array1;
use serde::Deserialize;

use look_types::error::{LookError, LookResult};

use crate::dimension::{Dimension, AMOUNT, CURRENT, LENGTH, LUMINOSITY, MASS, TEMPERATURE, TIME};
use crate::parse::parse_expression;
use crate::quantity::{Quantity, Scalar};
use crate::unit::Unit;

/// One entry of a JSON unit-definitions file.
///
/// The new unit is `scale * expression`, e.g.
/// `{"symbol": "kip", "aliases": ["kips"], "scale": 1000.0, "expression": "lbf"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitDefinition {
    pub symbol: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default = "default_scale")]
    pub scale: f64,
    pub expression: String,
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        let mut reg = UnitRegistry {
            units: HashMap::new(),
        };
        reg.populate_defaults();
        reg
    }
}

impl UnitRegistry {
    /// Registry with no definitions at all. Most callers want `default()`.
    pub fn empty() -> Self {
        UnitRegistry {
            units: HashMap::new(),
        }
    }

    /// Register a unit under its display symbol plus any aliases.
    pub fn define(&mut self, unit: Unit, aliases: &[&str]) {
        self.units.insert(unit.name().to_string(), unit.clone());
        for alias in aliases {
            self.units.insert((*alias).to_string(), unit.clone());
        }
    }

    /// Resolve a single symbol (no expression syntax).
    pub fn get(&self, symbol: &str) -> LookResult<Unit> {
        self.units
            .get(symbol)
            .cloned()
            .ok_or_else(|| LookError::UndefinedUnit(symbol.to_string()))
    }

    /// Resolve a unit expression, e.g. `mm/kN**2`, `m2 s-2`, `%`.
    ///
    /// Empty expressions resolve to dimensionless, matching how blank
    /// header fields are treated.
    pub fn parse(&self, expression: &str) -> LookResult<Unit> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Ok(Unit::dimensionless());
        }
        parse_expression(self, trimmed)
    }

    /// Build a united quantity from raw values and a unit expression.
    pub fn quantity(&self, values: Array1<f64>, expression: &str) -> LookResult<Quantity> {
        Ok(Quantity::new(values, self.parse(expression)?))
    }

    /// Build a united scalar from a value and a unit expression.
    pub fn scalar(&self, value: f64, expression: &str) -> LookResult<Scalar> {
        Ok(Scalar::new(value, self.parse(expression)?))
    }

    /// Load additional definitions from a JSON file.
    ///
    /// Returns the number of definitions added. Expressions are resolved
    /// against the registry as it stands, so later entries may build on
    /// earlier ones.
    pub fn load_definitions<P: AsRef<Path>>(&mut self, path: P) -> LookResult<usize> {
        let contents = std::fs::read_to_string(path)?;
        let defs: Vec<UnitDefinition> = serde_json::from_str(&contents)?;
        let count = defs.len();
        for def in defs {
            self.add_definition(&def)?;
        }
        Ok(count)
    }

    /// Add a single parsed definition.
    pub fn add_definition(&mut self, def: &UnitDefinition) -> LookResult<()> {
        let base = self.parse(&def.expression)?;
        if base.has_offset() {
            return Err(LookError::Format(format!(
                "cannot derive '{}' from offset unit '{}'",
                def.symbol,
                base.name()
            )));
        }
        let unit = Unit::new(def.symbol.clone(), def.scale * base.scale(), base.dims());
        let aliases: Vec<&str> = def.aliases.iter().map(String::as_str).collect();
        self.define(unit, &aliases);
        Ok(())
    }

    fn populate_defaults(&mut self) {
        let length = Dimension::base(LENGTH);
        let mass = Dimension::base(MASS);
        let time = Dimension::base(TIME);
        let current = Dimension::base(CURRENT);
        let temperature = Dimension::base(TEMPERATURE);
        let force = mass.mul(length).div(time.pow(2));
        let pressure = force.div(length.pow(2));
        let voltage = mass.mul(length.pow(2)).div(time.pow(3)).div(current);

        // Dimensionless
        self.define(Unit::dimensionless(), &["unitless", "none"]);
        self.define(Unit::new("percent", 0.01, Dimension::NONE), &["%"]);

        // Length
        self.define(Unit::new("m", 1.0, length), &["meter", "meters"]);
        self.define(Unit::new("mm", 1e-3, length), &["millimeter"]);
        self.define(Unit::new("cm", 1e-2, length), &[]);
        self.define(Unit::new("km", 1e3, length), &[]);
        self.define(Unit::new("micron", 1e-6, length), &["um", "microns"]);
        self.define(Unit::new("in", 0.0254, length), &["inch", "inches"]);

        // Mass
        self.define(Unit::new("kg", 1.0, mass), &[]);
        self.define(Unit::new("g", 1e-3, mass), &["gram", "grams"]);

        // Time
        self.define(Unit::new("s", 1.0, time), &["sec", "second", "seconds"]);
        self.define(Unit::new("ms", 1e-3, time), &[]);
        self.define(Unit::new("min", 60.0, time), &["minute", "minutes"]);
        self.define(Unit::new("hr", 3600.0, time), &["hour", "hours"]);

        // Current
        self.define(Unit::new("A", 1.0, current), &["amp", "ampere"]);

        // Temperature
        self.define(Unit::new("K", 1.0, temperature), &["kelvin"]);
        self.define(
            Unit::with_offset("degC", 1.0, 273.15, temperature),
            &["celsius"],
        );

        // Amount / luminosity (completeness for the SI axes)
        self.define(Unit::new("mol", 1.0, Dimension::base(AMOUNT)), &[]);
        self.define(Unit::new("cd", 1.0, Dimension::base(LUMINOSITY)), &[]);

        // Force
        self.define(Unit::new("N", 1.0, force), &["newton", "newtons"]);
        self.define(Unit::new("kN", 1e3, force), &[]);
        self.define(Unit::new("MN", 1e6, force), &[]);
        self.define(Unit::new("lbf", 4.448_221_615_260_5, force), &["lb", "lbs"]);

        // Pressure / stress
        self.define(Unit::new("Pa", 1.0, pressure), &["pascal"]);
        self.define(Unit::new("kPa", 1e3, pressure), &[]);
        self.define(Unit::new("MPa", 1e6, pressure), &[]);
        self.define(Unit::new("GPa", 1e9, pressure), &[]);
        self.define(Unit::new("bar", 1e5, pressure), &[]);
        self.define(Unit::new("psi", 6_894.757_293_168, pressure), &[]);

        // Voltage (transducer channels)
        self.define(Unit::new("V", 1.0, voltage), &["volt", "volts"]);
        self.define(Unit::new("mV", 1e-3, voltage), &[]);
    }
}
