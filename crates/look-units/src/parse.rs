// ─────────────────────────────────────────────────────────────────────
// LookLab — Unit Expression Parser
// Copyright (c) 2026 Leeman Geophysical LLC.
// Distributed under the terms of the BSD 3-Clause License.
// SPDX-License-Identifier: BSD-3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Parser for unit expressions found in file headers and r files.
//!
//! Accepted syntax:
//! - explicit operators: `mm/kN`, `MPa*s`
//! - powers: `mm/kN**2`, `m^3`
//! - UDUNITS attached powers with whitespace products: `m2 s-2`
//! - `%` rewritten to `percent`

use look_types::error::{LookError, LookResult};

use crate::registry::UnitRegistry;
use crate::unit::Unit;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Int(i32),
    Star,
    Slash,
    Pow,
}

fn tokenize(expr: &str) -> LookResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = expr.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphabetic() || chars[i] == '_') {
                i += 1;
            }
            tokens.push(Token::Ident(chars[start..i].iter().collect()));
        } else if c == '*' {
            if i + 1 < chars.len() && chars[i + 1] == '*' {
                tokens.push(Token::Pow);
                i += 2;
            } else {
                tokens.push(Token::Star);
                i += 1;
            }
        } else if c == '^' {
            tokens.push(Token::Pow);
            i += 1;
        } else if c == '/' {
            tokens.push(Token::Slash);
            i += 1;
        } else if c.is_ascii_digit() || ((c == '-' || c == '+') && digit_follows(&chars, i)) {
            let start = i;
            i += 1; // sign or first digit
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let value = text
                .parse::<i32>()
                .map_err(|_| LookError::Format(format!("bad exponent '{text}' in '{expr}'")))?;
            tokens.push(Token::Int(value));
        } else {
            return Err(LookError::Format(format!(
                "unexpected character '{c}' in unit expression '{expr}'"
            )));
        }
    }
    Ok(tokens)
}

fn digit_follows(chars: &[char], i: usize) -> bool {
    chars.get(i + 1).is_some_and(|c| c.is_ascii_digit())
}

/// One `ident [power]` factor with its resolved unit.
struct Factor {
    unit: Unit,
    power: i32,
    divide: bool,
}

/// Parse a unit expression against a registry.
pub(crate) fn parse_expression(registry: &UnitRegistry, expression: &str) -> LookResult<Unit> {
    // XLook header fields use % freely; rewrite before tokenizing.
    let rewritten = expression.replace('%', " percent ");
    let tokens = tokenize(&rewritten)?;
    if tokens.is_empty() {
        return Ok(Unit::dimensionless());
    }

    let mut factors: Vec<Factor> = Vec::new();
    let mut divide_next = false;
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Star => {
                if factors.is_empty() || divide_next {
                    return Err(malformed(expression));
                }
                divide_next = false;
                i += 1;
            }
            Token::Slash => {
                if factors.is_empty() || divide_next {
                    return Err(malformed(expression));
                }
                divide_next = true;
                i += 1;
            }
            Token::Ident(name) => {
                let unit = registry.get(name)?;
                i += 1;
                let mut power = 1;
                match tokens.get(i) {
                    Some(Token::Pow) => {
                        i += 1;
                        match tokens.get(i) {
                            Some(Token::Int(n)) => {
                                power = *n;
                                i += 1;
                            }
                            _ => return Err(malformed(expression)),
                        }
                    }
                    // UDUNITS attached power: `m2`, `s-2`
                    Some(Token::Int(n)) => {
                        power = *n;
                        i += 1;
                    }
                    _ => {}
                }
                factors.push(Factor {
                    unit,
                    power,
                    divide: divide_next,
                });
                divide_next = false;
            }
            Token::Int(_) | Token::Pow => return Err(malformed(expression)),
        }
    }
    if divide_next {
        return Err(malformed(expression));
    }

    // A lone offset unit (degC) is legal; compounds with one are not.
    if factors.len() == 1 && factors[0].power == 1 && !factors[0].divide {
        return Ok(factors[0].unit.clone());
    }
    if let Some(bad) = factors.iter().find(|f| f.unit.has_offset()) {
        return Err(LookError::Format(format!(
            "offset unit '{}' cannot be combined in '{}'",
            bad.unit.name(),
            expression
        )));
    }

    let mut result = Unit::dimensionless();
    for factor in &factors {
        let raised = factor.unit.powi(factor.power);
        result = if factor.divide {
            result.divide(&raised)
        } else {
            result.multiply(&raised)
        };
    }
    Ok(result)
}

fn malformed(expression: &str) -> LookError {
    LookError::Format(format!("malformed unit expression '{expression}'"))
}
