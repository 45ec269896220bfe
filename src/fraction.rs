//! Unit-of-measurement parsing.
//!
//! Grid spacing is described by a unit string such as `"1/10"`, `"0.5"`, or
//! `"3"`. The parsed value is kept as a numerator/denominator pair rather
//! than collapsed to a float straight away, because fixed-denominator tick
//! labels reuse the denominator exactly as the user wrote it.

use std::fmt;

/// A unit step parsed from user input.
///
/// Parsing never fails: malformed components fall back to `1`, so the worst
/// possible input still yields a drawable one-unit step. A zero denominator
/// is deliberately not rejected here; [`value`](UnitFraction::value)
/// propagates the resulting non-finite step and the renderer decides what to
/// do with it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitFraction {
    pub numerator: f64,
    pub denominator: f64,
}

impl UnitFraction {
    /// Collapse the pair to the numeric axis step
    pub fn value(&self) -> f64 {
        self.numerator / self.denominator
    }

    /// The denominator as the positive integer required by
    /// fixed-denominator labeling, or [None] when the parsed denominator is
    /// not usable as one (zero, negative, or non-finite).
    pub fn label_denominator(&self) -> Option<i64> {
        if self.denominator.is_finite() && self.denominator >= 1.0 {
            Some(self.denominator.round() as i64)
        } else {
            None
        }
    }
}

impl Default for UnitFraction {
    fn default() -> UnitFraction {
        UnitFraction {
            numerator: 1.0,
            denominator: 1.0,
        }
    }
}

impl fmt::Display for UnitFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1.0 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Parse a user-supplied unit string into a [UnitFraction].
///
/// Strings containing a `/` are split on the first occurrence and each half
/// is parsed as a float; anything else is parsed whole. Components that fail
/// to parse are substituted with `1`, so this function never errors.
pub fn parse_unit(input: &str) -> UnitFraction {
    match input.split_once('/') {
        Some((numerator, denominator)) => UnitFraction {
            numerator: numerator.trim().parse().unwrap_or(1.0),
            denominator: denominator.trim().parse().unwrap_or(1.0),
        },
        None => UnitFraction {
            numerator: input.trim().parse().unwrap_or(1.0),
            denominator: 1.0,
        },
    }
}
