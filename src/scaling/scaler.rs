//! Rescaling a single line: scale the leading quantity, round per the unit,
//! reassemble the text

use crate::language::{parse_number, ParsedNumber};

/// Units whose scaled quantities are rounded to whole numbers rather than
/// hundredths. Fixed at compile time, never mutated.
const ROUNDED_UNITS: &[&str] = &["g", "ml"];

/// The leading quantity of a line, with an optional interval end and the
/// trailing unit text.
#[derive(Debug, PartialEq)]
pub struct LineQuantity<'i> {
    pub amount: f64,
    pub amount_to: Option<f64>,
    pub rest: &'i str,
}

/// How a scaled amount gets rounded before being written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Whole,
    Hundredths,
}

impl Rounding {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::Whole => value.round(),
            Rounding::Hundredths => (value * 100.0).round() / 100.0,
        }
    }
}

/// Decompose an already-trimmed line into its leading quantity, optional
/// interval end, and trailing text. Returns None when the line does not
/// begin with a number, in which case the caller passes it through.
pub fn examine_line(line: &str) -> Option<LineQuantity<'_>> {
    let ParsedNumber { amount, rest } = parse_number(line);
    if amount.is_nan() {
        return None;
    }

    // An interval like "1 - 2" has a second quantity after a dash. If what
    // follows the dash is not a number, the dash stays in the trailing text.
    let mut amount_to = None;
    let mut rest = rest;
    if let Some(after) = rest
        .trim_start()
        .strip_prefix('-')
    {
        let second = parse_number(after.trim_start());
        if !second
            .amount
            .is_nan()
        {
            amount_to = Some(second.amount);
            rest = second.rest;
        }
    }

    Some(LineQuantity {
        amount,
        amount_to,
        rest,
    })
}

/// Choose the rounding policy by looking at the text that follows the
/// quantity: a unit from ROUNDED_UNITS directly followed by a space forces
/// whole-number rounding. Both ends of an interval round the same way.
pub fn rounding_for(rest: &str) -> Rounding {
    let rest = rest.trim();

    for unit in ROUNDED_UNITS {
        if let Some(after) = rest.strip_prefix(unit) {
            if after.starts_with(' ') {
                return Rounding::Whole;
            }
        }
    }

    Rounding::Hundredths
}

/// Rescale one line of recipe text. Lines that do not start with a quantity
/// come back trimmed but otherwise untouched.
pub fn rescale_line(line: &str, ratio: f64) -> String {
    let line = line.trim();

    let quantity = match examine_line(line) {
        Some(quantity) => quantity,
        None => return line.to_string(),
    };

    let rounding = rounding_for(quantity.rest);
    let scaled = rounding.apply(quantity.amount * ratio);

    match quantity.amount_to {
        Some(amount_to) => {
            let scaled_to = rounding.apply(amount_to * ratio);
            format!(
                "{} - {}{}",
                format_amount(scaled),
                format_amount(scaled_to),
                quantity.rest
            )
        }
        None => format!("{}{}", format_amount(scaled), quantity.rest),
    }
}

/// Write an amount in minimal notation: no trailing ".0" on whole numbers.
/// Non-finite values keep the sentinel spellings the original application
/// produced, so they surface in the output text rather than being corrected.
pub fn format_amount(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 {
            return "Infinity".to_string();
        } else {
            return "-Infinity".to_string();
        }
    }

    value.to_string()
}
