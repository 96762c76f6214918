//! Input policy applied before values reach the entity constructors
//!
//! Stricter than the entities themselves: names must look like a person or
//! company name, and a client has to ship something.

use freight_types::{Error, Result};

/// Upper bound for a single client's cargo
pub const MAX_CARGO_WEIGHT: f64 = 10_000.0;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('А'..='я').contains(&c)
        || c == 'Ё'
        || c == 'ё'
        || c == '-'
        || c.is_whitespace()
}

/// Trimmed name, at least two characters of Latin/Cyrillic letters, hyphens and spaces
pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.chars().count() < 2 {
        return Err(Error::invalid("name must be at least 2 characters"));
    }
    if !name.chars().all(is_name_char) {
        return Err(Error::invalid(
            "name may contain only letters, hyphens and spaces",
        ));
    }
    Ok(name.to_string())
}

/// 0 < weight <= MAX_CARGO_WEIGHT
pub fn validate_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() || weight <= 0.0 || weight > MAX_CARGO_WEIGHT {
        return Err(Error::invalid(format!(
            "cargo weight must be in (0, {}]",
            MAX_CARGO_WEIGHT
        )));
    }
    Ok(weight)
}

pub fn validate_capacity(capacity: f64) -> Result<f64> {
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(Error::invalid("capacity must be a number >= 0"));
    }
    Ok(capacity)
}

pub fn parse_capacity(input: &str) -> Result<f64> {
    validate_capacity(parse_number(input)?)
}

/// Whole non-negative number, e.g. cars or altitude
pub fn parse_count(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::invalid(format!("'{}' is not a whole number", input.trim())))
}

/// y/yes/д/да (any case) is true, everything else false
pub fn parse_yes(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "y" | "yes" | "д" | "да"
    )
}

/// Decimal number; a comma is accepted as the decimal separator
pub fn parse_number(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| Error::invalid(format!("'{}' is not a number", trimmed)))
}
