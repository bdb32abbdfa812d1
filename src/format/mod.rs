//! Locale-aware decimal rendering of storage amounts.

pub mod locale;
pub mod pattern;

use std::{cmp::Ordering, str::FromStr};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::{
    error::{Error, Result},
    utils::math::pow10,
};

pub use locale::Locale;
pub use pattern::DecimalPattern;

pub const DEFAULT_FORMAT_PATTERN: &str = "0.00";

/// How the amount is rounded to the pattern's fraction digits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    #[default]
    Ceiling,
    /// Toward negative infinity.
    Floor,
    HalfUp,
    HalfDown,
    HalfEven,
}

impl FromStr for RoundingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "ceiling" => Ok(Self::Ceiling),
            "floor" => Ok(Self::Floor),
            "halfup" => Ok(Self::HalfUp),
            "halfdown" => Ok(Self::HalfDown),
            "halfeven" => Ok(Self::HalfEven),
            _ => Err(Error::invalid_argument(format!("unknown rounding mode: {s}"))),
        }
    }
}

/// A prepared number format: pattern, locale symbols and rounding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitFormat {
    pattern: DecimalPattern,
    locale: Locale,
    rounding: RoundingMode,
}

impl UnitFormat {
    /// Malformed patterns fail with [`Error::InvalidPattern`].
    pub fn new(pattern: &str, locale: &Locale) -> Result<Self> {
        Ok(Self {
            pattern: DecimalPattern::parse(pattern)?,
            locale: locale.clone(),
            rounding: RoundingMode::default(),
        })
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn pattern(&self) -> &DecimalPattern {
        &self.pattern
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn format(&self, value: &BigDecimal) -> String {
        let pattern = &self.pattern;
        let (digits, scale) = value.as_bigint_and_exponent();
        let rounded = round_to_scale(&digits, scale, pattern.max_fraction_digits, self.rounding);

        let magnitude = rounded.magnitude().to_string();
        let frac_len = pattern.max_fraction_digits;
        let padded = if magnitude.len() <= frac_len {
            format!("{}{magnitude}", "0".repeat(frac_len + 1 - magnitude.len()))
        } else {
            magnitude
        };
        let (integer, fraction) = padded.split_at(padded.len() - frac_len);

        let mut fraction = fraction.trim_end_matches('0');
        if fraction.len() < pattern.min_fraction_digits {
            fraction = &padded[padded.len() - frac_len..][..pattern.min_fraction_digits];
        }

        let integer = integer.trim_start_matches('0');
        let integer = if integer.len() < pattern.min_integer_digits {
            format!("{}{integer}", "0".repeat(pattern.min_integer_digits - integer.len()))
        } else {
            integer.to_string()
        };

        let mut body = group(&integer, pattern.grouping_size, self.locale.grouping_separator());
        if body.is_empty() && fraction.is_empty() {
            body.push('0');
        }
        if !fraction.is_empty() || pattern.decimal_separator_always_shown {
            body.push(self.locale.decimal_separator());
            body.push_str(fraction);
        }

        if rounded.is_negative() {
            match &pattern.negative_affixes {
                Some((prefix, suffix)) => format!("{prefix}{body}{suffix}"),
                None => format!(
                    "{}{}{body}{}",
                    self.locale.minus_sign(),
                    pattern.positive_prefix,
                    pattern.positive_suffix
                ),
            }
        } else {
            format!("{}{body}{}", pattern.positive_prefix, pattern.positive_suffix)
        }
    }
}

fn group(integer: &str, size: usize, separator: char) -> String {
    if size == 0 || integer.len() <= size {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / size);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % size == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Rescales `digits * 10^-scale` to exactly `target` fractional digits,
/// returning the new unscaled digits.
fn round_to_scale(digits: &BigInt, scale: i64, target: usize, mode: RoundingMode) -> BigInt {
    let target = target as i64;
    if scale <= target {
        return digits * pow10((target - scale) as u32);
    }

    let divisor = pow10((scale - target) as u32);
    let (quotient, remainder) = digits.div_rem(&divisor);
    if remainder.is_zero() {
        return quotient;
    }

    let away_from_zero = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => digits.is_positive(),
        RoundingMode::Floor => digits.is_negative(),
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            match (remainder.abs() * 2u32).cmp(&divisor) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => match mode {
                    RoundingMode::HalfUp => true,
                    RoundingMode::HalfDown => false,
                    _ => quotient.is_odd(),
                },
            }
        }
    };

    match (away_from_zero, digits.is_negative()) {
        (false, _) => quotient,
        (true, false) => quotient + 1,
        (true, true) => quotient - 1,
    }
}
