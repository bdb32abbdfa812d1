//! Reading quantities such as `"1536"`, `"5 MiB"` or `"1.5GB"`.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Zero;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{Error, Result},
    storage_unit::StorageUnit,
    units::{Unit, UnitFamily},
    utils::math::{ceil_div, pow10},
};

static QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?P<sign>[+-])?(?P<int>\d*)(?:\.(?P<frac>\d+))?\s*(?P<unit>[A-Za-z][A-Za-z _-]*)?\s*$",
    )
    .expect("quantity regex is valid")
});

/// Parses `text`, resolving SI-style symbols within the decimal family.
pub fn parse(text: &str) -> Result<StorageUnit> {
    parse_in(text, UnitFamily::Decimal)
}

/// Parses `text`, resolving SI-style symbols within `family`.
///
/// A missing unit means bytes. The result is typed as the unit it was
/// written in, and a fractional amount is rounded up to the next whole
/// byte.
pub fn parse_in(text: &str, family: UnitFamily) -> Result<StorageUnit> {
    let caps = QUANTITY
        .captures(text)
        .ok_or_else(|| Error::invalid_quantity(format!("'{text}'")))?;

    let int = caps.name("int").map_or("", |m| m.as_str());
    let frac = caps.name("frac").map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return Err(Error::invalid_quantity(format!("'{text}' has no amount")));
    }

    let unit = match caps.name("unit") {
        Some(symbol) => Unit::from_symbol(symbol.as_str(), family)?,
        None => Unit::Byte,
    };

    let digits = BigInt::from_str(&format!("{int}{frac}"))
        .map_err(|err| Error::invalid_quantity(format!("'{text}': {err}")))?;
    let scaled = digits * unit.bytes_per_unit();
    let mut bytes = ceil_div(&scaled, &pow10(frac.len() as u32));
    if caps.name("sign").is_some_and(|m| m.as_str() == "-") && !bytes.is_zero() {
        bytes = -bytes;
    }

    Ok(StorageUnit::new(bytes, unit))
}

impl FromStr for StorageUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
