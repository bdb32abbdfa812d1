use std::{fmt, str::FromStr};

use log::trace;
use num_bigint::BigInt;
use num_traits::Signed;

use crate::{
    error::{Error, Result},
    units::unit::Unit,
};

/// The three unit families a byte count can be expressed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UnitFamily {
    /// Powers of 1024 with IEC symbols (KiB, MiB, ...).
    Binary,
    /// Powers of 1000 with SI symbols (kB, MB, ...).
    Decimal,
    /// Powers of 1024 with SI-style symbols, as commonly found in the wild.
    Common,
}

impl UnitFamily {
    pub const ALL: [UnitFamily; 3] = [Self::Binary, Self::Decimal, Self::Common];

    pub const BINARY_UNITS: [Unit; 9] = [
        Unit::Byte,
        Unit::Kibibyte,
        Unit::Mebibyte,
        Unit::Gibibyte,
        Unit::Tebibyte,
        Unit::Pebibyte,
        Unit::Exbibyte,
        Unit::Zebibyte,
        Unit::Yobibyte,
    ];
    pub const DECIMAL_UNITS: [Unit; 9] = [
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Exabyte,
        Unit::Zettabyte,
        Unit::Yottabyte,
    ];
    pub const COMMON_UNITS: [Unit; 9] = [
        Unit::Byte,
        Unit::CommonKilobyte,
        Unit::CommonMegabyte,
        Unit::CommonGigabyte,
        Unit::CommonTerabyte,
        Unit::CommonPetabyte,
        Unit::CommonExabyte,
        Unit::CommonZettabyte,
        Unit::CommonYottabyte,
    ];

    pub const fn base(self) -> u32 {
        match self {
            Self::Binary | Self::Common => 1024,
            Self::Decimal => 1000,
        }
    }

    /// The family's ladder in ascending order, `Byte` first.
    pub const fn units(self) -> &'static [Unit; 9] {
        match self {
            Self::Binary => &Self::BINARY_UNITS,
            Self::Decimal => &Self::DECIMAL_UNITS,
            Self::Common => &Self::COMMON_UNITS,
        }
    }

    pub const fn largest(self) -> Unit {
        self.units()[8]
    }

    /// Picks the unit whose range `[threshold_n, threshold_n+1)` contains
    /// the absolute value of `bytes`.
    ///
    /// Counts below the first threshold stay in `Byte`; counts at or past
    /// the top threshold are absorbed by the family's largest unit.
    pub fn best_match(self, bytes: &BigInt) -> Unit {
        let magnitude = bytes.abs();
        let units = self.units();
        let mut unit = units[0];

        for &next_unit in &units[1..] {
            if magnitude < *next_unit.bytes_per_unit() {
                break;
            }
            unit = next_unit;
        }

        trace!("best {self} unit for {bytes} bytes is {}", unit.name());
        unit
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
            Self::Common => "common",
        })
    }
}

impl FromStr for UnitFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "iec" => Ok(Self::Binary),
            "decimal" | "si" => Ok(Self::Decimal),
            "common" | "jedec" => Ok(Self::Common),
            _ => Err(Error::invalid_argument(format!("unknown unit family: {s}"))),
        }
    }
}
