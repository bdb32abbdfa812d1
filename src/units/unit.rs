use std::{fmt, str::FromStr};

use num_bigint::BigInt;
use once_cell::sync::Lazy;

use crate::{
    error::{Error, Result},
    storage_unit::StorageUnit,
    units::{system::UnitFamily, *},
};

/// A concrete storage unit.
///
/// Every unit is fully described by its family and its exponent: one unit
/// is `family.base() ^ exponent` bytes. `Byte` is the shared zero rung of
/// all three families and converts within the binary family.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Unit {
    Byte,

    Kibibyte,
    Mebibyte,
    Gibibyte,
    Tebibyte,
    Pebibyte,
    Exbibyte,
    Zebibyte,
    Yobibyte,

    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Exabyte,
    Zettabyte,
    Yottabyte,

    CommonKilobyte,
    CommonMegabyte,
    CommonGigabyte,
    CommonTerabyte,
    CommonPetabyte,
    CommonExabyte,
    CommonZettabyte,
    CommonYottabyte,
}

// Indexed by discriminant, so the order must follow the enum declaration.
static BYTES_PER_UNIT: Lazy<Vec<BigInt>> = Lazy::new(|| {
    Unit::ALL
        .iter()
        .map(|unit| BigInt::from(unit.family().base()).pow(unit.exponent()))
        .collect()
});

impl Unit {
    pub const ALL: [Unit; 25] = [
        Unit::Byte,
        Unit::Kibibyte,
        Unit::Mebibyte,
        Unit::Gibibyte,
        Unit::Tebibyte,
        Unit::Pebibyte,
        Unit::Exbibyte,
        Unit::Zebibyte,
        Unit::Yobibyte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Exabyte,
        Unit::Zettabyte,
        Unit::Yottabyte,
        Unit::CommonKilobyte,
        Unit::CommonMegabyte,
        Unit::CommonGigabyte,
        Unit::CommonTerabyte,
        Unit::CommonPetabyte,
        Unit::CommonExabyte,
        Unit::CommonZettabyte,
        Unit::CommonYottabyte,
    ];

    pub const fn family(self) -> UnitFamily {
        match self {
            Self::Byte
            | Self::Kibibyte
            | Self::Mebibyte
            | Self::Gibibyte
            | Self::Tebibyte
            | Self::Pebibyte
            | Self::Exbibyte
            | Self::Zebibyte
            | Self::Yobibyte => UnitFamily::Binary,
            Self::Kilobyte
            | Self::Megabyte
            | Self::Gigabyte
            | Self::Terabyte
            | Self::Petabyte
            | Self::Exabyte
            | Self::Zettabyte
            | Self::Yottabyte => UnitFamily::Decimal,
            Self::CommonKilobyte
            | Self::CommonMegabyte
            | Self::CommonGigabyte
            | Self::CommonTerabyte
            | Self::CommonPetabyte
            | Self::CommonExabyte
            | Self::CommonZettabyte
            | Self::CommonYottabyte => UnitFamily::Common,
        }
    }

    /// Power of the family base that one unit represents.
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Byte => 0,
            Self::Kibibyte | Self::Kilobyte | Self::CommonKilobyte => 1,
            Self::Mebibyte | Self::Megabyte | Self::CommonMegabyte => 2,
            Self::Gibibyte | Self::Gigabyte | Self::CommonGigabyte => 3,
            Self::Tebibyte | Self::Terabyte | Self::CommonTerabyte => 4,
            Self::Pebibyte | Self::Petabyte | Self::CommonPetabyte => 5,
            Self::Exbibyte | Self::Exabyte | Self::CommonExabyte => 6,
            Self::Zebibyte | Self::Zettabyte | Self::CommonZettabyte => 7,
            Self::Yobibyte | Self::Yottabyte | Self::CommonYottabyte => 8,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Byte => B,
            Self::Kibibyte => KIB,
            Self::Mebibyte => MIB,
            Self::Gibibyte => GIB,
            Self::Tebibyte => TIB,
            Self::Pebibyte => PIB,
            Self::Exbibyte => EIB,
            Self::Zebibyte => ZIB,
            Self::Yobibyte => YIB,
            Self::Kilobyte | Self::CommonKilobyte => KB,
            Self::Megabyte | Self::CommonMegabyte => MB,
            Self::Gigabyte | Self::CommonGigabyte => GB,
            Self::Terabyte | Self::CommonTerabyte => TB,
            Self::Petabyte | Self::CommonPetabyte => PB,
            Self::Exabyte | Self::CommonExabyte => EB,
            Self::Zettabyte | Self::CommonZettabyte => ZB,
            Self::Yottabyte | Self::CommonYottabyte => YB,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Kibibyte => "kibibyte",
            Self::Mebibyte => "mebibyte",
            Self::Gibibyte => "gibibyte",
            Self::Tebibyte => "tebibyte",
            Self::Pebibyte => "pebibyte",
            Self::Exbibyte => "exbibyte",
            Self::Zebibyte => "zebibyte",
            Self::Yobibyte => "yobibyte",
            Self::Kilobyte => "kilobyte",
            Self::Megabyte => "megabyte",
            Self::Gigabyte => "gigabyte",
            Self::Terabyte => "terabyte",
            Self::Petabyte => "petabyte",
            Self::Exabyte => "exabyte",
            Self::Zettabyte => "zettabyte",
            Self::Yottabyte => "yottabyte",
            Self::CommonKilobyte => "common-kilobyte",
            Self::CommonMegabyte => "common-megabyte",
            Self::CommonGigabyte => "common-gigabyte",
            Self::CommonTerabyte => "common-terabyte",
            Self::CommonPetabyte => "common-petabyte",
            Self::CommonExabyte => "common-exabyte",
            Self::CommonZettabyte => "common-zettabyte",
            Self::CommonYottabyte => "common-yottabyte",
        }
    }

    /// Number of bytes one of this unit represents.
    pub fn bytes_per_unit(self) -> &'static BigInt {
        &BYTES_PER_UNIT[self as usize]
    }

    /// Wraps a raw byte count, typed as this unit. No scaling happens.
    pub fn value_of(self, bytes: impl Into<BigInt>) -> StorageUnit {
        StorageUnit::new(bytes, self)
    }

    /// Builds `amount` of this unit, i.e. `amount * bytes_per_unit` bytes.
    pub fn quantity(self, amount: impl Into<BigInt>) -> StorageUnit {
        let amount: BigInt = amount.into();
        StorageUnit::new(amount * self.bytes_per_unit(), self)
    }

    /// Looks a unit up by symbol or name.
    ///
    /// IEC symbols always resolve to binary units. SI-style symbols (`kB`,
    /// `M`, `megabyte`, ...) resolve within `Common` when that family is
    /// requested and within `Decimal` otherwise. Names of the form
    /// `common-kilobyte` always resolve to the common family.
    pub fn from_symbol(symbol: &str, family: UnitFamily) -> Result<Self> {
        let key = symbol.trim().to_ascii_lowercase();
        let key = key.replace(['_', ' '], "-");
        let key = key.as_str();

        if matches!(key, "b" | "byte" | "bytes") {
            return Ok(Self::Byte);
        }

        let si_family = match family {
            UnitFamily::Common => UnitFamily::Common,
            UnitFamily::Binary | UnitFamily::Decimal => UnitFamily::Decimal,
        };

        Self::ALL
            .iter()
            .copied()
            .filter(|unit| *unit != Self::Byte)
            .find(|unit| {
                let name = unit.name();
                let symbol = unit.symbol().to_ascii_lowercase();
                let by_name = key == name || key.strip_suffix('s') == Some(name);
                match unit.family() {
                    // "kib" or the Kubernetes-style "ki"
                    UnitFamily::Binary => by_name || key == symbol || key == &symbol[..2],
                    UnitFamily::Common if by_name => true,
                    family if family == si_family => {
                        let short_name = name.trim_start_matches("common-");
                        key == symbol
                            || key == &symbol[..1]
                            || key == short_name
                            || key.strip_suffix('s') == Some(short_name)
                    }
                    _ => false,
                }
            })
            .ok_or_else(|| Error::UnknownUnit(symbol.trim().to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbol(s, UnitFamily::Decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_follows_declaration_order() {
        for (index, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(*unit as usize, index, "{unit:?} is out of place");
        }
    }

    #[test]
    fn test_bytes_per_unit() {
        assert_eq!(*Unit::Byte.bytes_per_unit(), BigInt::from(1));
        assert_eq!(*Unit::Kibibyte.bytes_per_unit(), BigInt::from(1024));
        assert_eq!(*Unit::Kilobyte.bytes_per_unit(), BigInt::from(1000));
        assert_eq!(*Unit::CommonKilobyte.bytes_per_unit(), BigInt::from(1024));
        assert_eq!(
            *Unit::Gibibyte.bytes_per_unit(),
            BigInt::from(1024u64 * 1024 * 1024)
        );
        assert_eq!(
            *Unit::Yottabyte.bytes_per_unit(),
            BigInt::from(10).pow(24)
        );
        assert_eq!(*Unit::Yobibyte.bytes_per_unit(), BigInt::from(2).pow(80));
        assert_eq!(
            Unit::CommonYottabyte.bytes_per_unit(),
            Unit::Yobibyte.bytes_per_unit()
        );
    }

    #[test]
    fn test_symbols_are_fixed() {
        let symbols: Vec<&str> = Unit::ALL.iter().map(|u| u.symbol()).collect();
        assert_eq!(
            symbols,
            vec![
                "B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB", "kB", "MB", "GB",
                "TB", "PB", "EB", "ZB", "YB", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB",
            ]
        );
    }

    #[test]
    fn test_common_units_share_decimal_symbols_with_binary_magnitude() {
        for (common, decimal, binary) in [
            (Unit::CommonMegabyte, Unit::Megabyte, Unit::Mebibyte),
            (Unit::CommonExabyte, Unit::Exabyte, Unit::Exbibyte),
        ] {
            assert_eq!(common.symbol(), decimal.symbol());
            assert_eq!(common.bytes_per_unit(), binary.bytes_per_unit());
            assert_eq!(common.exponent(), binary.exponent());
        }
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!("KiB".parse::<Unit>().unwrap(), Unit::Kibibyte);
        assert_eq!("kib".parse::<Unit>().unwrap(), Unit::Kibibyte);
        assert_eq!("Mi".parse::<Unit>().unwrap(), Unit::Mebibyte);
        assert_eq!("kB".parse::<Unit>().unwrap(), Unit::Kilobyte);
        assert_eq!("KB".parse::<Unit>().unwrap(), Unit::Kilobyte);
        assert_eq!("G".parse::<Unit>().unwrap(), Unit::Gigabyte);
        assert_eq!("bytes".parse::<Unit>().unwrap(), Unit::Byte);
        assert_eq!("terabytes".parse::<Unit>().unwrap(), Unit::Terabyte);
        assert_eq!("zebibyte".parse::<Unit>().unwrap(), Unit::Zebibyte);
        assert_eq!("common-petabyte".parse::<Unit>().unwrap(), Unit::CommonPetabyte);
        assert_eq!("common_petabyte".parse::<Unit>().unwrap(), Unit::CommonPetabyte);
    }

    #[test]
    fn test_from_symbol_with_common_family() {
        assert_eq!(
            Unit::from_symbol("MB", UnitFamily::Common).unwrap(),
            Unit::CommonMegabyte
        );
        assert_eq!(
            Unit::from_symbol("megabytes", UnitFamily::Common).unwrap(),
            Unit::CommonMegabyte
        );
        assert_eq!(
            Unit::from_symbol("MiB", UnitFamily::Common).unwrap(),
            Unit::Mebibyte
        );
        assert_eq!(
            Unit::from_symbol("MB", UnitFamily::Binary).unwrap(),
            Unit::Megabyte
        );
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            "parsec".parse::<Unit>(),
            Err(Error::UnknownUnit("parsec".to_string()))
        );
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn test_units_compare_by_size() {
        assert!(Unit::CommonKilobyte.bytes_per_unit() < Unit::Yottabyte.bytes_per_unit());
        assert!(Unit::CommonKilobyte.quantity(1) < Unit::Yottabyte.quantity(1));
        assert!(Unit::Kilobyte.quantity(1) < Unit::Kibibyte.quantity(1));
    }

    #[test]
    fn test_quantity_and_value_of() {
        assert_eq!(*Unit::Kibibyte.quantity(2).bytes(), BigInt::from(2048));
        assert_eq!(*Unit::Kibibyte.value_of(2).bytes(), BigInt::from(2));
        assert_eq!(Unit::Kibibyte.value_of(2).unit(), Unit::Kibibyte);
    }
}
