//! Free constructors for every unit plus best-match dispatch per family.
//!
//! ```
//! use storage_units::storage_units::{binary_value_of, mebibyte};
//!
//! assert_eq!(mebibyte(5).to_string(), "5.00 MiB");
//! assert_eq!(binary_value_of(1536).to_string(), "1.50 KiB");
//! ```

use num_bigint::BigInt;

use crate::{
    storage_unit::StorageUnit,
    units::{Unit, UnitFamily},
    utils::macros::unit_factories,
};

/// Best binary unit for a raw byte count.
pub fn binary_value_of(bytes: impl Into<BigInt>) -> StorageUnit {
    value_of(bytes, UnitFamily::Binary)
}

/// Best decimal unit for a raw byte count.
pub fn decimal_value_of(bytes: impl Into<BigInt>) -> StorageUnit {
    value_of(bytes, UnitFamily::Decimal)
}

/// Best common unit for a raw byte count.
pub fn common_value_of(bytes: impl Into<BigInt>) -> StorageUnit {
    value_of(bytes, UnitFamily::Common)
}

pub fn value_of(bytes: impl Into<BigInt>, family: UnitFamily) -> StorageUnit {
    let bytes: BigInt = bytes.into();
    let unit = family.best_match(&bytes);
    StorageUnit::new(bytes, unit)
}

/// A raw byte count, typed as [`Unit::Byte`].
pub fn bytes(bytes: impl Into<BigInt>) -> StorageUnit {
    StorageUnit::from_bytes(bytes)
}

unit_factories! {
    Kibibyte => kibibyte;
    Mebibyte => mebibyte;
    Gibibyte => gibibyte;
    Tebibyte => tebibyte;
    Pebibyte => pebibyte;
    Exbibyte => exbibyte;
    Zebibyte => zebibyte;
    Yobibyte => yobibyte;
    Kilobyte => kilobyte;
    Megabyte => megabyte;
    Gigabyte => gigabyte;
    Terabyte => terabyte;
    Petabyte => petabyte;
    Exabyte => exabyte;
    Zettabyte => zettabyte;
    Yottabyte => yottabyte;
    CommonKilobyte => common_kilobyte;
    CommonMegabyte => common_megabyte;
    CommonGigabyte => common_gigabyte;
    CommonTerabyte => common_terabyte;
    CommonPetabyte => common_petabyte;
    CommonExabyte => common_exabyte;
    CommonZettabyte => common_zettabyte;
    CommonYottabyte => common_yottabyte;
}
