//! The immutable storage quantity.
//!
//! A [`StorageUnit`] is an exact byte count tagged with the [`Unit`] it was
//! built through. The tag only drives display and best-match conversion:
//! equality, ordering and hashing look at the byte count alone, so
//! `1 KiB == 1024 B`. Arithmetic never re-normalizes; the result keeps the
//! receiver's unit.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::{
    error::{Error, Result},
    format::{Locale, UnitFormat},
    units::{Unit, UnitFamily},
    utils::{
        macros::unit_accessors,
        math::{ceil_div, pow10},
    },
};

/// Fractional digits kept by [`StorageUnit::in_unit`].
pub const DEFAULT_SCALE: u32 = 24;

mod sealed {
    pub trait Sealed {}
}

/// A dimensionless integer accepted by [`StorageUnit::multiply`] and
/// [`StorageUnit::divide`].
pub trait Scalar: sealed::Sealed {
    fn into_bigint(self) -> BigInt;
}

macro_rules! scalar {
    ($($t: ty),+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                fn into_bigint(self) -> BigInt {
                    BigInt::from(self)
                }
            }
        )+
    };
}

scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

impl sealed::Sealed for &BigInt {}

impl Scalar for &BigInt {
    fn into_bigint(self) -> BigInt {
        self.clone()
    }
}

#[derive(Clone, Debug)]
pub struct StorageUnit {
    bytes: BigInt,
    unit: Unit,
}

impl StorageUnit {
    /// Wraps a raw byte count, typed as `unit`.
    pub fn new(bytes: impl Into<BigInt>, unit: Unit) -> Self {
        Self {
            bytes: bytes.into(),
            unit,
        }
    }

    pub fn from_bytes(bytes: impl Into<BigInt>) -> Self {
        Self::new(bytes, Unit::Byte)
    }

    pub fn bytes(&self) -> &BigInt {
        &self.bytes
    }

    pub fn into_bytes(self) -> BigInt {
        self.bytes
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn family(&self) -> UnitFamily {
        self.unit.family()
    }

    pub fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    pub fn bytes_per_unit(&self) -> &'static BigInt {
        self.unit.bytes_per_unit()
    }

    pub fn is_zero(&self) -> bool {
        self.bytes.is_zero()
    }

    /// The same byte count, typed as `unit`. Exact.
    pub fn as_unit(&self, unit: Unit) -> StorageUnit {
        Self::new(self.bytes.clone(), unit)
    }

    /// The byte count divided by `unit`'s size, with [`DEFAULT_SCALE`]
    /// fractional digits, rounded toward positive infinity.
    ///
    /// A partially filled unit is never under-reported: one byte is
    /// `0.000000000000000000000001` yobibytes, not zero.
    pub fn in_unit(&self, unit: Unit) -> BigDecimal {
        let scaled = &self.bytes * pow10(DEFAULT_SCALE);
        BigDecimal::new(
            ceil_div(&scaled, unit.bytes_per_unit()),
            DEFAULT_SCALE as i64,
        )
    }

    /// The amount in this quantity's own unit; see [`StorageUnit::in_unit`].
    pub fn value(&self) -> BigDecimal {
        self.in_unit(self.unit)
    }

    /// Best match within this quantity's own family.
    pub fn as_best_matching_unit(&self) -> StorageUnit {
        self.as_best_matching(self.family())
    }

    pub fn as_best_matching_binary_unit(&self) -> StorageUnit {
        self.as_best_matching(UnitFamily::Binary)
    }

    pub fn as_best_matching_decimal_unit(&self) -> StorageUnit {
        self.as_best_matching(UnitFamily::Decimal)
    }

    pub fn as_best_matching_common_unit(&self) -> StorageUnit {
        self.as_best_matching(UnitFamily::Common)
    }

    pub fn as_best_matching(&self, family: UnitFamily) -> StorageUnit {
        self.as_unit(family.best_match(&self.bytes))
    }

    /// Adds a byte count or another quantity of any unit.
    pub fn add(&self, bytes: impl Into<BigInt>) -> StorageUnit {
        let bytes: BigInt = bytes.into();
        Self::new(&self.bytes + bytes, self.unit)
    }

    /// Subtracts a byte count or another quantity of any unit.
    pub fn subtract(&self, bytes: impl Into<BigInt>) -> StorageUnit {
        let bytes: BigInt = bytes.into();
        Self::new(&self.bytes - bytes, self.unit)
    }

    /// Scales the byte count by an integer factor.
    ///
    /// Only plain numbers are accepted; a quantity times a quantity is not a
    /// quantity:
    ///
    /// ```compile_fail
    /// use storage_units::storage_units::kibibyte;
    ///
    /// kibibyte(2).multiply(kibibyte(3));
    /// ```
    pub fn multiply(&self, factor: impl Scalar) -> StorageUnit {
        Self::new(&self.bytes * factor.into_bigint(), self.unit)
    }

    /// Integer division truncating toward zero.
    ///
    /// ```compile_fail
    /// use storage_units::storage_units::kibibyte;
    ///
    /// kibibyte(6).divide(kibibyte(3));
    /// ```
    pub fn divide(&self, divisor: impl Scalar) -> Result<StorageUnit> {
        let divisor = divisor.into_bigint();
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(&self.bytes / divisor, self.unit))
    }

    /// Renders `"<amount> <symbol>"` with a prepared format.
    pub fn format(&self, format: &UnitFormat) -> String {
        format!("{} {}", format.format(&self.value()), self.symbol())
    }

    /// Renders with `pattern` in the root locale.
    pub fn to_string_with(&self, pattern: &str) -> Result<String> {
        self.to_string_with_locale(pattern, &Locale::root())
    }

    pub fn to_string_with_locale(&self, pattern: &str, locale: &Locale) -> Result<String> {
        Ok(self.format(&UnitFormat::new(pattern, locale)?))
    }

    unit_accessors! {
        Byte => as_byte, in_byte;
        Kibibyte => as_kibibyte, in_kibibyte;
        Mebibyte => as_mebibyte, in_mebibyte;
        Gibibyte => as_gibibyte, in_gibibyte;
        Tebibyte => as_tebibyte, in_tebibyte;
        Pebibyte => as_pebibyte, in_pebibyte;
        Exbibyte => as_exbibyte, in_exbibyte;
        Zebibyte => as_zebibyte, in_zebibyte;
        Yobibyte => as_yobibyte, in_yobibyte;
        Kilobyte => as_kilobyte, in_kilobyte;
        Megabyte => as_megabyte, in_megabyte;
        Gigabyte => as_gigabyte, in_gigabyte;
        Terabyte => as_terabyte, in_terabyte;
        Petabyte => as_petabyte, in_petabyte;
        Exabyte => as_exabyte, in_exabyte;
        Zettabyte => as_zettabyte, in_zettabyte;
        Yottabyte => as_yottabyte, in_yottabyte;
        CommonKilobyte => as_common_kilobyte, in_common_kilobyte;
        CommonMegabyte => as_common_megabyte, in_common_megabyte;
        CommonGigabyte => as_common_gigabyte, in_common_gigabyte;
        CommonTerabyte => as_common_terabyte, in_common_terabyte;
        CommonPetabyte => as_common_petabyte, in_common_petabyte;
        CommonExabyte => as_common_exabyte, in_common_exabyte;
        CommonZettabyte => as_common_zettabyte, in_common_zettabyte;
        CommonYottabyte => as_common_yottabyte, in_common_yottabyte;
    }
}

impl PartialEq for StorageUnit {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for StorageUnit {}

impl PartialOrd for StorageUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StorageUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl Hash for StorageUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for StorageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&UnitFormat::default()))
    }
}

impl From<BigInt> for StorageUnit {
    fn from(bytes: BigInt) -> Self {
        Self::from_bytes(bytes)
    }
}

macro_rules! from_primitive {
    ($($t: ty),+) => {
        $(
            impl From<$t> for StorageUnit {
                fn from(bytes: $t) -> Self {
                    Self::from_bytes(bytes)
                }
            }
        )+
    };
}

from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<StorageUnit> for BigInt {
    fn from(quantity: StorageUnit) -> Self {
        quantity.bytes
    }
}

impl From<&StorageUnit> for BigInt {
    fn from(quantity: &StorageUnit) -> Self {
        quantity.bytes.clone()
    }
}

// Coercions delegate to the underlying integer: out of range is `None`.
impl ToPrimitive for StorageUnit {
    fn to_i64(&self) -> Option<i64> {
        self.bytes.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.bytes.to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.bytes.to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.bytes.to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        self.bytes.to_f32()
    }

    fn to_f64(&self) -> Option<f64> {
        self.bytes.to_f64()
    }
}

impl std::ops::Add for StorageUnit {
    type Output = StorageUnit;

    fn add(self, rhs: StorageUnit) -> StorageUnit {
        StorageUnit::new(self.bytes + rhs.bytes, self.unit)
    }
}

impl std::ops::Add<&StorageUnit> for &StorageUnit {
    type Output = StorageUnit;

    fn add(self, rhs: &StorageUnit) -> StorageUnit {
        StorageUnit::new(&self.bytes + &rhs.bytes, self.unit)
    }
}

impl std::ops::Sub for StorageUnit {
    type Output = StorageUnit;

    fn sub(self, rhs: StorageUnit) -> StorageUnit {
        StorageUnit::new(self.bytes - rhs.bytes, self.unit)
    }
}

impl std::ops::Sub<&StorageUnit> for &StorageUnit {
    type Output = StorageUnit;

    fn sub(self, rhs: &StorageUnit) -> StorageUnit {
        StorageUnit::new(&self.bytes - &rhs.bytes, self.unit)
    }
}

impl std::ops::Add<i64> for StorageUnit {
    type Output = StorageUnit;

    fn add(self, bytes: i64) -> StorageUnit {
        StorageUnit::new(self.bytes + bytes, self.unit)
    }
}

impl std::ops::Sub<i64> for StorageUnit {
    type Output = StorageUnit;

    fn sub(self, bytes: i64) -> StorageUnit {
        StorageUnit::new(self.bytes - bytes, self.unit)
    }
}

impl std::ops::Mul<i64> for StorageUnit {
    type Output = StorageUnit;

    fn mul(self, factor: i64) -> StorageUnit {
        StorageUnit::new(self.bytes * factor, self.unit)
    }
}

impl std::ops::Mul<&BigInt> for &StorageUnit {
    type Output = StorageUnit;

    fn mul(self, factor: &BigInt) -> StorageUnit {
        StorageUnit::new(&self.bytes * factor, self.unit)
    }
}

impl std::ops::Neg for StorageUnit {
    type Output = StorageUnit;

    fn neg(self) -> StorageUnit {
        StorageUnit::new(-self.bytes, self.unit)
    }
}

impl Sum for StorageUnit {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(StorageUnit::from_bytes(0), |total, quantity| {
            total.add(quantity)
        })
    }
}

impl<'a> Sum<&'a StorageUnit> for StorageUnit {
    fn sum<I: Iterator<Item = &'a StorageUnit>>(iter: I) -> Self {
        iter.fold(StorageUnit::from_bytes(0), |total, quantity| {
            total.add(quantity)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, str::FromStr};

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_as_unit_keeps_bytes() {
        let q = Unit::Mebibyte.quantity(3);
        let k = q.as_kibibyte();
        assert_eq!(k.unit(), Unit::Kibibyte);
        assert_eq!(*k.bytes(), BigInt::from(3 * 1024 * 1024));
        assert_eq!(k.in_kibibyte(), dec("3072"));
    }

    #[test]
    fn test_in_unit_is_exact_when_it_divides() {
        let q = Unit::Kilobyte.quantity(1500);
        assert_eq!(q.in_megabyte(), dec("1.5"));
        assert_eq!(q.in_kilobyte(), dec("1500"));
        assert_eq!(q.in_byte(), dec("1500000"));
        assert_eq!(StorageUnit::from_bytes(1536).in_kibibyte(), dec("1.5"));
    }

    #[test]
    fn test_in_unit_rounds_up() {
        let one = StorageUnit::from_bytes(1);
        assert_eq!(one.in_kilobyte(), dec("0.001"));
        assert_eq!(one.in_kibibyte(), dec("0.0009765625"));
        // 2^-80 = 8.27e-25 has more digits than the scale keeps
        assert_eq!(one.in_yobibyte(), dec("0.000000000000000000000001"));
        assert_eq!(one.in_common_yottabyte(), dec("0.000000000000000000000001"));
    }

    #[test]
    fn test_in_unit_rounds_negative_toward_positive_infinity() {
        let minus_one = StorageUnit::from_bytes(-1);
        assert_eq!(minus_one.in_yobibyte(), dec("0"));
        assert_eq!(minus_one.in_kilobyte(), dec("-0.001"));
    }

    #[test]
    fn test_arithmetic_preserves_unit() {
        let a = Unit::Kilobyte.quantity(5);
        let b = Unit::Kilobyte.quantity(3);
        let sum = a.add(&b);
        assert_eq!(sum.unit(), Unit::Kilobyte);
        assert_eq!(*sum.bytes(), BigInt::from(8000));

        let diff = a.subtract(Unit::Kibibyte.quantity(1));
        assert_eq!(diff.unit(), Unit::Kilobyte);
        assert_eq!(*diff.bytes(), BigInt::from(5000 - 1024));

        let product = a.multiply(3);
        assert_eq!(product.unit(), Unit::Kilobyte);
        assert_eq!(*product.bytes(), BigInt::from(15000));

        let quotient = a.divide(3).unwrap();
        assert_eq!(quotient.unit(), Unit::Kilobyte);
        assert_eq!(*quotient.bytes(), BigInt::from(1666));
    }

    #[test]
    fn test_multiply_and_divide_take_scalars() {
        let q = Unit::Kibibyte.quantity(6);
        let big = BigInt::from(u64::MAX);

        assert_eq!(*q.multiply(2u8).bytes(), BigInt::from(12 * 1024));
        assert_eq!(*q.multiply(&big).bytes(), &big * BigInt::from(6144));
        assert_eq!(q.multiply(big.clone()).unit(), Unit::Kibibyte);
        assert_eq!(*q.divide(-3i64).unwrap().bytes(), BigInt::from(-2048));
        assert_eq!(q.divide(&BigInt::from(0)), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_add_raw_bytes_does_not_renormalize() {
        let q = Unit::Kibibyte.quantity(1023).add(2048);
        assert_eq!(q.unit(), Unit::Kibibyte);
        assert_eq!(*q.bytes(), BigInt::from(1023 * 1024 + 2048));
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        let q = StorageUnit::from_bytes(-7);
        assert_eq!(*q.divide(2).unwrap().bytes(), BigInt::from(-3));
    }

    #[test]
    fn test_divide_by_zero() {
        let q = Unit::Gibibyte.quantity(1);
        assert_eq!(q.divide(0), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_operators() {
        let a = Unit::Mebibyte.quantity(2);
        let b = Unit::Kibibyte.quantity(512);
        assert_eq!((&a + &b).unit(), Unit::Mebibyte);
        assert_eq!(*(&a - &b).bytes(), BigInt::from(2 * 1024 * 1024 - 512 * 1024));
        assert_eq!((a.clone() * 2).in_mebibyte(), dec("4"));
        assert_eq!(*(-a.clone()).bytes(), BigInt::from(-2 * 1024 * 1024));
        assert_eq!((a + b).in_mebibyte(), dec("2.5"));

        let c = Unit::Kibibyte.quantity(1) + 1024i64;
        assert_eq!(c.unit(), Unit::Kibibyte);
        assert_eq!(c.in_kibibyte(), dec("2"));
        assert_eq!(*(c - 2048i64).bytes(), BigInt::from(0));
    }

    #[test]
    fn test_sum_is_typed_as_bytes() {
        let parts = vec![
            Unit::Kibibyte.quantity(1),
            Unit::Kilobyte.quantity(1),
            StorageUnit::from_bytes(1),
        ];
        let total: StorageUnit = parts.iter().sum();
        assert_eq!(total.unit(), Unit::Byte);
        assert_eq!(*total.bytes(), BigInt::from(2025));
    }

    #[test]
    fn test_equality_and_hash_ignore_unit() {
        let kib = Unit::Kibibyte.quantity(1);
        let bytes = StorageUnit::from_bytes(1024);
        assert_eq!(kib, bytes);

        let set: HashSet<StorageUnit> = [kib, bytes, Unit::CommonKilobyte.quantity(1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_across_units() {
        let kib = Unit::Kibibyte.quantity(1);
        let kb = Unit::Kilobyte.quantity(1);
        let mb = Unit::Megabyte.quantity(1);
        assert!(kb < kib);
        assert!(kib < mb);
        assert_eq!(kib.cmp(&StorageUnit::from_bytes(1024)), Ordering::Equal);
    }

    #[test]
    fn test_best_matching_unit_stays_in_family() {
        assert_eq!(
            Unit::Kilobyte.value_of(5_000_000).as_best_matching_unit().unit(),
            Unit::Megabyte
        );
        assert_eq!(
            Unit::Kibibyte.value_of(5 * 1024 * 1024).as_best_matching_unit().unit(),
            Unit::Mebibyte
        );
        assert_eq!(
            Unit::CommonGigabyte.value_of(2048).as_best_matching_unit().unit(),
            Unit::CommonKilobyte
        );
        assert_eq!(
            StorageUnit::from_bytes(2048).as_best_matching_unit().unit(),
            Unit::Kibibyte
        );
    }

    #[test]
    fn test_best_matching_keeps_sign() {
        let q = StorageUnit::from_bytes(-2048).as_best_matching_binary_unit();
        assert_eq!(q.unit(), Unit::Kibibyte);
        assert_eq!(*q.bytes(), BigInt::from(-2048));
        assert_eq!(q.to_string(), "-2.00 KiB");
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit::Mebibyte.quantity(5).to_string(), "5.00 MiB");
        assert_eq!(StorageUnit::from_bytes(1023).to_string(), "1023.00 B");
        assert_eq!(Unit::CommonMegabyte.quantity(5).to_string(), "5.00 MB");
        assert_eq!(
            StorageUnit::from_bytes(1500).as_kibibyte().to_string(),
            "1.47 KiB"
        );
    }

    #[test]
    fn test_to_string_with_pattern_and_locale() {
        let q = Unit::Kibibyte.quantity(1536);
        assert_eq!(q.to_string_with("#,##0.0").unwrap(), "1,536.0 KiB");
        let de: Locale = "de-DE".parse().unwrap();
        assert_eq!(
            q.to_string_with_locale("#,##0.00", &de).unwrap(),
            "1.536,00 KiB"
        );
        assert!(q.to_string_with("0.0.0").is_err());
    }

    #[test]
    fn test_zero_with_optional_integer_digits() {
        assert_eq!(StorageUnit::from_bytes(0).to_string_with("#.").unwrap(), "0. B");
        assert_eq!(StorageUnit::from_bytes(0).to_string_with("#").unwrap(), "0 B");
    }

    #[test]
    fn test_coercions() {
        let q = Unit::Kibibyte.quantity(2);
        assert_eq!(q.to_i64(), Some(2048));
        assert_eq!(q.to_i32(), Some(2048));
        assert_eq!(q.to_f64(), Some(2048.0));

        let huge = Unit::Yobibyte.quantity(1);
        assert_eq!(huge.to_i64(), None);
        assert_eq!(huge.to_u128(), Some(1u128 << 80));
        assert_eq!(StorageUnit::from_bytes(-1).to_u64(), None);
    }

    #[test]
    fn test_conversions_into_big_int() {
        let q = Unit::Kibibyte.quantity(1);
        let bytes: BigInt = (&q).into();
        assert_eq!(bytes, BigInt::from(1024));
        assert_eq!(StorageUnit::from(42u8).unit(), Unit::Byte);
    }
}
