/// Generates the `as_<unit>` / `in_<unit>` accessor pair for each listed
/// unit inside an `impl StorageUnit` block.
macro_rules! unit_accessors {
    ($($unit: ident => $as_fn: ident, $in_fn: ident;)+) => {
        $(
            #[doc = concat!("The same byte count, typed as [`Unit::", stringify!($unit), "`].")]
            pub fn $as_fn(&self) -> StorageUnit {
                self.as_unit(Unit::$unit)
            }

            #[doc = concat!("The byte count expressed in [`Unit::", stringify!($unit), "`]; see [`StorageUnit::in_unit`].")]
            pub fn $in_fn(&self) -> BigDecimal {
                self.in_unit(Unit::$unit)
            }
        )+
    };
}

/// Generates one free constructor per listed unit, each taking an amount of
/// that unit.
macro_rules! unit_factories {
    ($($unit: ident => $factory: ident;)+) => {
        $(
            #[doc = concat!("`amount` [`Unit::", stringify!($unit), "`]s, typed as that unit.")]
            pub fn $factory(amount: impl Into<BigInt>) -> StorageUnit {
                Unit::$unit.quantity(amount)
            }
        )+
    };
}

pub(crate) use unit_accessors;
pub(crate) use unit_factories;
