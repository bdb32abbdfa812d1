//! Exact, immutable storage quantities.
//!
//! A [`StorageUnit`] wraps an arbitrary-precision byte count together with
//! the [`Unit`] it is displayed in. Units come in three families:
//!
//! - **Binary**: powers of 1024 with IEC symbols (`KiB`, `MiB`, ... `YiB`)
//! - **Decimal**: powers of 1000 with SI symbols (`kB`, `MB`, ... `YB`)
//! - **Common**: powers of 1024 shown with SI-style symbols, the way most
//!   operating systems label file sizes
//!
//! # Examples
//!
//! ```rust
//! use storage_units::prelude::*;
//!
//! let size = kibibyte(1536);
//! assert_eq!(size.to_string(), "1536.00 KiB");
//! assert_eq!(size.as_best_matching_unit().to_string(), "1.50 MiB");
//! assert_eq!(size.as_best_matching_decimal_unit().to_string(), "1.58 MB");
//!
//! // Arithmetic keeps the receiver's unit
//! let grown = size.add(mebibyte(1));
//! assert_eq!(grown.unit(), Unit::Kibibyte);
//!
//! // Equality only looks at the byte count
//! assert_eq!(kibibyte(1), bytes(1024));
//! ```
//!
//! # Rounding
//!
//! `in_*` conversions keep 24 fractional digits and round toward positive
//! infinity, so a partially used unit is never reported as less than it
//! is. Rendering rounds to the pattern's precision the same way unless the
//! [`UnitFormat`] says otherwise.
//!
//! # Thread Safety
//!
//! Every value is immutable once built, so quantities can be shared across
//! threads freely.

pub mod error;
pub mod format;
pub mod parse;
pub mod storage_unit;
pub mod storage_units;
pub mod units;

mod utils;


pub use error::{Error, Result};
pub use format::{Locale, RoundingMode, UnitFormat};
pub use storage_unit::{Scalar, StorageUnit};
pub use units::{Unit, UnitFamily};

/// Re-export common types and constructors for convenience
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{Locale, RoundingMode, UnitFormat};
    pub use crate::storage_unit::{Scalar, StorageUnit};
    pub use crate::storage_units::*;
    pub use crate::units::{Unit, UnitFamily};
}
