//! Unit table: the fixed symbols, the 25 concrete units and the three
//! families they are grouped into.

pub mod system;
pub mod unit;

pub use system::UnitFamily;
pub use unit::Unit;

pub const B: &str = "B";

pub const KB: &str = "kB";
pub const MB: &str = "MB";
pub const GB: &str = "GB";
pub const TB: &str = "TB";
pub const PB: &str = "PB";
pub const EB: &str = "EB";
pub const ZB: &str = "ZB";
pub const YB: &str = "YB";

pub const KIB: &str = "KiB";
pub const MIB: &str = "MiB";
pub const GIB: &str = "GiB";
pub const TIB: &str = "TiB";
pub const PIB: &str = "PiB";
pub const EIB: &str = "EiB";
pub const ZIB: &str = "ZiB";
pub const YIB: &str = "YiB";
