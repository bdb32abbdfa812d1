pub(crate) mod macros;
pub(crate) mod math;
