pub mod errors;
pub mod summary;
pub mod table;
