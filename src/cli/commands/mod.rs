//! Command implementations

mod generate;
mod status;

pub use generate::generate;
pub use status::status;
