//! Input assumptions, output records and the engine error type.

pub mod assumptions;
pub mod error;
pub mod records;
