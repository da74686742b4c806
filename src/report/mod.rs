//! Text rendering of projections. Amounts stay plain `f64` in the engine;
//! rounding and currency symbols happen only here.

pub mod currency;
pub mod tables;

pub use currency::{format_compact, format_currency, format_percent, whole_dollars};
pub use tables::ComparisonTable;
