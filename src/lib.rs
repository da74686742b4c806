//! # rent-vs-buy
//!
//! Deterministic rent-versus-buy housing cost projection engine.
//!
//! Given a handful of scalar assumptions (price, mortgage rate and term,
//! tax rates, appreciation, rent growth), this engine amortizes the
//! mortgage month by month and produces a year-indexed cost and equity
//! schedule, the sale settlement at the horizon, and lifetime totals for
//! both renting and buying.
//!
//! ## Architecture
//!
//! - **core** — Assumptions, output records, error type
//! - **amortization** — Level payment and exact interest/principal split
//! - **projection** — Yearly schedule, sale settlement, multi-horizon comparison
//! - **report** — Currency formatting and text tables
//! - **config** — JSON scenario files
//!
//! ## Example
//!
//! ```
//! use rent_vs_buy::prelude::*;
//!
//! let assumptions = Assumptions {
//!     mortgage_term_years: 20,
//!     ..Default::default()
//! };
//! let projection = ProjectionEngine::project(&assumptions).unwrap();
//! assert_eq!(projection.schedule().len(), 10);
//! assert!(projection.settlement().final_value > assumptions.price);
//! ```

pub mod amortization;
pub mod config;
pub mod core;
pub mod projection;
pub mod report;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::amortization::{monthly_payment, payment_breakdown, Loan, PaymentSplit};
    pub use crate::core::assumptions::{Assumptions, DownPaymentSource};
    pub use crate::core::error::ProjectionError;
    pub use crate::core::records::{SaleSettlement, Totals, YearRecord};
    pub use crate::projection::{
        find_crossover, Crossover, HorizonComparison, Projection, ProjectionEngine,
    };
}
