//! Amortization calculator for fixed-rate loans.

pub mod annuity;
pub mod loan;

pub use annuity::{monthly_payment, payment_breakdown, PaymentSplit};
pub use loan::{annual_loan_payments, Loan, LoanYear};
