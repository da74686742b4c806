use crate::amortization::annuity::{monthly_payment, payment_breakdown};
use crate::core::error::{ensure_non_negative, ensure_positive_years, ensure_year_count, ProjectionError};
use serde::{Deserialize, Serialize};

/// A fixed-rate, fully amortizing loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub principal: f64,
    /// Nominal annual rate in percent.
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

/// Payments on a loan aggregated over one year.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanYear {
    pub annual_payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// False once the loan is paid off (or was never drawn).
    pub active: bool,
}

impl Loan {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: u32) -> Result<Self, ProjectionError> {
        ensure_non_negative("principal", principal)?;
        ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
        ensure_year_count("term_years", term_years)?;
        Ok(Self {
            principal,
            annual_rate_percent,
            term_years,
        })
    }

    /// Build a loan from a fractional annual rate (`0.065` for 6.5%).
    pub fn from_fraction(principal: f64, annual_rate: f64, term_years: u32) -> Result<Self, ProjectionError> {
        Self::new(principal, annual_rate * 100.0, term_years)
    }

    pub fn monthly_payment(&self) -> Result<f64, ProjectionError> {
        monthly_payment(self.principal, self.annual_rate_percent, self.term_years)
    }

    pub fn is_active_in(&self, year: u32) -> bool {
        self.principal > 0.0 && year >= 1 && year <= self.term_years
    }

    /// Sum the twelve payments of 1-indexed `year`.
    ///
    /// Payments `(year-1)*12+1 ..= year*12` are split on the exact
    /// amortization schedule. Years past the term yield an inactive,
    /// all-zero [`LoanYear`].
    pub fn annual_payments(&self, year: u32) -> Result<LoanYear, ProjectionError> {
        ensure_positive_years("year", year)?;
        if !self.is_active_in(year) {
            return Ok(LoanYear::default());
        }

        let payment = self.monthly_payment()?;
        let first = (year - 1) * 12 + 1;
        let mut interest = 0.0;
        let mut principal = 0.0;
        for index in first..first + 12 {
            let split = payment_breakdown(
                self.principal,
                self.annual_rate_percent,
                self.term_years,
                index,
            )?;
            interest += split.interest;
            principal += split.principal;
        }

        Ok(LoanYear {
            annual_payment: payment * 12.0,
            interest,
            principal,
            active: true,
        })
    }
}

/// Convenience wrapper over [`Loan::annual_payments`].
pub fn annual_loan_payments(loan: &Loan, year: u32) -> Result<LoanYear, ProjectionError> {
    loan.annual_payments(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_year_of_ten_year_loan() {
        let loan = Loan::new(100_000.0, 5.0, 10).unwrap();
        let year = loan.annual_payments(1).unwrap();
        let expected = monthly_payment(100_000.0, 5.0, 10).unwrap() * 12.0;
        assert_relative_eq!(year.annual_payment, expected);
        assert_relative_eq!(year.interest + year.principal, year.annual_payment, max_relative = 1e-9);
        assert!(year.active);
    }

    #[test]
    fn test_inactive_after_term() {
        let loan = Loan::new(100_000.0, 5.0, 10).unwrap();
        let year = loan.annual_payments(11).unwrap();
        assert!(!year.active);
        assert_eq!(year.annual_payment, 0.0);
        assert_eq!(year.interest, 0.0);
        assert_eq!(year.principal, 0.0);
    }

    #[test]
    fn test_zero_rate_loan() {
        let loan = Loan::new(100_000.0, 0.0, 10).unwrap();
        let year = loan.annual_payments(1).unwrap();
        assert_relative_eq!(year.annual_payment, 10_000.0, max_relative = 1e-12);
        assert_eq!(year.interest, 0.0);
        assert_relative_eq!(year.principal, 10_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_principal_is_inactive() {
        let loan = Loan::new(0.0, 5.0, 30).unwrap();
        let year = annual_loan_payments(&loan, 1).unwrap();
        assert!(!year.active);
        assert_eq!(year, LoanYear::default());
    }

    #[test]
    fn test_yearly_principal_retires_loan() {
        let loan = Loan::from_fraction(250_000.0, 0.07, 15).unwrap();
        let repaid: f64 = (1..=15)
            .map(|y| loan.annual_payments(y).unwrap().principal)
            .sum();
        assert_relative_eq!(repaid, 250_000.0, max_relative = 1e-6);
    }

    #[test]
    fn test_year_zero_rejected() {
        let loan = Loan::new(100_000.0, 5.0, 10).unwrap();
        assert!(loan.annual_payments(0).is_err());
    }
}
