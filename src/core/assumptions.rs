use crate::core::error::{ensure_fraction, ensure_non_negative, ensure_year_count, ProjectionError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the money for the down payment comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownPaymentSource {
    /// Liquidated investments; the sale is taxed at the capital-gains rate.
    #[default]
    Stocks,
    /// Cash on hand; no tax is due on the down payment.
    Cash,
    /// A separate amortizing loan whose interest is not deductible.
    #[serde(alias = "loan")]
    EquityLoan,
}

impl fmt::Display for DownPaymentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownPaymentSource::Stocks => write!(f, "Sell stocks (capital gains)"),
            DownPaymentSource::Cash => write!(f, "Cash on hand"),
            DownPaymentSource::EquityLoan => write!(f, "Equity loan (interest not deductible)"),
        }
    }
}

/// Scalar assumptions driving a rent-versus-buy projection.
///
/// All rates are non-negative fractions (`0.065` for 6.5%). Missing fields
/// in a scenario file fall back to [`Assumptions::default`], the reference
/// scenario.
///
/// # Examples
///
/// ```
/// use rent_vs_buy::core::assumptions::Assumptions;
///
/// let assumptions = Assumptions {
///     price: 1_200_000.0,
///     horizon_years: 15,
///     ..Default::default()
/// };
/// assert!(assumptions.validate().is_ok());
/// assert_eq!(assumptions.loan_amount(), 960_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Apartment rent per month.
    pub monthly_rent: f64,
    /// Annual rent growth.
    pub rent_growth_rate: f64,
    /// Purchase price of the condo.
    pub price: f64,
    /// Share of the price paid up front.
    pub down_payment_fraction: f64,
    pub down_payment_source: DownPaymentSource,
    /// Annual rate of the down-payment loan (only used with [`DownPaymentSource::EquityLoan`]).
    pub equity_loan_rate: f64,
    pub equity_loan_term_years: u32,
    /// Nominal annual mortgage rate, compounded monthly.
    pub mortgage_rate: f64,
    pub mortgage_term_years: u32,
    /// Annual property tax as a share of the current (appreciated) value.
    pub property_tax_rate: f64,
    /// Monthly HOA dues as a share of the current (appreciated) value.
    pub monthly_hoa_rate: f64,
    pub federal_tax_rate: f64,
    pub state_tax_rate: f64,
    /// Annual property appreciation.
    pub appreciation_rate: f64,
    /// Realtor commission on the sale price.
    pub realtor_fee_rate: f64,
    pub capital_gains_rate: f64,
    /// Years held before the assumed sale.
    pub horizon_years: u32,
    /// Rate used to express amounts in today's dollars.
    pub discount_rate: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            monthly_rent: 3_000.0,
            rent_growth_rate: 0.03,
            price: 1_000_000.0,
            down_payment_fraction: 0.20,
            down_payment_source: DownPaymentSource::Stocks,
            equity_loan_rate: 0.085,
            equity_loan_term_years: 15,
            mortgage_rate: 0.065,
            mortgage_term_years: 30,
            property_tax_rate: 0.0109,
            monthly_hoa_rate: 0.001,
            federal_tax_rate: 0.24,
            state_tax_rate: 0.05,
            appreciation_rate: 0.04,
            realtor_fee_rate: 0.05,
            capital_gains_rate: 0.15,
            horizon_years: 10,
            discount_rate: 0.03,
        }
    }
}

impl Assumptions {
    /// Check every field against its domain.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        ensure_non_negative("monthly_rent", self.monthly_rent)?;
        ensure_non_negative("rent_growth_rate", self.rent_growth_rate)?;
        ensure_non_negative("price", self.price)?;
        if self.price == 0.0 {
            return Err(ProjectionError::invalid("price", self.price, "must be positive"));
        }
        ensure_fraction("down_payment_fraction", self.down_payment_fraction)?;
        ensure_non_negative("equity_loan_rate", self.equity_loan_rate)?;
        if self.down_payment_source == DownPaymentSource::EquityLoan {
            ensure_year_count("equity_loan_term_years", self.equity_loan_term_years)?;
        }
        ensure_non_negative("mortgage_rate", self.mortgage_rate)?;
        ensure_year_count("mortgage_term_years", self.mortgage_term_years)?;
        ensure_non_negative("property_tax_rate", self.property_tax_rate)?;
        ensure_non_negative("monthly_hoa_rate", self.monthly_hoa_rate)?;
        ensure_fraction("federal_tax_rate", self.federal_tax_rate)?;
        ensure_fraction("state_tax_rate", self.state_tax_rate)?;
        ensure_non_negative("appreciation_rate", self.appreciation_rate)?;
        ensure_fraction("realtor_fee_rate", self.realtor_fee_rate)?;
        ensure_fraction("capital_gains_rate", self.capital_gains_rate)?;
        ensure_year_count("horizon_years", self.horizon_years)?;
        ensure_non_negative("discount_rate", self.discount_rate)?;
        Ok(())
    }

    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }

    pub fn down_payment(&self) -> f64 {
        self.price * self.down_payment_fraction
    }

    /// Mortgage principal: the price less the down payment.
    pub fn loan_amount(&self) -> f64 {
        self.price - self.down_payment()
    }

    /// Amount borrowed against other assets to fund the down payment.
    pub fn equity_loan_amount(&self) -> f64 {
        match self.down_payment_source {
            DownPaymentSource::EquityLoan => self.down_payment(),
            DownPaymentSource::Stocks | DownPaymentSource::Cash => 0.0,
        }
    }

    /// Federal plus state marginal rate applied to deductible expenses.
    pub fn combined_tax_rate(&self) -> f64 {
        self.federal_tax_rate + self.state_tax_rate
    }

    /// Same assumptions with a different horizon.
    pub fn with_horizon(&self, horizon_years: u32) -> Self {
        Self {
            horizon_years,
            ..self.clone()
        }
    }
}
