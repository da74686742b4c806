use crate::amortization::{Loan, LoanYear};
use crate::core::assumptions::{Assumptions, DownPaymentSource};
use crate::core::error::ProjectionError;
use crate::core::records::{SaleSettlement, Totals, YearRecord};
use serde::{Deserialize, Serialize};

/// Full result of projecting one assumption set over its horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// One record per year, `1..=horizon`, ascending.
    schedule: Vec<YearRecord>,
    settlement: SaleSettlement,
    totals: Totals,
    /// Down payment paid out of pocket (zero when financed).
    down_payment: f64,
    /// Capital-gains tax on investments liquidated for the down payment.
    down_payment_tax: f64,
    /// Set once the amounts have been discounted to today's dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discount_rate: Option<f64>,
}

impl Projection {
    pub fn schedule(&self) -> &[YearRecord] {
        &self.schedule
    }

    pub fn settlement(&self) -> &SaleSettlement {
        &self.settlement
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn down_payment(&self) -> f64 {
        self.down_payment
    }

    pub fn down_payment_tax(&self) -> f64 {
        self.down_payment_tax
    }

    pub fn horizon_years(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// Discount rate the amounts were brought back to today's dollars at.
    pub fn discount_rate(&self) -> Option<f64> {
        self.discount_rate
    }

    /// Same projection in today's dollars.
    ///
    /// Each year record is discounted by its own year; the settlement and
    /// totals by the horizon. The down payment is paid at year 0 and stays
    /// as is.
    pub fn in_todays_dollars(&self, discount_rate: f64) -> Self {
        let horizon = self.horizon_years();
        Self {
            schedule: self
                .schedule
                .iter()
                .map(|record| record.in_todays_dollars(discount_rate))
                .collect(),
            settlement: self.settlement.in_todays_dollars(horizon, discount_rate),
            totals: self.totals.in_todays_dollars(horizon, discount_rate),
            down_payment: self.down_payment,
            down_payment_tax: self.down_payment_tax,
            discount_rate: Some(discount_rate),
        }
    }

    /// Record for 1-indexed `year`, if it falls inside the horizon.
    pub fn year(&self, year: u32) -> Option<&YearRecord> {
        year.checked_sub(1)
            .and_then(|index| self.schedule.get(index as usize))
    }
}

/// Property value after `year` years of compounding appreciation.
pub fn property_value(price: f64, appreciation_rate: f64, year: u32) -> f64 {
    price * (1.0 + appreciation_rate).powi(year as i32)
}

/// The rent-versus-buy projection engine.
///
/// Stateless: every call owns its accumulators, so projections for
/// different assumption sets can run side by side.
pub struct ProjectionEngine;

impl ProjectionEngine {
    /// Project `assumptions` over `horizon_years` and settle the sale.
    ///
    /// # Algorithm
    ///
    /// For each year `y`:
    ///
    /// 1. Rent grows from the year-1 annual rent at the rent growth rate.
    /// 2. The mortgage is split into interest and principal on the exact
    ///    monthly schedule; payments stop once the term ends.
    /// 3. Property value compounds at the appreciation rate; property tax
    ///    and HOA dues are charged on that appreciated value.
    /// 4. Interest and property tax are deducted at the combined marginal
    ///    rate, uncapped.
    ///
    /// The property is sold at the horizon. Capital gains are measured
    /// against the original price with no exclusion.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if any assumption is out of range.
    pub fn project(assumptions: &Assumptions) -> Result<Projection, ProjectionError> {
        assumptions.validate()?;

        let horizon = assumptions.horizon_years;
        let mortgage = Loan::from_fraction(
            assumptions.loan_amount(),
            assumptions.mortgage_rate,
            assumptions.mortgage_term_years,
        )?;
        let equity_loan = match assumptions.down_payment_source {
            DownPaymentSource::EquityLoan => Some(Loan::from_fraction(
                assumptions.equity_loan_amount(),
                assumptions.equity_loan_rate,
                assumptions.equity_loan_term_years,
            )?),
            DownPaymentSource::Stocks | DownPaymentSource::Cash => None,
        };
        let combined_tax_rate = assumptions.combined_tax_rate();
        let annual_rent = assumptions.annual_rent();

        let mut remaining_principal = mortgage.principal;
        let mut remaining_equity_loan = assumptions.equity_loan_amount();
        let mut schedule = Vec::with_capacity(horizon as usize);

        for year in 1..=horizon {
            let rent_cost = annual_rent * (1.0 + assumptions.rent_growth_rate).powi(year as i32 - 1);

            let mortgage_year = mortgage.annual_payments(year)?;
            remaining_principal = running_balance(remaining_principal, &mortgage_year);

            let equity_loan_year = match &equity_loan {
                Some(loan) => loan.annual_payments(year)?,
                None => LoanYear::default(),
            };
            remaining_equity_loan = running_balance(remaining_equity_loan, &equity_loan_year);

            let value = property_value(assumptions.price, assumptions.appreciation_rate, year);
            let property_tax = assumptions.property_tax_rate * value;
            let hoa = 12.0 * assumptions.monthly_hoa_rate * value;
            // Equity loan interest is not deductible.
            let tax_savings = (mortgage_year.interest + property_tax) * combined_tax_rate;
            let net_condo_cost = mortgage_year.annual_payment
                + property_tax
                + hoa
                + equity_loan_year.annual_payment
                - tax_savings;

            log::debug!(
                "year {}: rent {:.0}, condo {:.0}, value {:.0}, balance {:.0}",
                year,
                rent_cost,
                net_condo_cost,
                value,
                remaining_principal
            );

            schedule.push(YearRecord {
                year,
                rent_cost,
                mortgage_payment: mortgage_year.annual_payment,
                interest_portion: mortgage_year.interest,
                principal_portion: mortgage_year.principal,
                equity_loan_payment: equity_loan_year.annual_payment,
                property_tax,
                hoa,
                tax_savings,
                net_condo_cost,
                property_value: value,
                equity: value - remaining_principal - remaining_equity_loan,
                remaining_principal,
                remaining_equity_loan,
            });
        }

        let settlement = settle(assumptions, remaining_principal, remaining_equity_loan);

        let (down_payment, down_payment_tax) = match assumptions.down_payment_source {
            DownPaymentSource::Stocks => (
                assumptions.down_payment(),
                assumptions.down_payment() * assumptions.capital_gains_rate,
            ),
            DownPaymentSource::Cash => (assumptions.down_payment(), 0.0),
            DownPaymentSource::EquityLoan => (0.0, 0.0),
        };

        let total_rent: f64 = schedule.iter().map(|r| r.rent_cost).sum();
        let total_net_condo: f64 = schedule.iter().map(|r| r.net_condo_cost).sum();
        let totals = Totals::new(
            total_rent,
            total_net_condo + down_payment + down_payment_tax - settlement.net_sale_proceeds,
        );

        log::info!(
            "projected {} years: rent {:.0}, condo {:.0}, difference {:.0}",
            horizon,
            totals.total_rent,
            totals.total_condo_cost,
            totals.difference
        );

        Ok(Projection {
            schedule,
            settlement,
            totals,
            down_payment,
            down_payment_tax,
            discount_rate: None,
        })
    }
}

/// Balance after a year's principal payments; zero once the loan is retired.
fn running_balance(previous: f64, year: &LoanYear) -> f64 {
    if year.active {
        previous - year.principal
    } else {
        0.0
    }
}

fn settle(assumptions: &Assumptions, remaining_principal: f64, remaining_equity_loan: f64) -> SaleSettlement {
    let final_value = property_value(
        assumptions.price,
        assumptions.appreciation_rate,
        assumptions.horizon_years,
    );
    let realtor_fees = final_value * assumptions.realtor_fee_rate;
    let capital_gains = (final_value - assumptions.price).max(0.0);
    let capital_gains_tax = capital_gains * assumptions.capital_gains_rate;
    let net_sale_proceeds =
        final_value - realtor_fees - capital_gains_tax - remaining_principal - remaining_equity_loan;

    SaleSettlement {
        final_value,
        realtor_fees,
        capital_gains,
        capital_gains_tax,
        remaining_principal,
        remaining_equity_loan,
        net_sale_proceeds,
    }
}
