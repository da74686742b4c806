use serde::{Deserialize, Serialize};

/// One projected year of ownership versus renting.
///
/// Years are 1-indexed. Every monetary field is a plain amount for that
/// year; balances (`remaining_principal`, `remaining_equity_loan`) are taken
/// after the year's payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: u32,
    pub rent_cost: f64,
    pub mortgage_payment: f64,
    pub interest_portion: f64,
    pub principal_portion: f64,
    /// Payments on the down-payment loan, zero unless it is financed.
    pub equity_loan_payment: f64,
    pub property_tax: f64,
    pub hoa: f64,
    pub tax_savings: f64,
    /// Mortgage + property tax + HOA + equity loan payment - tax savings.
    pub net_condo_cost: f64,
    pub property_value: f64,
    pub equity: f64,
    pub remaining_principal: f64,
    pub remaining_equity_loan: f64,
}

/// Sale of the property at the end of the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleSettlement {
    pub final_value: f64,
    pub realtor_fees: f64,
    /// Appreciation over the original price, floored at zero.
    pub capital_gains: f64,
    pub capital_gains_tax: f64,
    pub remaining_principal: f64,
    pub remaining_equity_loan: f64,
    pub net_sale_proceeds: f64,
}

/// Lifetime totals over the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_rent: f64,
    /// Net ownership cost including the down payment, its tax, and the sale.
    pub total_condo_cost: f64,
    /// `total_condo_cost - total_rent`; positive means renting was cheaper.
    pub difference: f64,
}

impl Totals {
    pub fn new(total_rent: f64, total_condo_cost: f64) -> Self {
        Self {
            total_rent,
            total_condo_cost,
            difference: total_condo_cost - total_rent,
        }
    }

    pub fn renting_is_cheaper(&self) -> bool {
        self.difference > 0.0
    }
}
