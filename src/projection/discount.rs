use crate::core::records::{SaleSettlement, Totals, YearRecord};

/// Value today of `amount` received `year` years from now.
///
/// `discount_rate` is a fraction; a zero rate leaves the amount unchanged.
pub fn present_value(amount: f64, year: u32, discount_rate: f64) -> f64 {
    if discount_rate == 0.0 {
        return amount;
    }
    amount / (1.0 + discount_rate).powi(year as i32)
}

impl YearRecord {
    /// Same record with every monetary field discounted back `year` years.
    pub fn in_todays_dollars(&self, discount_rate: f64) -> Self {
        let pv = |amount: f64| present_value(amount, self.year, discount_rate);
        Self {
            year: self.year,
            rent_cost: pv(self.rent_cost),
            mortgage_payment: pv(self.mortgage_payment),
            interest_portion: pv(self.interest_portion),
            principal_portion: pv(self.principal_portion),
            equity_loan_payment: pv(self.equity_loan_payment),
            property_tax: pv(self.property_tax),
            hoa: pv(self.hoa),
            tax_savings: pv(self.tax_savings),
            net_condo_cost: pv(self.net_condo_cost),
            property_value: pv(self.property_value),
            equity: pv(self.equity),
            remaining_principal: pv(self.remaining_principal),
            remaining_equity_loan: pv(self.remaining_equity_loan),
        }
    }
}

impl SaleSettlement {
    /// Sale amounts discounted back from the sale in `year`.
    pub fn in_todays_dollars(&self, year: u32, discount_rate: f64) -> Self {
        let pv = |amount: f64| present_value(amount, year, discount_rate);
        Self {
            final_value: pv(self.final_value),
            realtor_fees: pv(self.realtor_fees),
            capital_gains: pv(self.capital_gains),
            capital_gains_tax: pv(self.capital_gains_tax),
            remaining_principal: pv(self.remaining_principal),
            remaining_equity_loan: pv(self.remaining_equity_loan),
            net_sale_proceeds: pv(self.net_sale_proceeds),
        }
    }
}

impl Totals {
    /// Totals discounted back from `year`, as in a multi-horizon comparison.
    pub fn in_todays_dollars(&self, year: u32, discount_rate: f64) -> Self {
        Totals::new(
            present_value(self.total_rent, year, discount_rate),
            present_value(self.total_condo_cost, year, discount_rate),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_year_zero_is_unchanged() {
        assert_eq!(present_value(1_000.0, 0, 0.03), 1_000.0);
    }

    #[test]
    fn test_discounting_by_year() {
        assert!((present_value(1_000.0, 1, 0.03) - 970.87).abs() < 0.01);
        assert!((present_value(1_000.0, 10, 0.03) - 744.09).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(present_value(1_000.0, 10, 0.0), 1_000.0);
    }

    #[test]
    fn test_year_record_discounted_by_its_year() {
        let record = YearRecord {
            year: 2,
            rent_cost: 37_080.0,
            mortgage_payment: 60_000.0,
            interest_portion: 50_000.0,
            principal_portion: 10_000.0,
            equity_loan_payment: 0.0,
            property_tax: 11_000.0,
            hoa: 12_000.0,
            tax_savings: 17_690.0,
            net_condo_cost: 65_310.0,
            property_value: 1_081_600.0,
            equity: 301_600.0,
            remaining_principal: 780_000.0,
            remaining_equity_loan: 0.0,
        };
        let discounted = record.in_todays_dollars(0.05);
        let factor = 1.05f64.powi(2);
        assert_eq!(discounted.year, 2);
        assert_relative_eq!(discounted.rent_cost, 37_080.0 / factor, max_relative = 1e-12);
        assert_relative_eq!(discounted.net_condo_cost, 65_310.0 / factor, max_relative = 1e-12);
        assert_relative_eq!(discounted.remaining_principal, 780_000.0 / factor, max_relative = 1e-12);
        assert_eq!(record.in_todays_dollars(0.0), record);
    }

    #[test]
    fn test_totals_keep_their_difference_consistent() {
        let totals = Totals::new(400_000.0, 350_000.0).in_todays_dollars(10, 0.03);
        assert_relative_eq!(totals.total_rent, 400_000.0 / 1.03f64.powi(10), max_relative = 1e-12);
        assert_relative_eq!(
            totals.difference,
            totals.total_condo_cost - totals.total_rent,
            max_relative = 1e-12
        );
    }
}
