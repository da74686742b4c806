use crate::core::assumptions::{Assumptions, DownPaymentSource};
use crate::projection::{Crossover, HorizonComparison, Projection};
use crate::report::currency::{format_compact, format_currency, format_percent};
use std::fmt;

const MONEY_WIDTH: usize = 12;

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let financed = self.schedule().iter().any(|r| r.equity_loan_payment > 0.0);

        match self.discount_rate() {
            Some(rate) => writeln!(
                f,
                "=== Cost Analysis ({} years, Today's Dollars @ {}) ===",
                self.horizon_years(),
                format_percent(rate)
            )?,
            None => writeln!(f, "=== Cost Analysis ({} years) ===", self.horizon_years())?,
        }
        write!(
            f,
            "{:>4} {:>w$} {:>w$} {:>w$} {:>w$}",
            "Year",
            "Rent",
            "Mortgage",
            "Interest",
            "Principal",
            w = MONEY_WIDTH
        )?;
        if financed {
            write!(f, " {:>w$}", "Equity Loan", w = MONEY_WIDTH)?;
        }
        writeln!(
            f,
            " {:>w$} {:>w$} {:>w$} {:>w$} {:>w$} {:>w$} {:>w$}",
            "Prop. Tax",
            "HOA",
            "Tax Savings",
            "Net Condo",
            "Value",
            "Equity",
            "Balance",
            w = MONEY_WIDTH
        )?;

        for r in self.schedule() {
            write!(
                f,
                "{:>4} {:>w$} {:>w$} {:>w$} {:>w$}",
                r.year,
                format_currency(r.rent_cost),
                format_currency(r.mortgage_payment),
                format_currency(r.interest_portion),
                format_currency(r.principal_portion),
                w = MONEY_WIDTH
            )?;
            if financed {
                write!(f, " {:>w$}", format_currency(r.equity_loan_payment), w = MONEY_WIDTH)?;
            }
            writeln!(
                f,
                " {:>w$} {:>w$} {:>w$} {:>w$} {:>w$} {:>w$} {:>w$}",
                format_currency(r.property_tax),
                format_currency(r.hoa),
                format_currency(r.tax_savings),
                format_currency(r.net_condo_cost),
                format_currency(r.property_value),
                format_currency(r.equity),
                format_currency(r.remaining_principal),
                w = MONEY_WIDTH
            )?;
        }

        let sale = self.settlement();
        let totals = self.totals();
        writeln!(f, "\n=== Sale and Total Cost Summary ===")?;
        writeln!(f, "Final Property Value:   {}", format_currency(sale.final_value))?;
        writeln!(f, "Realtor Fees:           {}", format_currency(sale.realtor_fees))?;
        writeln!(f, "Capital Gains Tax:      {}", format_currency(sale.capital_gains_tax))?;
        writeln!(f, "Remaining Mortgage:     {}", format_currency(sale.remaining_principal))?;
        if financed {
            writeln!(f, "Remaining Equity Loan:  {}", format_currency(sale.remaining_equity_loan))?;
        }
        writeln!(f, "Net Sale Proceeds:      {}", format_currency(sale.net_sale_proceeds))?;
        writeln!(f, "Total Condo Costs:      {}", format_currency(totals.total_condo_cost))?;
        writeln!(f, "Total Apartment Costs:  {}", format_currency(totals.total_rent))?;
        writeln!(f, "Difference (Condo - Apartment): {}", format_currency(totals.difference))?;
        Ok(())
    }
}

impl fmt::Display for Assumptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Assumptions ===")?;
        writeln!(f, "Condo Price:          {}", format_currency(self.price))?;
        writeln!(
            f,
            "Down Payment:         {} = {}",
            format_percent(self.down_payment_fraction),
            format_currency(self.down_payment())
        )?;
        writeln!(f, "Down Payment Source:  {}", self.down_payment_source)?;
        match self.down_payment_source {
            DownPaymentSource::Stocks => writeln!(
                f,
                "Tax on Down Payment:  {}",
                format_currency(self.down_payment() * self.capital_gains_rate)
            )?,
            DownPaymentSource::EquityLoan => writeln!(
                f,
                "Equity Loan:          {} over {} years",
                format_percent(self.equity_loan_rate),
                self.equity_loan_term_years
            )?,
            DownPaymentSource::Cash => {}
        }
        writeln!(
            f,
            "Mortgage:             {} over {} years",
            format_percent(self.mortgage_rate),
            self.mortgage_term_years
        )?;
        writeln!(f, "Rent:                 {}/mo", format_currency(self.monthly_rent))?;
        writeln!(f, "Rent Increase:        {}/yr", format_percent(self.rent_growth_rate))?;
        writeln!(f, "Property Tax:         {}/yr of value", format_percent(self.property_tax_rate))?;
        writeln!(f, "HOA Fee:              {}/mo of value", format_percent(self.monthly_hoa_rate))?;
        writeln!(f, "Federal Tax:          {}", format_percent(self.federal_tax_rate))?;
        writeln!(f, "State Tax:            {}", format_percent(self.state_tax_rate))?;
        writeln!(f, "Appreciation:         {}/yr", format_percent(self.appreciation_rate))?;
        writeln!(f, "Realtor Fee:          {}", format_percent(self.realtor_fee_rate))?;
        writeln!(f, "Capital Gains:        {}", format_percent(self.capital_gains_rate))?;
        writeln!(f, "Horizon:              {} years", self.horizon_years)?;
        Ok(())
    }
}

/// Multi-horizon comparison with its crossover verdict.
pub struct ComparisonTable<'a> {
    pub rows: &'a [HorizonComparison],
    pub crossover: Option<Crossover>,
    /// Set when the rows are in today's dollars at this rate.
    pub discount_rate: Option<f64>,
}

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.discount_rate {
            Some(rate) => writeln!(
                f,
                "=== Cumulative Costs by Sale Year (Today's Dollars @ {}) ===",
                format_percent(rate)
            )?,
            None => writeln!(f, "=== Cumulative Costs by Sale Year ===")?,
        }
        writeln!(
            f,
            "{:>4} {:>w$} {:>w$} {:>w$} {:>w$}",
            "Year",
            "Apartment",
            "Net Condo",
            "Difference",
            "Value",
            w = MONEY_WIDTH
        )?;
        for row in self.rows {
            let marker = if row.buying_is_cheaper() { " *" } else { "" };
            writeln!(
                f,
                "{:>4} {:>w$} {:>w$} {:>w$} {:>w$}{}",
                row.year,
                format_compact(row.total_rent),
                format_compact(row.total_condo_cost),
                format_compact(row.difference()),
                format_compact(row.final_property_value),
                marker,
                w = MONEY_WIDTH
            )?;
        }
        writeln!(f, "(* buying cheaper)")?;

        let span = self.rows.len();
        match self.crossover {
            Some(Crossover::Between(year)) => writeln!(
                f,
                "The crossover point occurs between years {} and {}.",
                year,
                year + 1
            ),
            Some(Crossover::RentingCheaperThroughout) => writeln!(
                f,
                "Renting remains cheaper than buying throughout the {}-year period.",
                span
            ),
            Some(Crossover::BuyingCheaperThroughout) => writeln!(
                f,
                "Buying remains cheaper than renting throughout the {}-year period.",
                span
            ),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{find_crossover, ProjectionEngine};

    #[test]
    fn test_projection_report_lists_every_year() {
        let projection = ProjectionEngine::project(&Assumptions::default().with_horizon(3)).unwrap();
        let text = projection.to_string();
        assert!(text.contains("=== Cost Analysis (3 years) ==="));
        assert!(text.contains("$36,000"));
        assert!(text.contains("Net Sale Proceeds:"));
        assert!(!text.contains("Equity Loan"));
    }

    #[test]
    fn test_discounted_report_is_labelled() {
        let projection = ProjectionEngine::project(&Assumptions::default().with_horizon(2))
            .unwrap()
            .in_todays_dollars(0.03);
        let text = projection.to_string();
        assert!(text.contains("=== Cost Analysis (2 years, Today's Dollars @ 3%) ==="));
        // 36,000 discounted one year at 3%.
        assert!(text.contains("$34,951"));
    }

    #[test]
    fn test_financed_report_shows_equity_loan() {
        let assumptions = Assumptions {
            down_payment_source: DownPaymentSource::EquityLoan,
            horizon_years: 2,
            ..Default::default()
        };
        let text = ProjectionEngine::project(&assumptions).unwrap().to_string();
        assert!(text.contains("Equity Loan"));
        assert!(text.contains("Remaining Equity Loan:"));
    }

    #[test]
    fn test_assumptions_report() {
        let text = Assumptions::default().to_string();
        assert!(text.contains("Condo Price:          $1,000,000"));
        assert!(text.contains("20% = $200,000"));
        assert!(text.contains("6.5% over 30 years"));
        assert!(text.contains("Tax on Down Payment:  $30,000"));
    }

    #[test]
    fn test_comparison_report_states_crossover() {
        let rows = ProjectionEngine::compare_across_years(&Assumptions::default(), 4).unwrap();
        let table = ComparisonTable {
            rows: &rows,
            crossover: find_crossover(&rows),
            discount_rate: Some(0.03),
        };
        let text = table.to_string();
        assert!(text.contains("Today's Dollars @ 3%"));
        assert!(text.contains("4-year period") || text.contains("crossover point"));
    }
}
