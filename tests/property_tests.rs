use rent_vs_buy::amortization::{monthly_payment, payment_breakdown};
use rent_vs_buy::core::assumptions::{Assumptions, DownPaymentSource};
use rent_vs_buy::projection::{property_value, ProjectionEngine};
use proptest::prelude::*;

/// Loan principal between 1,000 and 5,000,000.
fn arb_principal() -> impl Strategy<Value = f64> {
    (1_000u32..5_000_000u32).prop_map(f64::from)
}

/// Annual rate in percent, 0% to 15% in basis-point steps.
fn arb_rate_percent() -> impl Strategy<Value = f64> {
    (0u32..=1_500u32).prop_map(|bp| f64::from(bp) / 100.0)
}

fn arb_term() -> impl Strategy<Value = u32> {
    1u32..=40u32
}

fn arb_source() -> impl Strategy<Value = DownPaymentSource> {
    prop::sample::select(vec![
        DownPaymentSource::Stocks,
        DownPaymentSource::Cash,
        DownPaymentSource::EquityLoan,
    ])
}

/// Random but valid assumption set with a horizon of at most 15 years.
fn arb_assumptions() -> impl Strategy<Value = Assumptions> {
    (
        (500u32..10_000u32, 0u32..=8u32, 100_000u32..3_000_000u32, 0u32..=100u32),
        (arb_source(), 0u32..=15u32, 1u32..=30u32, 0u32..=12u32),
        (0u32..=30u32, 0u32..=20u32, 0u32..=10u32, 1u32..=15u32),
    )
        .prop_map(
            |(
                (rent, growth, price, down),
                (source, mortgage_rate, term, appreciation),
                (property_tax_bp, hoa_bp, realtor, horizon),
            )| Assumptions {
                monthly_rent: f64::from(rent),
                rent_growth_rate: f64::from(growth) / 100.0,
                price: f64::from(price),
                down_payment_fraction: f64::from(down) / 100.0,
                down_payment_source: source,
                mortgage_rate: f64::from(mortgage_rate) / 100.0,
                mortgage_term_years: term,
                appreciation_rate: f64::from(appreciation) / 100.0,
                property_tax_rate: f64::from(property_tax_bp) / 1_000.0,
                monthly_hoa_rate: f64::from(hoa_bp) / 10_000.0,
                realtor_fee_rate: f64::from(realtor) / 100.0,
                horizon_years: horizon,
                ..Default::default()
            },
        )
}

fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= rel * scale
}

proptest! {
    // ===================================================================
    // Principal portions over the whole schedule retire the loan.
    // ===================================================================
    #[test]
    fn principal_portions_sum_to_principal(
        principal in arb_principal(),
        rate in arb_rate_percent(),
        term in 1u32..=30u32,
    ) {
        let repaid: f64 = (1..=term * 12)
            .map(|k| payment_breakdown(principal, rate, term, k).unwrap().principal)
            .sum();
        prop_assert!(
            approx_eq(repaid, principal, 1e-6),
            "repaid {} of {}", repaid, principal
        );
    }

    // ===================================================================
    // Level payment matches the annuity formula, or P/n at a zero rate.
    // ===================================================================
    #[test]
    fn monthly_payment_matches_closed_form(
        principal in arb_principal(),
        rate in arb_rate_percent(),
        term in arb_term(),
    ) {
        let payment = monthly_payment(principal, rate, term).unwrap();
        let n = f64::from(term * 12);
        let expected = if rate == 0.0 {
            principal / n
        } else {
            let r = rate / 100.0 / 12.0;
            principal * r * (1.0 + r).powf(n) / ((1.0 + r).powf(n) - 1.0)
        };
        prop_assert!(approx_eq(payment, expected, 1e-9));
    }

    // ===================================================================
    // Every payment splits into non-negative interest and principal.
    // ===================================================================
    #[test]
    fn payment_split_is_consistent(
        principal in arb_principal(),
        rate in arb_rate_percent(),
        term in arb_term(),
        index_seed in 0u32..480u32,
    ) {
        let index = index_seed % (term * 12) + 1;
        let payment = monthly_payment(principal, rate, term).unwrap();
        let split = payment_breakdown(principal, rate, term, index).unwrap();
        prop_assert!(split.interest >= -1e-9 * principal);
        prop_assert!(split.principal > 0.0);
        prop_assert!(approx_eq(split.total(), payment, 1e-9));
    }

    // ===================================================================
    // Remaining principal never increases year over year.
    // ===================================================================
    #[test]
    fn remaining_principal_is_non_increasing(assumptions in arb_assumptions()) {
        let projection = ProjectionEngine::project(&assumptions).unwrap();
        let mut previous = assumptions.loan_amount();
        for record in projection.schedule() {
            prop_assert!(record.remaining_principal <= previous + 1e-6);
            previous = record.remaining_principal;
        }
    }

    // ===================================================================
    // Property value compounds exactly at the appreciation rate.
    // ===================================================================
    #[test]
    fn property_value_compounds(assumptions in arb_assumptions()) {
        let projection = ProjectionEngine::project(&assumptions).unwrap();
        for record in projection.schedule() {
            let expected = assumptions.price
                * (1.0 + assumptions.appreciation_rate).powi(record.year as i32);
            prop_assert_eq!(record.property_value, expected);
            prop_assert_eq!(
                record.property_value,
                property_value(assumptions.price, assumptions.appreciation_rate, record.year)
            );
        }
    }

    // ===================================================================
    // Each horizon of a comparison equals a direct projection.
    // ===================================================================
    #[test]
    fn comparison_rederives_each_horizon(assumptions in arb_assumptions()) {
        let max_years = assumptions.horizon_years;
        let rows = ProjectionEngine::compare_across_years(&assumptions, max_years).unwrap();
        prop_assert_eq!(rows.len(), max_years as usize);
        for row in &rows {
            let direct = ProjectionEngine::project(&assumptions.with_horizon(row.year)).unwrap();
            prop_assert_eq!(row.total_rent, direct.totals().total_rent);
            prop_assert_eq!(row.total_condo_cost, direct.totals().total_condo_cost);
            prop_assert_eq!(row.final_property_value, direct.settlement().final_value);
        }
    }

    // ===================================================================
    // Doubling every monetary input doubles every monetary output.
    // ===================================================================
    #[test]
    fn monetary_outputs_scale_linearly(assumptions in arb_assumptions()) {
        let doubled = Assumptions {
            price: assumptions.price * 2.0,
            monthly_rent: assumptions.monthly_rent * 2.0,
            ..assumptions.clone()
        };
        let base = ProjectionEngine::project(&assumptions).unwrap();
        let scaled = ProjectionEngine::project(&doubled).unwrap();

        for (b, s) in base.schedule().iter().zip(scaled.schedule()) {
            for (x, y) in [
                (b.rent_cost, s.rent_cost),
                (b.mortgage_payment, s.mortgage_payment),
                (b.interest_portion, s.interest_portion),
                (b.principal_portion, s.principal_portion),
                (b.equity_loan_payment, s.equity_loan_payment),
                (b.property_tax, s.property_tax),
                (b.hoa, s.hoa),
                (b.tax_savings, s.tax_savings),
                (b.net_condo_cost, s.net_condo_cost),
                (b.property_value, s.property_value),
                (b.equity, s.equity),
            ] {
                prop_assert!(approx_eq(2.0 * x, y, 1e-9), "{} doubled to {}", x, y);
            }
        }

        let (bt, st) = (base.totals(), scaled.totals());
        let scale = bt.total_rent.abs().max(bt.total_condo_cost.abs());
        prop_assert!((2.0 * bt.total_rent - st.total_rent).abs() <= 1e-9 * scale);
        prop_assert!((2.0 * bt.total_condo_cost - st.total_condo_cost).abs() <= 1e-9 * scale);
        prop_assert!((2.0 * bt.difference - st.difference).abs() <= 1e-9 * scale);
        prop_assert!(approx_eq(
            2.0 * base.settlement().net_sale_proceeds,
            scaled.settlement().net_sale_proceeds,
            1e-9
        ));
    }

    // ===================================================================
    // Year records obey the per-year accounting identities.
    // ===================================================================
    #[test]
    fn year_records_are_internally_consistent(assumptions in arb_assumptions()) {
        let projection = ProjectionEngine::project(&assumptions).unwrap();
        let combined = assumptions.combined_tax_rate();
        for r in projection.schedule() {
            prop_assert!(approx_eq(
                r.tax_savings,
                (r.interest_portion + r.property_tax) * combined,
                1e-12
            ));
            prop_assert!(approx_eq(
                r.net_condo_cost,
                r.mortgage_payment + r.property_tax + r.hoa + r.equity_loan_payment - r.tax_savings,
                1e-12
            ));
            prop_assert!(approx_eq(
                r.equity,
                r.property_value - r.remaining_principal - r.remaining_equity_loan,
                1e-12
            ));
        }
    }
}
