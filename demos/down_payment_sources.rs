//! Down payment funding comparison.
//!
//! Runs the same purchase with the down payment taken from cash, from
//! sold stocks, and from an equity loan.

use rent_vs_buy::core::assumptions::{Assumptions, DownPaymentSource};
use rent_vs_buy::projection::ProjectionEngine;
use rent_vs_buy::report::format_currency;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  rent-vs-buy: Down Payment Sources       ║");
    println!("╚══════════════════════════════════════════╝\n");

    let base = Assumptions {
        horizon_years: 15,
        ..Default::default()
    };

    println!(
        "  {:<12} {:>14} {:>14} {:>14} {:>14}",
        "Source", "Upfront Tax", "Sale Proceeds", "Condo Cost", "vs Renting"
    );
    println!("  {}", "-".repeat(72));

    for source in [
        DownPaymentSource::Cash,
        DownPaymentSource::Stocks,
        DownPaymentSource::EquityLoan,
    ] {
        let assumptions = Assumptions {
            down_payment_source: source,
            ..base.clone()
        };
        let projection = match ProjectionEngine::project(&assumptions) {
            Ok(projection) => projection,
            Err(err) => {
                eprintln!("{}: projection failed: {}", source, err);
                continue;
            }
        };
        let totals = projection.totals();
        println!(
            "  {:<12} {:>14} {:>14} {:>14} {:>14}",
            format!("{:?}", source),
            format_currency(projection.down_payment_tax()),
            format_currency(projection.settlement().net_sale_proceeds),
            format_currency(totals.total_condo_cost),
            format_currency(totals.difference),
        );
    }

    println!();
    println!("  Positive \"vs Renting\" means buying costs more than renting.");
}
