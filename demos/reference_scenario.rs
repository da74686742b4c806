//! Reference rent-versus-buy scenario.
//!
//! Projects a $1M condo bought with 20% down over a ten-year horizon and
//! shows when buying starts to beat renting.

use rent_vs_buy::core::assumptions::Assumptions;
use rent_vs_buy::projection::{find_crossover, Crossover, ProjectionEngine};
use rent_vs_buy::report::{format_currency, ComparisonTable};

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  rent-vs-buy: Reference Scenario         ║");
    println!("╚══════════════════════════════════════════╝\n");

    let assumptions = Assumptions::default();
    println!("{}", assumptions);

    // --- Scenario 1: Ten-year hold ---
    println!("━━━ Scenario 1: Sell After {} Years ━━━\n", assumptions.horizon_years);

    let projection = match ProjectionEngine::project(&assumptions) {
        Ok(projection) => projection,
        Err(err) => {
            eprintln!("projection failed: {}", err);
            return;
        }
    };
    println!("{}", projection);

    // --- Scenario 2: Every sale year up to 30 ---
    println!("━━━ Scenario 2: Cumulative Costs by Sale Year ━━━\n");

    let rows = match ProjectionEngine::compare_across_years(&assumptions, 30) {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("comparison failed: {}", err);
            return;
        }
    };
    let crossover = find_crossover(&rows);
    let table = ComparisonTable {
        rows: &rows,
        crossover,
        discount_rate: None,
    };
    println!("{}", table);

    // Break-even summary
    println!("━━━ Break-even ━━━\n");
    match crossover {
        Some(Crossover::Between(year)) => {
            let row = &rows[year as usize];
            println!(
                "  Selling in year {} saves {} over renting",
                row.year,
                format_currency(-row.difference())
            );
        }
        Some(Crossover::RentingCheaperThroughout) => {
            println!("  Renting stays cheaper through year 30");
        }
        Some(Crossover::BuyingCheaperThroughout) => {
            println!("  Buying is cheaper from the first year");
        }
        None => println!("  No horizons to compare"),
    }
}
