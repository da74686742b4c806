use crate::core::assumptions::Assumptions;
use crate::core::error::{ensure_year_count, ProjectionError};
use crate::projection::discount::present_value;
use crate::projection::engine::ProjectionEngine;
use serde::{Deserialize, Serialize};

/// Cumulative costs if the property were sold after `year` years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonComparison {
    pub year: u32,
    pub total_rent: f64,
    pub total_condo_cost: f64,
    pub final_property_value: f64,
}

impl HorizonComparison {
    /// `total_condo_cost - total_rent`.
    pub fn difference(&self) -> f64 {
        self.total_condo_cost - self.total_rent
    }

    pub fn buying_is_cheaper(&self) -> bool {
        self.total_condo_cost < self.total_rent
    }

    /// Same row with every amount discounted back `year` years.
    pub fn in_todays_dollars(&self, discount_rate: f64) -> Self {
        Self {
            year: self.year,
            total_rent: present_value(self.total_rent, self.year, discount_rate),
            total_condo_cost: present_value(self.total_condo_cost, self.year, discount_rate),
            final_property_value: present_value(self.final_property_value, self.year, discount_rate),
        }
    }
}

/// Where the cheaper option flips across a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Crossover {
    /// The cheaper option changes between horizon `y` and `y + 1`.
    Between(u32),
    RentingCheaperThroughout,
    BuyingCheaperThroughout,
}

impl ProjectionEngine {
    /// Re-run [`ProjectionEngine::project`] for every horizon `1..=max_years`.
    ///
    /// Each horizon is independent: the loan and appreciation restart from
    /// year 1 and the property is sold in that year. This costs
    /// O(max_years²) amortization periods.
    pub fn compare_across_years(
        assumptions: &Assumptions,
        max_years: u32,
    ) -> Result<Vec<HorizonComparison>, ProjectionError> {
        ensure_year_count("max_years", max_years)?;

        let rows = (1..=max_years)
            .map(|year| -> Result<HorizonComparison, ProjectionError> {
                let projection = ProjectionEngine::project(&assumptions.with_horizon(year))?;
                Ok(HorizonComparison {
                    year,
                    total_rent: projection.totals().total_rent,
                    total_condo_cost: projection.totals().total_condo_cost,
                    final_property_value: projection.settlement().final_value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("compared {} horizons", rows.len());
        Ok(rows)
    }

    /// [`ProjectionEngine::compare_across_years`] expressed in today's
    /// dollars at `assumptions.discount_rate`.
    pub fn compare_in_todays_dollars(
        assumptions: &Assumptions,
        max_years: u32,
    ) -> Result<Vec<HorizonComparison>, ProjectionError> {
        let rows = Self::compare_across_years(assumptions, max_years)?;
        Ok(rows
            .iter()
            .map(|row| row.in_todays_dollars(assumptions.discount_rate))
            .collect())
    }
}

/// Locate the first horizon after which the cheaper option changes.
///
/// A move from either side into a tie counts as a change; a move out of a
/// tie does not. Without a change the verdict follows the last row, with an
/// all-tie comparison reported as renting cheaper. Returns `None` for an
/// empty comparison.
pub fn find_crossover(rows: &[HorizonComparison]) -> Option<Crossover> {
    let last = rows.last()?;
    if let Some(pair) = rows.windows(2).find(|pair| flips(&pair[0], &pair[1])) {
        return Some(Crossover::Between(pair[0].year));
    }
    if last.buying_is_cheaper() {
        Some(Crossover::BuyingCheaperThroughout)
    } else {
        Some(Crossover::RentingCheaperThroughout)
    }
}

fn flips(current: &HorizonComparison, next: &HorizonComparison) -> bool {
    let renting_then = current.total_rent < current.total_condo_cost;
    let buying_then = current.total_rent > current.total_condo_cost;
    (renting_then && next.total_rent >= next.total_condo_cost)
        || (buying_then && next.total_rent <= next.total_condo_cost)
}
