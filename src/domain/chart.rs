//! Data behind the cost-distribution pie: six labeled magnitudes (five cost
//! components plus profit) with their share of the whole.
//!
//! A pie has no way to draw a negative slice, so a losing product gets its
//! profit slice clamped to zero and flagged; the UI annotates the loss
//! instead of letting the chart invent geometry for it.

use super::entities::{SimulationInput, SimulationResult};

#[derive(Clone, Debug, PartialEq)]
pub struct CostSlice {
    pub label: &'static str,
    pub amount: f64,
    /// Share of the clamped slice sum, in percent. 0 when the sum is 0.
    pub share_percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CostBreakdown {
    pub slices: Vec<CostSlice>,
    /// True when a negative profit was clamped out of the chart.
    pub profit_clamped: bool,
}

impl CostBreakdown {
    /// True when every slice is zero and there is nothing to draw.
    pub fn is_blank(&self) -> bool {
        self.slices.iter().all(|slice| slice.amount == 0.0)
    }
}

pub fn cost_breakdown(input: &SimulationInput, result: &SimulationResult) -> CostBreakdown {
    let profit_clamped = result.profit < 0.0;
    let components = [
        ("Product cost", input.product_cost),
        ("Shipping", input.shipping_cost),
        ("Commission", result.commission_value),
        ("Advertising", input.advertising_cost),
        ("Other costs", input.other_variable_costs),
        ("Profit", result.profit),
    ];

    let amounts: Vec<(&'static str, f64)> = components
        .into_iter()
        .map(|(label, amount)| (label, amount.max(0.0)))
        .collect();
    let total: f64 = amounts.iter().map(|(_, amount)| amount).sum();

    let slices = amounts
        .into_iter()
        .map(|(label, amount)| CostSlice {
            label,
            amount,
            share_percent: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    CostBreakdown {
        slices,
        profit_clamped,
    }
}
