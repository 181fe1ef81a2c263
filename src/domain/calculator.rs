//! The profitability engine: six numbers in, five derived metrics and a
//! verdict out. Pure, side-effect free, and total: degenerate inputs resolve
//! to defined sentinel values instead of errors.

use super::entities::{BreakEven, Simulation, SimulationInput, SimulationResult, Verdict};

/// Margin (in percent of sell price) below which a non-losing product is
/// still flagged as barely worth selling.
pub const LOW_MARGIN_THRESHOLD: f64 = 15.0;

/// Computes every derived metric for one simulation.
///
/// Negative or zero inputs are accepted and propagate arithmetically. A zero
/// sell price yields a 0 % margin rather than a division error, and a
/// non-positive per-unit contribution yields [`BreakEven::NotProfitable`]
/// rather than an infinity.
pub fn compute(input: &SimulationInput) -> SimulationResult {
    let commission_value = input.sell_price * input.commission_rate;
    let total_cost = input.product_cost
        + input.shipping_cost
        + commission_value
        + input.advertising_cost
        + input.other_variable_costs;
    let profit = input.sell_price - total_cost;

    let margin_percent = if input.sell_price == 0.0 {
        0.0
    } else {
        profit / input.sell_price * 100.0
    };

    // The denominator treats total cost as the per-unit contribution base.
    // That is the model this tool has always shipped with; keep it.
    let contribution = input.sell_price - total_cost;
    let break_even = if contribution > 0.0 {
        BreakEven::Units(total_cost / contribution)
    } else {
        BreakEven::NotProfitable
    };

    SimulationResult {
        commission_value,
        total_cost,
        profit,
        margin_percent,
        break_even,
        verdict: classify(profit, margin_percent),
    }
}

/// Convenience wrapper bundling the input with its computed result.
pub fn simulate(input: SimulationInput) -> Simulation {
    let result = compute(&input);
    Simulation { input, result }
}

fn classify(profit: f64, margin_percent: f64) -> Verdict {
    if profit < 0.0 {
        Verdict::Loss
    } else if margin_percent < LOW_MARGIN_THRESHOLD {
        Verdict::LowMargin
    } else {
        Verdict::Profitable
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn input(
        sell_price: f64,
        product_cost: f64,
        shipping_cost: f64,
        commission_rate: f64,
        advertising_cost: f64,
        other_variable_costs: f64,
    ) -> SimulationInput {
        SimulationInput {
            sell_price,
            product_cost,
            shipping_cost,
            commission_rate,
            advertising_cost,
            other_variable_costs,
        }
    }

    #[test]
    fn test_default_input_is_low_margin() {
        let result = compute(&SimulationInput::default());
        assert_abs_diff_eq!(result.commission_value, 2_999.0);
        assert_abs_diff_eq!(result.total_cost, 20_999.0);
        assert_abs_diff_eq!(result.profit, 9.0);
        assert_abs_diff_eq!(result.margin_percent, 9.0 / 29_990.0 * 100.0);
        assert_eq!(result.verdict, Verdict::LowMargin);
        match result.break_even {
            BreakEven::Units(units) => {
                assert_abs_diff_eq!(units, 20_999.0 / 8_991.0, epsilon = 1e-9);
            }
            BreakEven::NotProfitable => panic!("defaults should break even"),
        }
    }

    #[test]
    fn test_loss_scenario() {
        let result = compute(&input(10_000.0, 8_000.0, 2_000.0, 0.10, 3_000.0, 1_000.0));
        assert_abs_diff_eq!(result.commission_value, 1_000.0);
        assert_abs_diff_eq!(result.total_cost, 15_000.0);
        assert_abs_diff_eq!(result.profit, -5_000.0);
        assert_eq!(result.verdict, Verdict::Loss);
        assert_eq!(result.break_even, BreakEven::NotProfitable);
    }

    #[test]
    fn test_profitable_scenario() {
        let result = compute(&input(50_000.0, 10_000.0, 2_000.0, 0.05, 3_000.0, 1_000.0));
        assert_abs_diff_eq!(result.commission_value, 2_500.0);
        assert_abs_diff_eq!(result.total_cost, 18_500.0);
        assert_abs_diff_eq!(result.profit, 31_500.0);
        assert_abs_diff_eq!(result.margin_percent, 63.0);
        assert_eq!(result.verdict, Verdict::Profitable);
        match result.break_even {
            BreakEven::Units(units) => {
                assert_abs_diff_eq!(units, 18_500.0 / 31_500.0, epsilon = 1e-9);
            }
            BreakEven::NotProfitable => panic!("profitable product must break even"),
        }
    }

    #[test]
    fn test_cost_and_profit_identities() {
        let samples = [
            input(29_990.0, 10_000.0, 2_000.0, 0.10, 5_000.0, 1_000.0),
            input(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            input(-500.0, 100.0, 50.0, 0.25, 10.0, 5.0),
            input(1.0, 0.5, 0.1, 0.033, 0.2, 0.01),
        ];
        for sample in samples {
            let result = compute(&sample);
            let expected_total = sample.product_cost
                + sample.shipping_cost
                + sample.sell_price * sample.commission_rate
                + sample.advertising_cost
                + sample.other_variable_costs;
            assert_abs_diff_eq!(result.total_cost, expected_total);
            assert_abs_diff_eq!(result.profit, sample.sell_price - expected_total);
        }
    }

    #[test]
    fn test_zero_sell_price_yields_zero_margin() {
        let result = compute(&input(0.0, 100.0, 10.0, 0.10, 0.0, 0.0));
        assert_eq!(result.margin_percent, 0.0);
        assert!(result.margin_percent.is_finite());
        assert_eq!(result.break_even, BreakEven::NotProfitable);
        assert_eq!(result.verdict, Verdict::Loss);
    }

    #[test]
    fn test_break_even_sentinel_at_exact_break_point() {
        // sell price exactly equals total cost: contribution is 0, sentinel.
        let result = compute(&input(2_000.0, 1_000.0, 500.0, 0.0, 300.0, 200.0));
        assert_abs_diff_eq!(result.profit, 0.0);
        assert_eq!(result.break_even, BreakEven::NotProfitable);
        // profit of exactly zero is not a loss.
        assert_eq!(result.verdict, Verdict::LowMargin);
    }

    #[test]
    fn test_margin_threshold_boundary() {
        // 15 % margin exactly: commission-free product sold at cost / 0.85.
        let sell = 100.0;
        let result = compute(&input(sell, 85.0, 0.0, 0.0, 0.0, 0.0));
        assert_abs_diff_eq!(result.margin_percent, 15.0);
        assert_eq!(result.verdict, Verdict::Profitable);

        let just_below = compute(&input(sell, 85.01, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(just_below.verdict, Verdict::LowMargin);
    }

    #[test]
    fn test_negative_inputs_propagate() {
        // A negative advertising spend (a rebate) simply raises the profit.
        let base = compute(&input(1_000.0, 300.0, 50.0, 0.10, 100.0, 20.0));
        let rebated = compute(&input(1_000.0, 300.0, 50.0, 0.10, -100.0, 20.0));
        assert_abs_diff_eq!(rebated.profit - base.profit, 200.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let sample = input(29_990.0, 10_000.0, 2_000.0, 0.10, 5_000.0, 1_000.0);
        let first = compute(&sample);
        let second = compute(&sample);
        assert_eq!(first, second);
        assert_eq!(simulate(sample), simulate(sample));
    }
}
