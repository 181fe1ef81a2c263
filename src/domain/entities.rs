use std::fmt;

/// Per-unit inputs of one product simulation.
///
/// All monetary fields share a single currency unit. `commission_rate` is a
/// fraction (0.10 = 10 %). Nothing here is validated; the calculator accepts
/// whatever the form hands over and lets the arithmetic speak.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationInput {
    pub sell_price: f64,
    pub product_cost: f64,
    pub shipping_cost: f64,
    pub commission_rate: f64,
    pub advertising_cost: f64,
    pub other_variable_costs: f64,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            sell_price: 29_990.0,
            product_cost: 10_000.0,
            shipping_cost: 2_000.0,
            commission_rate: 0.10,
            advertising_cost: 5_000.0,
            other_variable_costs: 1_000.0,
        }
    }
}

/// Derived metrics for one simulation, immutable once computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    pub commission_value: f64,
    pub total_cost: f64,
    pub profit: f64,
    /// Profit as a percentage of the sell price; 0 when the sell price is 0.
    pub margin_percent: f64,
    pub break_even: BreakEven,
    pub verdict: Verdict,
}

/// Units needed to cover the modeled total cost, or the sentinel when the
/// per-unit contribution is non-positive. Never a float infinity or NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BreakEven {
    Units(f64),
    NotProfitable,
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Units(units) => write!(f, "\u{2248}{units:.1} units"),
            BreakEven::NotProfitable => write!(f, "Not profitable"),
        }
    }
}

/// Three-tier advisory derived from profit sign and the 15 % margin
/// threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Loss,
    LowMargin,
    Profitable,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Loss => "Loss",
            Verdict::LowMargin => "Low margin",
            Verdict::Profitable => "Profitable",
        }
    }

    /// The fixed advisory shown under the traffic light.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Loss => "This product loses money on every unit. Review your costs.",
            Verdict::LowMargin => {
                "Thin margin. Consider raising the price or trimming variable costs."
            }
            Verdict::Profitable => "Healthy margin. This product is ready to scale.",
        }
    }
}

/// One full snapshot: the inputs together with everything derived from them.
///
/// Equality over the whole snapshot is what the session history uses to skip
/// duplicate entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simulation {
    pub input: SimulationInput,
    pub result: SimulationResult,
}
