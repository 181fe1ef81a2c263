//! Domain logic for the profitability simulator lives here.

pub mod calculator;
pub mod chart;
pub mod entities;
pub mod history;

pub use calculator::{compute, simulate, LOW_MARGIN_THRESHOLD};
pub use chart::{cost_breakdown, CostBreakdown, CostSlice};
pub use entities::{BreakEven, Simulation, SimulationInput, SimulationResult, Verdict};
pub use history::{HistoryEntry, SessionHistory, DISPLAY_LIMIT};
