use dioxus::prelude::*;

use crate::domain::CostBreakdown;
use crate::ui::theme;
use crate::util::format;

const PALETTE: [&str; 6] = [
    "#818cf8", // product cost
    "#38bdf8", // shipping
    "#fbbf24", // commission
    "#f472b6", // advertising
    "#94a3b8", // other costs
    "#34d399", // profit
];

const CENTER: f64 = 100.0;
const RADIUS: f64 = 88.0;

/// Proportional pie of the five cost components plus profit. A clamped
/// (negative) profit never reaches the pie; the legend carries the note.
#[component]
pub fn CostChart(breakdown: CostBreakdown) -> Element {
    let visible = visible_slices(&breakdown);
    // A single visible slice degenerates to a full disc; SVG arcs cannot
    // express it, so it gets its own shape.
    let solo_color = (visible.len() == 1).then(|| PALETTE[visible[0].index]);
    let segments = pie_segments(&visible);

    let legend: Vec<LegendEntry> = breakdown
        .slices
        .iter()
        .enumerate()
        .map(|(index, slice)| LegendEntry {
            color: PALETTE[index],
            label: slice.label,
            share: format!("{:.1}%", slice.share_percent),
            amount: format::currency(slice.amount),
        })
        .collect();

    rsx! {
        div {
            class: "{theme::PANEL} p-4",
            h2 { class: "text-sm font-semibold text-slate-200", "Cost & Profit Distribution" }
            p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "Share of every unit sold" }
            if breakdown.is_blank() {
                p { class: "mt-6 text-sm {theme::TEXT_MUTED}", "Nothing to chart yet." }
            } else {
                div {
                    class: "mt-4 flex flex-wrap items-center gap-6",
                    svg {
                        view_box: "0 0 200 200",
                        width: "200",
                        height: "200",
                        if let Some(color) = solo_color {
                            circle { cx: "{CENTER}", cy: "{CENTER}", r: "{RADIUS}", fill: color }
                        } else {
                            for segment in segments {
                                path { d: "{segment.path}", fill: segment.color }
                            }
                        }
                    }
                    ul {
                        class: "space-y-1.5 text-sm",
                        for entry in legend {
                            li {
                                class: "flex items-center gap-2",
                                span {
                                    class: "inline-block h-3 w-3 rounded-sm",
                                    style: "background-color: {entry.color}",
                                }
                                span { class: "text-slate-300", "{entry.label}" }
                                span { class: "ml-auto pl-6 tabular-nums {theme::TEXT_MUTED}", "{entry.share}" }
                                span { class: "w-20 text-right tabular-nums text-slate-400", "{entry.amount}" }
                            }
                        }
                    }
                }
                if breakdown.profit_clamped {
                    p {
                        class: "mt-3 text-xs text-rose-300",
                        "Negative profit is excluded from the chart; see the verdict above."
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct LegendEntry {
    color: &'static str,
    label: &'static str,
    share: String,
    amount: String,
}

#[derive(Clone, Debug, PartialEq)]
struct VisibleSlice {
    index: usize,
    fraction: f64,
}

struct PieSegment {
    path: String,
    color: &'static str,
}

fn visible_slices(breakdown: &CostBreakdown) -> Vec<VisibleSlice> {
    breakdown
        .slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.share_percent > 0.0)
        .map(|(index, slice)| VisibleSlice {
            index,
            fraction: slice.share_percent / 100.0,
        })
        .collect()
}

fn pie_segments(visible: &[VisibleSlice]) -> Vec<PieSegment> {
    let mut turn = 0.0;
    visible
        .iter()
        .map(|slice| {
            let start = turn;
            turn += slice.fraction;
            PieSegment {
                path: slice_path(start, turn),
                color: PALETTE[slice.index],
            }
        })
        .collect()
}

/// Wedge from `start` to `end`, both as fractions of a full turn measured
/// clockwise from 12 o'clock.
fn slice_path(start: f64, end: f64) -> String {
    let (x1, y1) = point_on_circle(start);
    let (x2, y2) = point_on_circle(end);
    let large_arc = i32::from(end - start > 0.5);
    format!(
        "M {CENTER:.3} {CENTER:.3} L {x1:.3} {y1:.3} \
         A {RADIUS:.3} {RADIUS:.3} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
    )
}

fn point_on_circle(turn: f64) -> (f64, f64) {
    let angle = (turn - 0.25) * std::f64::consts::TAU;
    (
        CENTER + RADIUS * angle.cos(),
        CENTER + RADIUS * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::domain::{compute, cost_breakdown, SimulationInput};

    #[test]
    fn test_zero_turn_is_twelve_o_clock() {
        let (x, y) = point_on_circle(0.0);
        assert_abs_diff_eq!(x, CENTER, epsilon = 1e-9);
        assert_abs_diff_eq!(y, CENTER - RADIUS, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_turn_is_three_o_clock() {
        let (x, y) = point_on_circle(0.25);
        assert_abs_diff_eq!(x, CENTER + RADIUS, epsilon = 1e-9);
        assert_abs_diff_eq!(y, CENTER, epsilon = 1e-9);
    }

    #[test]
    fn test_majority_slice_uses_the_large_arc_flag() {
        assert!(slice_path(0.0, 0.75).contains(" 1 1 "));
        assert!(slice_path(0.0, 0.25).contains(" 0 1 "));
    }

    #[test]
    fn test_segments_cover_the_whole_pie() {
        let input = SimulationInput::default();
        let breakdown = cost_breakdown(&input, &compute(&input));
        let visible = visible_slices(&breakdown);
        let covered: f64 = visible.iter().map(|slice| slice.fraction).sum();
        assert_abs_diff_eq!(covered, 1.0, epsilon = 1e-9);
        assert_eq!(pie_segments(&visible).len(), visible.len());
    }
}
