use dioxus::prelude::*;

use super::verdict_banner::VerdictChip;
use crate::domain::Verdict;
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub time_label: String,
    pub sell_price: String,
    pub profit: String,
    pub margin: String,
    pub break_even: String,
    pub verdict: Verdict,
}

/// The rolling list of past simulations, most recent first.
#[component]
pub fn HistoryList(rows: Vec<HistoryRow>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Time" }
                        th { class: "px-4 py-3 font-medium", "Sell price" }
                        th { class: "px-4 py-3 font-medium", "Profit" }
                        th { class: "px-4 py-3 font-medium", "Margin" }
                        th { class: "px-4 py-3 font-medium", "Break-even" }
                        th { class: "px-4 py-3 font-medium", "Verdict" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_DIVIDER}",
                    for row in rows {
                        tr {
                            key: "{row.id}",
                            td { class: "px-4 py-3 tabular-nums {theme::TEXT_MUTED}", "{row.time_label}" }
                            td { class: "px-4 py-3 tabular-nums text-slate-300", "{row.sell_price}" }
                            td { class: "px-4 py-3 tabular-nums text-slate-300", "{row.profit}" }
                            td { class: "px-4 py-3 tabular-nums text-slate-300", "{row.margin}" }
                            td { class: "px-4 py-3 tabular-nums text-slate-300", "{row.break_even}" }
                            td {
                                class: "px-4 py-3",
                                VerdictChip { verdict: row.verdict }
                            }
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::TEXT_MUTED}",
                                colspan: "6",
                                "Adjust the inputs to record your first simulation."
                            }
                        }
                    }
                }
            }
        }
    }
}
