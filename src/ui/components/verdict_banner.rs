use dioxus::prelude::*;

use crate::domain::Verdict;

fn verdict_theme(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Loss => "border-rose-500/40 bg-rose-500/10 text-rose-200",
        Verdict::LowMargin => "border-amber-500/40 bg-amber-500/10 text-amber-200",
        Verdict::Profitable => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
    }
}

/// Traffic-light advisory for the current simulation.
#[component]
pub fn VerdictBanner(verdict: Verdict) -> Element {
    let theme = verdict_theme(verdict);
    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {theme}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Verdict" }
                span { class: "text-xs font-semibold uppercase", "{verdict.label()}" }
            }
            p { class: "mt-2 text-sm", "{verdict.message()}" }
        }
    }
}

/// Compact pill used by the history rows.
#[component]
pub fn VerdictChip(verdict: Verdict) -> Element {
    let theme = verdict_theme(verdict);
    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {theme}",
            "{verdict.label()}"
        }
    }
}
