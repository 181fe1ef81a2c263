use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{
        cost_breakdown, simulate, HistoryEntry, SessionHistory, SimulationInput, DISPLAY_LIMIT,
    },
    infra,
    ui::{
        components::{
            cost_chart::CostChart,
            history_list::{HistoryList, HistoryRow},
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
            verdict_banner::VerdictBanner,
        },
        theme,
    },
    util::format,
};

#[component]
pub fn SimulatorPage() -> Element {
    let history = use_context::<Signal<SessionHistory>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let defaults = SimulationInput::default();
    let sell_price = use_signal(|| amount_text(defaults.sell_price));
    let product_cost = use_signal(|| amount_text(defaults.product_cost));
    let shipping_cost = use_signal(|| amount_text(defaults.shipping_cost));
    let commission_percent = use_signal(|| amount_text(defaults.commission_rate * 100.0));
    let advertising_cost = use_signal(|| amount_text(defaults.advertising_cost));
    let other_costs = use_signal(|| amount_text(defaults.other_variable_costs));

    // The whole simulation is re-derived on every input change. Text that
    // fails to parse contributes 0; the calculator itself never validates.
    let input = use_memo(move || SimulationInput {
        sell_price: parse_amount(&sell_price()),
        product_cost: parse_amount(&product_cost()),
        shipping_cost: parse_amount(&shipping_cost()),
        commission_rate: parse_amount(&commission_percent()) / 100.0,
        advertising_cost: parse_amount(&advertising_cost()),
        other_variable_costs: parse_amount(&other_costs()),
    });

    let snapshot = simulate(input());
    let breakdown = cost_breakdown(&snapshot.input, &snapshot.result);

    // Record each recomputation once the frame settles; the history itself
    // drops snapshots it has already seen.
    use_effect(move || {
        let mut history = history;
        let snapshot = simulate(input());
        history.with_mut(|entries| {
            entries.record(snapshot);
        });
    });

    let rows: Vec<HistoryRow> =
        history.with(|entries| entries.recent().iter().map(history_row).collect());
    let history_hint = history.with(|entries| {
        if entries.is_empty() {
            "Waiting for the first run".to_string()
        } else {
            format!("Last {DISPLAY_LIMIT} of {} distinct runs", entries.len())
        }
    });

    let on_export_spreadsheet = move |_| match infra::save_spreadsheet(&snapshot) {
        Ok(path) => {
            info!(path = %path.display(), "spreadsheet exported");
            push_toast(
                toasts,
                ToastKind::Success,
                format!("Spreadsheet saved to {}", path.display()),
            );
        }
        Err(err) => {
            warn!(error = %err, "spreadsheet export failed");
            push_toast(toasts, ToastKind::Error, "Spreadsheet export failed.");
        }
    };

    let on_export_report = move |_| match infra::save_report(&snapshot) {
        Ok(path) => {
            info!(path = %path.display(), "report exported");
            push_toast(
                toasts,
                ToastKind::Success,
                format!("Report saved to {}", path.display()),
            );
        }
        Err(err) => {
            warn!(error = %err, "report export failed");
            push_toast(toasts, ToastKind::Error, "Report export failed.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Profit per unit".to_string(),
                    value: format::currency(snapshot.result.profit),
                    description: Some("Sell price minus all unit costs".to_string()),
                }
                KpiCard {
                    title: "Margin".to_string(),
                    value: format::percent(snapshot.result.margin_percent),
                    description: Some("Profit as a share of the sell price".to_string()),
                }
                KpiCard {
                    title: "Break-even units".to_string(),
                    value: snapshot.result.break_even.to_string(),
                    description: Some("Units needed to cover the modeled total cost".to_string()),
                }
            }

            VerdictBanner { verdict: snapshot.result.verdict }

            section {
                class: "grid gap-6 lg:grid-cols-2",
                div {
                    class: "{theme::PANEL} space-y-4 p-4",
                    h2 { class: "text-sm font-semibold text-slate-200", "Product Parameters" }
                    div {
                        class: "grid gap-4 sm:grid-cols-2",
                        NumberField { label: "Sell price ($)", value: sell_price }
                        NumberField { label: "Product cost ($)", value: product_cost }
                        NumberField { label: "Shipping cost ($)", value: shipping_cost }
                        NumberField {
                            label: "Platform commission (%)",
                            value: commission_percent,
                            hint: Some("Percentage of the sell price"),
                        }
                        NumberField { label: "Advertising cost ($)", value: advertising_cost }
                        NumberField { label: "Other variable costs ($)", value: other_costs }
                    }
                    div {
                        class: "flex flex-wrap gap-3 pt-2",
                        button {
                            class: "{theme::BTN_PRIMARY}",
                            onclick: on_export_spreadsheet,
                            "Export spreadsheet"
                        }
                        button {
                            class: "{theme::BTN_GHOST}",
                            onclick: on_export_report,
                            "Export PDF report"
                        }
                    }
                }

                CostChart { breakdown }
            }

            section {
                class: "space-y-3",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-sm font-semibold text-slate-200", "Simulation History" }
                    span { class: "text-xs {theme::TEXT_MUTED}", "{history_hint}" }
                }
                HistoryList { rows }
            }
        }
    }
}

#[component]
fn NumberField(
    label: &'static str,
    value: Signal<String>,
    hint: Option<&'static str>,
) -> Element {
    let mut value = value;
    rsx! {
        div {
            label { class: "{theme::LABEL}", "{label}" }
            input {
                class: "{theme::INPUT}",
                inputmode: "decimal",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(hint) = hint {
                p { class: "mt-1 text-xs text-slate-600", "{hint}" }
            }
        }
    }
}

fn history_row(entry: &HistoryEntry) -> HistoryRow {
    let recorded = entry.recorded_at;
    HistoryRow {
        id: entry.id.clone(),
        time_label: format!(
            "{:02}:{:02}:{:02}",
            recorded.hour(),
            recorded.minute(),
            recorded.second()
        ),
        sell_price: format::currency(entry.snapshot.input.sell_price),
        profit: format::currency(entry.snapshot.result.profit),
        margin: format::percent(entry.snapshot.result.margin_percent),
        break_even: format::break_even(&entry.snapshot.result.break_even),
        verdict: entry.snapshot.result.verdict,
    }
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn amount_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
