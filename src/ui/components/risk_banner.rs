use dioxus::prelude::*;

use crate::{
    domain::{format_money, CalculationResults, DegenerateInput, RiskAlert, RiskLevel},
    ui::theme,
};

#[component]
pub fn RiskBanner(alert: RiskAlert) -> Element {
    let success = format_money(alert.success_rate, 1);
    let leakage = format_money(alert.cost_leakage_percent, 1);
    let eroded = format_money(alert.margin_eroded_per_order, 2);
    let panel = format!(
        "mt-6 {} {}",
        theme::risk_panel(RiskLevel::High),
        theme::risk_text(RiskLevel::High)
    );

    rsx! {
        div {
            class: "{panel}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-bold uppercase tracking-wide", "⚠️ Critical Alert" }
            }
            div {
                class: "mt-3 grid grid-cols-2 gap-3",
                div {
                    title: "Net deliveries compared to total orders.",
                    p { class: "text-[10px] font-semibold uppercase opacity-70", "Success Rate" }
                    p { class: "text-xl font-black", "{success}%" }
                }
                div {
                    title: "Percentage of total capital lost to damaged or lost returns.",
                    p { class: "text-[10px] font-semibold uppercase opacity-70", "Cost Leakage" }
                    p { class: "text-xl font-black", "{leakage}%" }
                }
            }
            p {
                class: "mt-2 text-xs",
                "Returns are eroding ₹{eroded} of margin per order. Audit fabric & sizing immediately."
            }
        }
    }
}

/// Shown when the return rates leave nothing to spread costs over.
#[component]
pub fn DegenerateNotice(results: CalculationResults) -> Element {
    let Err(reason) = results.checked().map(|_| ()) else {
        return rsx! { Fragment {} };
    };
    let hint = match reason {
        DegenerateInput::NoSuccessfulSales { .. } => {
            "Customer returns plus RTO reach 100% or more, so the breakeven below is not a usable price."
        }
        DegenerateInput::NonFiniteBreakeven => {
            "One of the inputs is not a finite number, so the prices below cannot be trusted."
        }
    };
    rsx! {
        div {
            class: "{theme::risk_panel(RiskLevel::Medium)} {theme::risk_text(RiskLevel::Medium)}",
            p { class: "text-xs font-bold uppercase tracking-wide", "{reason}" }
            p { class: "mt-1 text-xs", "{hint}" }
        }
    }
}
