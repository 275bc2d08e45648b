use dioxus::prelude::*;

use crate::{
    domain::{
        format_money, lost_cost_per_unit, price_bars, return_slices, risk_alert, AppState,
        InputField,
    },
    ui::{
        components::{
            push_toast, DegenerateNotice, GstSelect, KpiCard, NumberField, PriceChart,
            PriceTiers, ReturnPie, RiskBadge, RiskBanner, ToastKind, ToastMessage,
        },
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let results = use_memo(move || state.with(|st| st.results()));

    let snapshot = results();
    let inputs = state.with(|st| st.inputs.clone());
    let breakeven = format_money(snapshot.true_breakeven_settlement, 2);
    let capital_drain = format!("₹{} / unit", format_money(lost_cost_per_unit(&snapshot), 2));
    let ad_allocation = format!("₹{} / unit", format_money(inputs.ad_budget, 2));
    let alert = risk_alert(&snapshot);
    let slices = return_slices(&inputs, &snapshot);
    let bars = price_bars(&snapshot);

    let on_reset = move |_| {
        state.with_mut(|st| st.reset_inputs());
        push_toast(
            toasts,
            ToastMessage::new(ToastKind::Info, "Restored the sample scenario."),
        );
    };

    rsx! {
        div { class: "grid gap-6 lg:grid-cols-12",
            section { class: "space-y-4 lg:col-span-4",
                div { class: "{theme::panel()}",
                    div { class: "flex items-center justify-between",
                        h2 { class: "{theme::panel_title()}", "Inventory Parameters" }
                        button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset" }
                    }
                    div { class: "mt-5 space-y-4",
                        NumberField {
                            label: "Product Identity",
                            field: InputField::ProductName,
                            hint: "The name of the SKU or category for your records.",
                        }
                        div { class: "grid grid-cols-2 gap-4",
                            NumberField {
                                label: "Mfg Unit",
                                field: InputField::ManufacturingCost,
                                hint: "Sum of raw material, labor, and factory overheads per unit.",
                                prefix: Some("₹"),
                            }
                            NumberField {
                                label: "Packing",
                                field: InputField::PackagingCost,
                                hint: "Cost of polybags, stickers, branding tags, and shipping bags.",
                                prefix: Some("₹"),
                            }
                        }
                        div { class: "rounded-xl border border-indigo-100 bg-indigo-50 p-4",
                            NumberField {
                                label: "Advertising Budget",
                                field: InputField::AdBudget,
                                hint: "Target marketing spend per order to keep the listing visible in marketplace ads.",
                                prefix: Some("₹"),
                            }
                            p { class: "mt-2 text-[10px] font-bold uppercase text-indigo-400", "Per order allocation" }
                        }
                        NumberField {
                            label: "Shipping Fee (+GST)",
                            field: InputField::ShippingFee,
                            hint: "Total shipping charge including GST as displayed in the supplier panel.",
                            prefix: Some("₹"),
                        }
                        div { class: "grid grid-cols-2 gap-4",
                            NumberField {
                                label: "Customer Ret %",
                                field: InputField::CustomerReturnPercent,
                                hint: "Orders returned by customers after delivery. Critical for clothing SKUs.",
                            }
                            NumberField {
                                label: "RTO %",
                                field: InputField::RtoPercent,
                                hint: "Courier returns (Return to Origin) where the buyer didn't accept the parcel.",
                            }
                        }
                        NumberField {
                            label: "Return Penalty",
                            field: InputField::ReturnPenaltyFee,
                            hint: "Logistics and reverse shipping fees deducted by the marketplace for customer returns.",
                            prefix: Some("₹"),
                        }
                        div { class: "grid grid-cols-2 gap-4",
                            NumberField {
                                label: "Net Profit",
                                field: InputField::DesiredProfit,
                                hint: "Clean cash profit you want to earn per successful delivery.",
                                prefix: Some("₹"),
                            }
                            GstSelect {}
                        }
                    }
                }
            }

            section { class: "space-y-6 lg:col-span-8",
                div { class: "rounded-2xl border border-slate-800 bg-slate-900 p-8 text-white shadow-2xl",
                    div { class: "flex flex-col gap-8 md:flex-row md:items-start md:justify-between",
                        div { class: "flex-1",
                            div { class: "flex items-center gap-3",
                                span {
                                    class: "text-xs font-black uppercase tracking-widest text-indigo-400",
                                    title: "The minimum amount the marketplace must settle in your bank to cover all costs.",
                                    "Breakeven Settlement"
                                }
                                RiskBadge { level: snapshot.risk_level }
                            }
                            div { class: "mt-4 flex items-baseline gap-2",
                                span { class: "text-3xl font-bold text-slate-500", "₹" }
                                h3 { class: "text-6xl font-black tracking-tighter", "{breakeven}" }
                            }
                            p { class: "mt-4 max-w-sm text-sm text-slate-400",
                                "Minimum bank settlement required per successful sale to avoid losses."
                            }
                            if let Some(alert) = alert {
                                RiskBanner { alert }
                            }
                        }
                        div { class: "grid gap-4 sm:grid-cols-2 md:flex md:flex-col",
                            KpiCard {
                                title: "Capital Drain".to_string(),
                                value: capital_drain,
                                description: Some("Capital lost to products damaged or lost during the return cycle.".to_string()),
                            }
                            KpiCard {
                                title: "Ad Allocation".to_string(),
                                value: ad_allocation,
                                description: Some("Estimated portion of ad spend allocated per successful delivery.".to_string()),
                                highlight: true,
                            }
                        }
                    }
                }

                DegenerateNotice { results: snapshot.clone() }

                PriceTiers { prices: snapshot.recommended_prices }

                div { class: "grid gap-6 md:grid-cols-2",
                    div { class: "{theme::panel()}",
                        h4 {
                            class: "{theme::panel_title()}",
                            title: "Distribution of successful orders vs customer returns and RTOs.",
                            "Returns Analysis"
                        }
                        div { class: "mt-4", ReturnPie { slices } }
                    }
                    div { class: "{theme::panel()}",
                        h4 {
                            class: "{theme::panel_title()}",
                            title: "Comparison of three suggested listing prices based on different profit targets.",
                            "Price Ladder (INR)"
                        }
                        div { class: "mt-4", PriceChart { bars } }
                    }
                }
            }
        }
    }
}
