use dioxus::prelude::*;

use crate::domain::{format_money, listing_price_display, PriceTier, RecommendedPrices};

#[component]
pub fn PriceTiers(prices: RecommendedPrices) -> Element {
    rsx! {
        div {
            class: "grid gap-4 sm:grid-cols-3",
            for tier in PriceTier::ALL {
                TierCard { key: "{tier.name()}", tier, price: tier.price(&prices) }
            }
        }
    }
}

#[component]
fn TierCard(tier: PriceTier, price: f64) -> Element {
    let recommended = tier == PriceTier::Balanced;
    let card_class = if recommended {
        "relative rounded-xl border-2 border-indigo-500 bg-white p-5 shadow-lg"
    } else {
        "rounded-xl border border-slate-200 bg-white p-5 shadow-sm"
    };
    let display = format_money(listing_price_display(price), 0);
    let tooltip = match tier {
        PriceTier::Aggressive => "Lowest price to gain maximum volume with minimal profit.",
        PriceTier::Balanced => "Ideal balance between healthy profit margins and staying competitive.",
        PriceTier::Premium => "High-margin pricing for unique factory designs or exclusive products.",
    };

    rsx! {
        div {
            class: "{card_class}",
            title: "{tooltip}",
            if recommended {
                span {
                    class: "absolute -top-3 left-4 rounded-full bg-indigo-600 px-2 py-0.5 text-[10px] font-bold uppercase text-white",
                    "Recommended"
                }
            }
            p { class: "text-xs font-bold uppercase tracking-wide text-slate-500", "{tier.name()}" }
            p {
                class: "mt-2 text-3xl font-black text-slate-900",
                span { class: "mr-1 text-lg text-slate-400", "₹" }
                "{display}"
            }
            p { class: "mt-3 text-xs font-semibold text-indigo-600", "{tier.focus()} ›" }
            p { class: "mt-1 text-xs text-slate-500", "{tier.blurb()}" }
        }
    }
}
