use dioxus::prelude::*;

use crate::domain::{format_money, listing_price_display, PriceBar};

/// Bar heights as a percentage of the tallest finite positive price.
pub fn bar_heights(bars: &[PriceBar]) -> Vec<f64> {
    let tallest = bars
        .iter()
        .map(|bar| bar.price)
        .filter(|price| price.is_finite() && *price > 0.0)
        .fold(0.0, f64::max);

    bars.iter()
        .map(|bar| {
            if tallest <= 0.0 || !bar.price.is_finite() || bar.price <= 0.0 {
                0.0
            } else {
                bar.price / tallest * 100.0
            }
        })
        .collect()
}

#[component]
pub fn PriceChart(bars: Vec<PriceBar>) -> Element {
    let heights = bar_heights(&bars);
    let columns = bars
        .iter()
        .zip(heights)
        .map(|(bar, height)| {
            (
                bar.tier.short_name(),
                bar.tier.fill(),
                format!("{height:.1}"),
                format_money(listing_price_display(bar.price), 0),
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "flex h-48 items-end justify-around gap-4 border-b border-slate-100 px-4",
            for (name, fill, height, label) in columns {
                div {
                    key: "{name}",
                    class: "flex h-full w-12 flex-col items-center justify-end gap-1",
                    span { class: "text-[10px] font-bold text-slate-600", "₹{label}" }
                    div {
                        class: "w-10 rounded-t-xl",
                        style: "height: {height}%; background-color: {fill};",
                    }
                    span { class: "text-[10px] uppercase text-slate-400", "{name}" }
                }
            }
        }
        p { class: "mt-3 text-center text-[10px] uppercase tracking-wide text-slate-400", "Comparison of Target Selling Prices" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceTier;

    fn bar(tier: PriceTier, price: f64) -> PriceBar {
        PriceBar { tier, price }
    }

    #[test]
    fn tallest_bar_fills_the_chart() {
        let heights = bar_heights(&[
            bar(PriceTier::Aggressive, 250.0),
            bar(PriceTier::Balanced, 400.0),
            bar(PriceTier::Premium, 500.0),
        ]);
        assert_eq!(heights, vec![50.0, 80.0, 100.0]);
    }

    #[test]
    fn non_finite_prices_collapse() {
        let heights = bar_heights(&[
            bar(PriceTier::Aggressive, f64::INFINITY),
            bar(PriceTier::Balanced, f64::NAN),
            bar(PriceTier::Premium, -10.0),
        ]);
        assert_eq!(heights, vec![0.0, 0.0, 0.0]);
    }
}
