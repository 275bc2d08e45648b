//! Derived figures for charts and summary cards.

use super::calculation::{CalculationResults, RecommendedPrices, RiskLevel, BATCH_ORDERS};
use super::inputs::CalculatorInputs;

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnSlice {
    pub name: &'static str,
    pub value: f64,
    pub fill: &'static str,
}

/// Successful orders versus customer returns and RTO, out of the batch.
pub fn return_slices(inputs: &CalculatorInputs, results: &CalculationResults) -> Vec<ReturnSlice> {
    vec![
        ReturnSlice {
            name: "Successful",
            value: results.net_successful_sales,
            fill: "#10b981",
        },
        ReturnSlice {
            name: "Returns",
            value: inputs.customer_return_percent,
            fill: "#f43f5e",
        },
        ReturnSlice {
            name: "RTO",
            value: inputs.rto_percent,
            fill: "#f59e0b",
        },
    ]
}

/// The three listing-price tiers offered to the seller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PriceTier {
    Aggressive,
    Balanced,
    Premium,
}

impl PriceTier {
    pub const ALL: [PriceTier; 3] = [PriceTier::Aggressive, PriceTier::Balanced, PriceTier::Premium];

    pub fn name(self) -> &'static str {
        match self {
            PriceTier::Aggressive => "Aggressive",
            PriceTier::Balanced => "Balanced",
            PriceTier::Premium => "Premium",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            PriceTier::Aggressive => "Agg",
            PriceTier::Balanced => "Bal",
            PriceTier::Premium => "Pre",
        }
    }

    pub fn focus(self) -> &'static str {
        match self {
            PriceTier::Aggressive => "Volume Focus",
            PriceTier::Balanced => "Healthy Brand",
            PriceTier::Premium => "High Margin",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            PriceTier::Aggressive => "Best for clearing old stock or winning the Buy Box early.",
            PriceTier::Balanced => "Perfect mix of sustainable profit and market competitiveness.",
            PriceTier::Premium => "Ideal for unique catalog products or exclusive factory designs.",
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            PriceTier::Aggressive => "#10b981",
            PriceTier::Balanced => "#6366f1",
            PriceTier::Premium => "#f59e0b",
        }
    }

    pub fn price(self, prices: &RecommendedPrices) -> f64 {
        match self {
            PriceTier::Aggressive => prices.aggressive,
            PriceTier::Balanced => prices.balanced,
            PriceTier::Premium => prices.premium,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceBar {
    pub tier: PriceTier,
    pub price: f64,
}

pub fn price_bars(results: &CalculationResults) -> Vec<PriceBar> {
    PriceTier::ALL
        .iter()
        .map(|&tier| PriceBar {
            tier,
            price: tier.price(&results.recommended_prices),
        })
        .collect()
}

/// Figures behind the high-risk warning.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskAlert {
    pub success_rate: f64,
    pub cost_leakage_percent: f64,
    pub margin_eroded_per_order: f64,
}

/// Only high-risk results carry an alert.
pub fn risk_alert(results: &CalculationResults) -> Option<RiskAlert> {
    (results.risk_level == RiskLevel::High).then(|| RiskAlert {
        success_rate: results.net_successful_sales,
        cost_leakage_percent: lost_cost_share(results),
        margin_eroded_per_order: lost_cost_per_unit(results),
    })
}

/// Lost inventory as a percentage of total spend; 0 when nothing is spent.
pub fn lost_cost_share(results: &CalculationResults) -> f64 {
    if results.total_expenditure > 0.0 {
        results.lost_product_cost / results.total_expenditure * 100.0
    } else {
        0.0
    }
}

/// Lost inventory cost averaged over every order in the batch.
pub fn lost_cost_per_unit(results: &CalculationResults) -> f64 {
    results.lost_product_cost / BATCH_ORDERS
}

/// Listing prices are always shown rounded up to the next whole rupee.
pub fn listing_price_display(price: f64) -> f64 {
    price.ceil()
}

/// Formats a money figure, passing non-finite values through as text.
///
/// Halves round away from zero (`20.625` shows as `20.63`), which is what
/// sellers see on marketplace statements.
pub fn format_money(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    };
    format!("{rounded:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculation::calculate_profitability;

    #[test]
    fn slices_cover_the_batch() {
        let inputs = CalculatorInputs::default();
        let results = calculate_profitability(&inputs);
        let slices = return_slices(&inputs, &results);
        let names: Vec<_> = slices.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Successful", "Returns", "RTO"]);
        let total: f64 = slices.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn bars_follow_recommended_prices() {
        let results = calculate_profitability(&CalculatorInputs::default());
        let bars = price_bars(&results);
        assert_eq!(bars[0].price, results.recommended_prices.aggressive);
        assert_eq!(bars[1].price, results.recommended_prices.balanced);
        assert_eq!(bars[2].price, results.recommended_prices.premium);
        assert_eq!(bars[1].tier.short_name(), "Bal");
    }

    #[test]
    fn alert_only_for_high_risk() {
        let medium = calculate_profitability(&CalculatorInputs::default());
        assert!(risk_alert(&medium).is_none());

        let high = calculate_profitability(&CalculatorInputs {
            customer_return_percent: 25.0,
            rto_percent: 15.0,
            ..CalculatorInputs::default()
        });
        let alert = risk_alert(&high).expect("high risk alert");
        assert_eq!(alert.success_rate, 60.0);
        assert_eq!(alert.margin_eroded_per_order, high.lost_product_cost / 100.0);
        assert!(alert.cost_leakage_percent > 0.0);
    }

    #[test]
    fn lost_cost_share_of_default_scenario() {
        let results = calculate_profitability(&CalculatorInputs::default());
        let share = lost_cost_share(&results);
        assert!((share - 2062.5 / 23992.5 * 100.0).abs() < 1e-9);
        assert_eq!(lost_cost_per_unit(&results), 20.625);
    }

    #[test]
    fn lost_cost_share_is_zero_without_spend() {
        let mut results = calculate_profitability(&CalculatorInputs::default());
        results.total_expenditure = 0.0;
        assert_eq!(lost_cost_share(&results), 0.0);
    }

    #[test]
    fn listing_prices_round_up() {
        assert_eq!(listing_price_display(468.3157), 469.0);
        assert_eq!(listing_price_display(469.0), 469.0);
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(319.9, 2), "319.90");
        assert_eq!(format_money(20.7, 0), "21");
        assert_eq!(format_money(20.625, 2), "20.63");
        assert_eq!(format_money(-2.5, 0), "-3");
        assert_eq!(format_money(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_money(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(format_money(f64::NAN, 2), "NaN");
    }
}
