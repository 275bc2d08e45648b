//! Per-order profitability model.
//!
//! Everything is evaluated over a notional batch of [`BATCH_ORDERS`] orders so
//! the intermediate totals read as "per 100 orders".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::inputs::CalculatorInputs;

pub const BATCH_ORDERS: f64 = 100.0;
/// Share of returned or RTO'd units that come back unsellable.
pub const LOST_UNIT_SHARE: f64 = 0.5;
pub const AGGRESSIVE_PROFIT_MULTIPLIER: f64 = 0.5;
/// Minimum margin the aggressive tier keeps even for tiny profit targets.
pub const AGGRESSIVE_PROFIT_FLOOR: f64 = 20.0;
pub const PREMIUM_PROFIT_MULTIPLIER: f64 = 1.8;
pub const HIGH_RISK_BELOW: f64 = 70.0;
pub const MEDIUM_RISK_BELOW: f64 = 85.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies the number of successful orders out of the batch.
    pub fn from_net_successful_sales(net_successful_sales: f64) -> Self {
        if net_successful_sales < HIGH_RISK_BELOW {
            RiskLevel::High
        } else if net_successful_sales < MEDIUM_RISK_BELOW {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendedPrices {
    pub aggressive: f64,
    pub balanced: f64,
    pub premium: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    pub total_investment: f64,
    pub ad_expenditure_total: f64,
    pub return_penalty_total: f64,
    pub lost_product_cost: f64,
    pub total_expenditure: f64,
    pub net_successful_sales: f64,
    /// Settlement needed per successful order to cover the whole batch.
    pub true_breakeven_settlement: f64,
    pub recommended_prices: RecommendedPrices,
    pub risk_level: RiskLevel,
}

/// Why a computed result cannot be trusted as a price recommendation.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DegenerateInput {
    #[error("returns and RTO leave {net_successful_sales} successful orders out of 100")]
    NoSuccessfulSales { net_successful_sales: f64 },
    #[error("breakeven or listing price is not a finite number")]
    NonFiniteBreakeven,
}

impl CalculationResults {
    /// Returns `self` when every figure is usable, otherwise the reason it
    /// is not. The unchecked values are still available on `self`.
    pub fn checked(&self) -> Result<&Self, DegenerateInput> {
        if self.net_successful_sales <= 0.0 {
            return Err(DegenerateInput::NoSuccessfulSales {
                net_successful_sales: self.net_successful_sales,
            });
        }
        let prices = &self.recommended_prices;
        let all_finite = [
            self.true_breakeven_settlement,
            prices.aggressive,
            prices.balanced,
            prices.premium,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !all_finite {
            return Err(DegenerateInput::NonFiniteBreakeven);
        }
        Ok(self)
    }
}

/// Evaluates the cost model for one input snapshot.
///
/// Division is left unguarded: when customer returns plus RTO reach 100 %
/// the breakeven and every price become infinite or NaN. Callers that need
/// to tell those apart use [`CalculationResults::checked`].
pub fn calculate_profitability(inputs: &CalculatorInputs) -> CalculationResults {
    let unit_cost = inputs.manufacturing_cost + inputs.packaging_cost;

    let total_investment = unit_cost * BATCH_ORDERS;
    let ad_expenditure_total = inputs.ad_budget * BATCH_ORDERS;
    let return_penalty_total =
        BATCH_ORDERS * (inputs.customer_return_percent / 100.0) * inputs.return_penalty_fee;

    let total_return_percent = inputs.customer_return_percent + inputs.rto_percent;
    let lost_units = BATCH_ORDERS * (total_return_percent / 100.0) * LOST_UNIT_SHARE;
    let lost_product_cost = lost_units * unit_cost;

    let total_expenditure =
        total_investment + ad_expenditure_total + return_penalty_total + lost_product_cost;

    let net_successful_sales = 100.0 - total_return_percent;
    let true_breakeven_settlement = total_expenditure / net_successful_sales;

    let listing_price = |target_profit: f64| {
        (true_breakeven_settlement + target_profit + inputs.shipping_fee)
            / (1.0 - inputs.gst.percent() / 100.0)
    };

    let recommended_prices = RecommendedPrices {
        aggressive: listing_price(
            (inputs.desired_profit * AGGRESSIVE_PROFIT_MULTIPLIER).max(AGGRESSIVE_PROFIT_FLOOR),
        ),
        balanced: listing_price(inputs.desired_profit),
        premium: listing_price(inputs.desired_profit * PREMIUM_PROFIT_MULTIPLIER),
    };

    let risk_level = RiskLevel::from_net_successful_sales(net_successful_sales);

    tracing::trace!(
        total_expenditure,
        net_successful_sales,
        true_breakeven_settlement,
        "profitability recalculated"
    );

    CalculationResults {
        total_investment,
        ad_expenditure_total,
        return_penalty_total,
        lost_product_cost,
        total_expenditure,
        net_successful_sales,
        true_breakeven_settlement,
        recommended_prices,
        risk_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inputs::GstRate;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_scenario_matches_worked_example() {
        let results = calculate_profitability(&CalculatorInputs::default());

        assert_eq!(results.total_investment, 16500.0);
        assert_eq!(results.ad_expenditure_total, 3000.0);
        assert!(approx(results.return_penalty_total, 2430.0));
        assert_eq!(results.lost_product_cost, 2062.5);
        assert!(approx(results.total_expenditure, 23992.5));
        assert_eq!(results.net_successful_sales, 75.0);
        assert!(approx(results.true_breakeven_settlement, 319.9));
        assert_eq!(results.risk_level, RiskLevel::Medium);

        let balanced = results.recommended_prices.balanced;
        assert!((balanced - 468.3157894736842).abs() < 1e-6);
    }

    #[test]
    fn default_tiers_are_ordered() {
        let prices = calculate_profitability(&CalculatorInputs::default()).recommended_prices;
        assert!(prices.premium > prices.balanced);
        assert!(prices.balanced > prices.aggressive);
    }

    #[test]
    fn aggressive_tier_respects_profit_floor() {
        let inputs = CalculatorInputs {
            desired_profit: 10.0,
            ..CalculatorInputs::default()
        };
        let results = calculate_profitability(&inputs);
        let expected = (results.true_breakeven_settlement + AGGRESSIVE_PROFIT_FLOOR + inputs.shipping_fee)
            / 0.95;
        assert!(approx(results.recommended_prices.aggressive, expected));
        // With a small target the floor lifts aggressive above balanced.
        assert!(results.recommended_prices.aggressive > results.recommended_prices.balanced);
    }

    #[test]
    fn twelve_percent_gst_raises_prices() {
        let five = calculate_profitability(&CalculatorInputs::default());
        let twelve = calculate_profitability(&CalculatorInputs {
            gst: GstRate::Twelve,
            ..CalculatorInputs::default()
        });
        assert_eq!(five.true_breakeven_settlement, twelve.true_breakeven_settlement);
        let expected = (twelve.true_breakeven_settlement + 50.0 + 75.0) / 0.88;
        assert!(approx(twelve.recommended_prices.balanced, expected));
        assert!(twelve.recommended_prices.balanced > five.recommended_prices.balanced);
    }

    #[test]
    fn risk_boundaries() {
        assert_eq!(RiskLevel::from_net_successful_sales(69.999), RiskLevel::High);
        assert_eq!(RiskLevel::from_net_successful_sales(70.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_net_successful_sales(84.999), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_net_successful_sales(85.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_net_successful_sales(-20.0), RiskLevel::High);
    }

    #[test]
    fn risk_level_follows_return_rates() {
        let low = calculate_profitability(&CalculatorInputs {
            customer_return_percent: 5.0,
            rto_percent: 5.0,
            ..CalculatorInputs::default()
        });
        assert_eq!(low.risk_level, RiskLevel::Low);

        let high = calculate_profitability(&CalculatorInputs {
            customer_return_percent: 20.0,
            rto_percent: 15.0,
            ..CalculatorInputs::default()
        });
        assert_eq!(high.risk_level, RiskLevel::High);
    }

    #[test]
    fn full_returns_produce_infinite_breakeven() {
        let results = calculate_profitability(&CalculatorInputs {
            customer_return_percent: 60.0,
            rto_percent: 40.0,
            ..CalculatorInputs::default()
        });
        assert_eq!(results.net_successful_sales, 0.0);
        assert_eq!(results.true_breakeven_settlement, f64::INFINITY);
        assert_eq!(results.recommended_prices.balanced, f64::INFINITY);
        assert_eq!(results.risk_level, RiskLevel::High);
        assert_eq!(
            results.checked(),
            Err(DegenerateInput::NoSuccessfulSales {
                net_successful_sales: 0.0
            })
        );
    }

    #[test]
    fn negative_spend_at_full_returns_is_negative_infinity() {
        let results = calculate_profitability(&CalculatorInputs {
            customer_return_percent: 60.0,
            rto_percent: 40.0,
            ad_budget: -1000.0,
            ..CalculatorInputs::default()
        });
        assert_eq!(results.net_successful_sales, 0.0);
        assert!(results.total_expenditure < 0.0);
        assert_eq!(results.true_breakeven_settlement, f64::NEG_INFINITY);
        assert!(results.checked().is_err());
    }

    #[test]
    fn excess_returns_go_negative_unclamped() {
        let results = calculate_profitability(&CalculatorInputs {
            customer_return_percent: 70.0,
            rto_percent: 50.0,
            ..CalculatorInputs::default()
        });
        assert_eq!(results.net_successful_sales, -20.0);
        assert!(results.true_breakeven_settlement < 0.0);
        assert!(results.true_breakeven_settlement.is_finite());
        assert!(results.checked().is_err());
    }

    #[test]
    fn zero_everything_at_full_returns_is_nan() {
        let results = calculate_profitability(&CalculatorInputs {
            product_name: String::new(),
            manufacturing_cost: 0.0,
            packaging_cost: 0.0,
            shipping_fee: 0.0,
            customer_return_percent: 100.0,
            rto_percent: 0.0,
            return_penalty_fee: 0.0,
            desired_profit: 0.0,
            gst: GstRate::Five,
            ad_budget: 0.0,
        });
        assert_eq!(results.total_expenditure, 0.0);
        assert!(results.true_breakeven_settlement.is_nan());
        assert!(results.recommended_prices.premium.is_nan());
    }

    #[test]
    fn checked_accepts_healthy_results() {
        let results = calculate_profitability(&CalculatorInputs::default());
        assert_eq!(results.checked(), Ok(&results));
    }

    #[test]
    fn checked_flags_non_finite_prices() {
        let results = calculate_profitability(&CalculatorInputs {
            shipping_fee: f64::INFINITY,
            ..CalculatorInputs::default()
        });
        assert_eq!(results.checked(), Err(DegenerateInput::NonFiniteBreakeven));
    }

    #[test]
    fn product_name_does_not_affect_results() {
        let a = calculate_profitability(&CalculatorInputs::default());
        let b = calculate_profitability(&CalculatorInputs {
            product_name: "Something else".into(),
            ..CalculatorInputs::default()
        });
        assert_eq!(a, b);
    }

    #[test]
    fn risk_level_serializes_uppercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::domain::inputs::GstRate;
    use proptest::prelude::*;

    /// Raw bit patterns, so NaN results compare by representation.
    fn figure_bits(r: &CalculationResults) -> [u64; 10] {
        [
            r.total_investment,
            r.ad_expenditure_total,
            r.return_penalty_total,
            r.lost_product_cost,
            r.total_expenditure,
            r.net_successful_sales,
            r.true_breakeven_settlement,
            r.recommended_prices.aggressive,
            r.recommended_prices.balanced,
            r.recommended_prices.premium,
        ]
        .map(f64::to_bits)
    }

    fn arb_inputs() -> impl Strategy<Value = CalculatorInputs> {
        (
            0.0f64..5000.0,
            0.0f64..200.0,
            0.0f64..300.0,
            0.0f64..100.0,
            0.0f64..100.0,
            0.0f64..500.0,
            0.0f64..1000.0,
            prop_oneof![Just(GstRate::Five), Just(GstRate::Twelve)],
            0.0f64..200.0,
        )
            .prop_map(
                |(mfg, pkg, ship, cust, rto, penalty, profit, gst, ads)| CalculatorInputs {
                    product_name: "prop".into(),
                    manufacturing_cost: mfg,
                    packaging_cost: pkg,
                    shipping_fee: ship,
                    customer_return_percent: cust,
                    rto_percent: rto,
                    return_penalty_fee: penalty,
                    desired_profit: profit,
                    gst,
                    ad_budget: ads,
                },
            )
    }

    proptest! {
        #[test]
        fn total_expenditure_is_sum_of_parts(inputs in arb_inputs()) {
            let r = calculate_profitability(&inputs);
            prop_assert_eq!(
                r.total_expenditure,
                r.total_investment + r.ad_expenditure_total + r.return_penalty_total + r.lost_product_cost
            );
        }

        #[test]
        fn net_sales_is_batch_minus_returns(inputs in arb_inputs()) {
            let r = calculate_profitability(&inputs);
            prop_assert_eq!(
                r.net_successful_sales,
                100.0 - (inputs.customer_return_percent + inputs.rto_percent)
            );
        }

        #[test]
        fn breakeven_divides_by_net_sales(inputs in arb_inputs()) {
            let r = calculate_profitability(&inputs);
            if r.net_successful_sales > 0.0 {
                prop_assert_eq!(r.true_breakeven_settlement, r.total_expenditure / r.net_successful_sales);
            }
        }

        #[test]
        fn premium_never_below_balanced(inputs in arb_inputs()) {
            let r = calculate_profitability(&inputs);
            if r.net_successful_sales > 0.0 {
                prop_assert!(r.recommended_prices.premium >= r.recommended_prices.balanced);
            }
        }

        #[test]
        fn calculation_is_deterministic(inputs in arb_inputs()) {
            let first = calculate_profitability(&inputs);
            let second = calculate_profitability(&inputs);
            prop_assert_eq!(figure_bits(&first), figure_bits(&second));
            prop_assert_eq!(first.risk_level, second.risk_level);
        }
    }
}
