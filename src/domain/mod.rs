//! Seller profitability model and the figures derived from it.

pub mod app_state;
pub mod breakdown;
pub mod calculation;
pub mod inputs;
pub mod report;

pub use app_state::AppState;
pub use breakdown::{
    format_money, listing_price_display, lost_cost_per_unit, lost_cost_share, price_bars,
    return_slices, risk_alert, PriceBar, PriceTier, ReturnSlice, RiskAlert,
};
pub use calculation::{
    calculate_profitability, CalculationResults, DegenerateInput, RecommendedPrices, RiskLevel,
};
pub use inputs::{CalculatorInputs, GstRate, InputField};
