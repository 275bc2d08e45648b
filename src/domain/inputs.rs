use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::numeric::coerce_number;

/// Tax rates the marketplace applies to the listing price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GstRate {
    #[default]
    Five,
    Twelve,
}

impl GstRate {
    pub const ALL: [GstRate; 2] = [GstRate::Five, GstRate::Twelve];

    pub fn percent(self) -> f64 {
        match self {
            GstRate::Five => 5.0,
            GstRate::Twelve => 12.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GstRate::Five => "5% (Apparel < 1000)",
            GstRate::Twelve => "12% (Apparel > 1000)",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported GST rate: {0}%")]
pub struct UnsupportedGstRate(pub u8);

impl TryFrom<u8> for GstRate {
    type Error = UnsupportedGstRate;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(GstRate::Five),
            12 => Ok(GstRate::Twelve),
            other => Err(UnsupportedGstRate(other)),
        }
    }
}

impl From<GstRate> for u8 {
    fn from(rate: GstRate) -> Self {
        match rate {
            GstRate::Five => 5,
            GstRate::Twelve => 12,
        }
    }
}

/// Per-unit economics a seller declares for one product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub product_name: String,
    pub manufacturing_cost: f64,
    pub packaging_cost: f64,
    /// Shipping charged per order, GST included.
    pub shipping_fee: f64,
    pub customer_return_percent: f64,
    pub rto_percent: f64,
    /// Reverse-logistics fee per customer return.
    pub return_penalty_fee: f64,
    pub desired_profit: f64,
    pub gst: GstRate,
    /// Ad spend allocated to each order.
    pub ad_budget: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            product_name: "Sample Palazzo".to_string(),
            manufacturing_cost: 160.0,
            packaging_cost: 5.0,
            shipping_fee: 75.0,
            customer_return_percent: 15.0,
            rto_percent: 10.0,
            return_penalty_fee: 162.0,
            desired_profit: 50.0,
            gst: GstRate::Five,
            ad_budget: 30.0,
        }
    }
}

/// Form fields that can be edited independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    ProductName,
    ManufacturingCost,
    PackagingCost,
    ShippingFee,
    CustomerReturnPercent,
    RtoPercent,
    ReturnPenaltyFee,
    DesiredProfit,
    Gst,
    AdBudget,
}

impl CalculatorInputs {
    pub fn unit_cost(&self) -> f64 {
        self.manufacturing_cost + self.packaging_cost
    }

    pub fn total_return_percent(&self) -> f64 {
        self.customer_return_percent + self.rto_percent
    }

    /// Applies raw form text to a field.
    ///
    /// Numeric fields go through [`coerce_number`]. The GST selector only
    /// accepts the enumerated rates and keeps the current rate otherwise.
    pub fn set_field(&mut self, field: InputField, raw: &str) {
        match field {
            InputField::ProductName => self.product_name = raw.to_string(),
            InputField::ManufacturingCost => self.manufacturing_cost = coerce_number(raw),
            InputField::PackagingCost => self.packaging_cost = coerce_number(raw),
            InputField::ShippingFee => self.shipping_fee = coerce_number(raw),
            InputField::CustomerReturnPercent => self.customer_return_percent = coerce_number(raw),
            InputField::RtoPercent => self.rto_percent = coerce_number(raw),
            InputField::ReturnPenaltyFee => self.return_penalty_fee = coerce_number(raw),
            InputField::DesiredProfit => self.desired_profit = coerce_number(raw),
            InputField::AdBudget => self.ad_budget = coerce_number(raw),
            InputField::Gst => {
                let Ok(percent) = raw.trim().parse::<u8>() else {
                    tracing::debug!(raw, "ignoring non-numeric GST selection");
                    return;
                };
                match GstRate::try_from(percent) {
                    Ok(rate) => self.gst = rate,
                    Err(err) => tracing::debug!("ignoring GST selection: {err}"),
                }
            }
        }
    }

    /// Current value of a field as form text.
    pub fn field_text(&self, field: InputField) -> String {
        match field {
            InputField::ProductName => self.product_name.clone(),
            InputField::ManufacturingCost => self.manufacturing_cost.to_string(),
            InputField::PackagingCost => self.packaging_cost.to_string(),
            InputField::ShippingFee => self.shipping_fee.to_string(),
            InputField::CustomerReturnPercent => self.customer_return_percent.to_string(),
            InputField::RtoPercent => self.rto_percent.to_string(),
            InputField::ReturnPenaltyFee => self.return_penalty_fee.to_string(),
            InputField::DesiredProfit => self.desired_profit.to_string(),
            InputField::Gst => u8::from(self.gst).to_string(),
            InputField::AdBudget => self.ad_budget.to_string(),
        }
    }
}
