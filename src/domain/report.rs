//! Labelled summary rows shared by the spreadsheet and document exports.

use super::breakdown::{format_money, listing_price_display, lost_cost_per_unit};
use super::calculation::CalculationResults;
use super::inputs::CalculatorInputs;
use serde_json::{Map, Value};

pub const SHEET_NAME: &str = "Profit Analysis";
pub const DOCUMENT_TITLE: &str = "Profit & Loss Strategy";

#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub category: &'static str,
    pub value: CellValue,
}

impl ReportRow {
    fn text(category: &'static str, value: impl Into<String>) -> Self {
        Self {
            category,
            value: CellValue::Text(value.into()),
        }
    }

    fn number(category: &'static str, value: f64) -> Self {
        Self {
            category,
            value: CellValue::Number(value),
        }
    }
}

pub fn spreadsheet_rows(inputs: &CalculatorInputs, results: &CalculationResults) -> Vec<ReportRow> {
    vec![
        ReportRow::text("Product Name", inputs.product_name.clone()),
        ReportRow::number("Mfg + Pkg Cost", inputs.unit_cost()),
        ReportRow::number("Ad Budget (per unit)", inputs.ad_budget),
        ReportRow::number("Shipping (incl GST)", inputs.shipping_fee),
        ReportRow::text(
            "Total Return % (Cust + RTO)",
            format!("{}%", inputs.total_return_percent()),
        ),
        ReportRow::text(
            "Lost Inventory Cost (avg/unit)",
            format_money(lost_cost_per_unit(results), 2),
        ),
        ReportRow::text(
            "Magic Number (Breakeven)",
            format_money(results.true_breakeven_settlement, 2),
        ),
        ReportRow::number(
            "Balanced Listing Price",
            listing_price_display(results.recommended_prices.balanced),
        ),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentLine {
    pub label: &'static str,
    pub value: String,
    pub emphasis: bool,
}

pub fn document_lines(inputs: &CalculatorInputs, results: &CalculationResults) -> Vec<DocumentLine> {
    vec![
        DocumentLine {
            label: "TRUE BREAKEVEN SETTLEMENT:",
            value: format!("Rs. {}", format_money(results.true_breakeven_settlement, 2)),
            emphasis: true,
        },
        DocumentLine {
            label: "Ad Budget Allocation:",
            value: format!("Rs. {}", inputs.ad_budget),
            emphasis: false,
        },
        DocumentLine {
            label: "Lost Product Loss (50% of returns):",
            value: format!(
                "Rs. {} per unit",
                format_money(lost_cost_per_unit(results), 2)
            ),
            emphasis: false,
        },
        DocumentLine {
            label: "Recommended Listing Price:",
            value: format!(
                "Rs. {}",
                format_money(listing_price_display(results.recommended_prices.balanced), 0)
            ),
            emphasis: false,
        },
    ]
}

/// Pretty JSON of `results`. JSON has no Infinity or NaN, so non-finite
/// figures are written as their text form instead of `null`.
pub fn results_snapshot(results: &CalculationResults) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(results)?;
    if let Some(root) = value.as_object_mut() {
        restore_non_finite(
            root,
            &[
                ("total_investment", results.total_investment),
                ("ad_expenditure_total", results.ad_expenditure_total),
                ("return_penalty_total", results.return_penalty_total),
                ("lost_product_cost", results.lost_product_cost),
                ("total_expenditure", results.total_expenditure),
                ("net_successful_sales", results.net_successful_sales),
                ("true_breakeven_settlement", results.true_breakeven_settlement),
            ],
        );
        let prices = results.recommended_prices;
        if let Some(nested) = root
            .get_mut("recommended_prices")
            .and_then(Value::as_object_mut)
        {
            restore_non_finite(
                nested,
                &[
                    ("aggressive", prices.aggressive),
                    ("balanced", prices.balanced),
                    ("premium", prices.premium),
                ],
            );
        }
    }
    serde_json::to_string_pretty(&value)
}

fn restore_non_finite(object: &mut Map<String, Value>, figures: &[(&str, f64)]) {
    for &(key, figure) in figures {
        if !figure.is_finite() {
            object.insert(key.to_string(), Value::String(format_money(figure, 2)));
        }
    }
}

/// Characters that cannot appear inside a single file name on common
/// platforms. Path separators among them keep exports inside their folder.
const FORBIDDEN_IN_FILE_NAME: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

fn safe_stem_char(ch: char) -> char {
    if ch.is_control() || FORBIDDEN_IN_FILE_NAME.contains(&ch) {
        '_'
    } else {
        ch
    }
}

/// `"Sample  Palazzo"` becomes `"Sample_Palazzo_Financials.xlsx"`.
pub fn spreadsheet_file_name(product_name: &str) -> String {
    let mut stem = String::with_capacity(product_name.len());
    let mut in_whitespace = false;
    for ch in product_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(safe_stem_char(ch));
            in_whitespace = false;
        }
    }
    format!("{stem}_Financials.xlsx")
}

pub fn document_file_name(product_name: &str) -> String {
    let stem: String = product_name.chars().map(safe_stem_char).collect();
    format!("{stem}_Analysis.pdf")
}
