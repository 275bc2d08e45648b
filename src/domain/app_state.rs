use std::path::PathBuf;

use super::calculation::{calculate_profitability, CalculationResults};
use super::inputs::{CalculatorInputs, InputField};

/// Session state shared through the component tree.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub inputs: CalculatorInputs,
    /// Export directory chosen on the settings page for this session.
    pub export_dir_override: Option<PathBuf>,
}

impl AppState {
    pub fn results(&self) -> CalculationResults {
        calculate_profitability(&self.inputs)
    }

    pub fn update_field(&mut self, field: InputField, raw: &str) {
        self.inputs.set_field(field, raw);
    }

    pub fn reset_inputs(&mut self) {
        self.inputs = CalculatorInputs::default();
    }

    /// Sets or clears the export directory; blank text clears it.
    pub fn set_export_dir(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.export_dir_override = if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        };
    }
}
