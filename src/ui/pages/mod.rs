pub mod calculator;
pub mod settings;

pub use calculator::CalculatorPage;
pub use settings::SettingsPage;
