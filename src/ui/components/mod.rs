pub mod kpi_card;
pub mod number_field;
pub mod price_chart;
pub mod price_tiers;
pub mod return_pie;
pub mod risk_badge;
pub mod risk_banner;
pub mod toast;

pub use kpi_card::KpiCard;
pub use number_field::{GstSelect, NumberField};
pub use price_chart::PriceChart;
pub use price_tiers::PriceTiers;
pub use return_pie::ReturnPie;
pub use risk_badge::RiskBadge;
pub use risk_banner::{DegenerateNotice, RiskBanner};
pub use toast::{push_toast, Toast, ToastKind, ToastMessage};
