//! Shared class strings, some keyed on the current risk level.

use crate::domain::RiskLevel;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "inline-flex items-center gap-2 rounded-lg bg-slate-900 px-4 py-2 text-xs font-bold text-white shadow-md hover:bg-slate-800"
}

pub fn btn_secondary() -> &'static str {
    "inline-flex items-center gap-2 rounded-lg border border-slate-300 bg-white px-4 py-2 text-xs font-bold text-slate-700 hover:bg-slate-50"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "rounded-lg border border-indigo-500 bg-indigo-50 px-4 py-2 text-xs font-semibold text-indigo-700"
    } else {
        "rounded-lg border border-transparent px-4 py-2 text-xs text-slate-500 hover:border-slate-300 hover:text-slate-800"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-300 bg-white px-3 py-2 text-sm text-slate-900 focus:border-indigo-500 focus:outline-none"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

// ============================================
// PANEL STYLES
// ============================================

pub fn panel() -> &'static str {
    "rounded-xl border border-slate-200 bg-white p-6 shadow-sm"
}

pub fn panel_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

// ============================================
// RISK STYLES
// ============================================

pub fn risk_panel(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "rounded-xl border border-emerald-300 bg-emerald-50 p-4",
        RiskLevel::Medium => "rounded-xl border border-amber-300 bg-amber-50 p-4",
        RiskLevel::High => "rounded-xl border border-rose-300 bg-rose-50 p-4 risk-pulse",
    }
}

pub fn risk_text(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "text-emerald-700",
        RiskLevel::Medium => "text-amber-700",
        RiskLevel::High => "text-rose-700",
    }
}

pub fn risk_badge(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "bg-emerald-100 text-emerald-700 border-emerald-300",
        RiskLevel::Medium => "bg-amber-100 text-amber-700 border-amber-300",
        RiskLevel::High => "bg-rose-100 text-rose-700 border-rose-300",
    }
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_high_risk_pulses() {
        assert!(risk_panel(RiskLevel::High).contains("risk-pulse"));
        assert!(!risk_panel(RiskLevel::Medium).contains("risk-pulse"));
        assert!(!risk_panel(RiskLevel::Low).contains("risk-pulse"));
    }
}
