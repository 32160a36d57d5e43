use serde::Serialize;
use std::fmt;

use crate::portfolio::holdings::{allocation_percent, Holding};

const HIGH_VOLATILITY: &[&str] = &["BTC", "ETH", "SOL", "AVAX"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskZone {
    Aggressive,
    Balanced,
    Defensive,
}

impl fmt::Display for RiskZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskZone::Aggressive => write!(f, "Aggressive"),
            RiskZone::Balanced => write!(f, "Balanced"),
            RiskZone::Defensive => write!(f, "Defensive"),
        }
    }
}

/// Share of the portfolio held in BTC, in percent.
pub fn btc_exposure(holdings: &[Holding], total_value: f64) -> f64 {
    holdings
        .iter()
        .find(|h| h.symbol == "BTC")
        .map_or(0.0, |h| allocation_percent(h, total_value))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    /// Portfolio move in percent.
    pub percent: f64,
    /// Portfolio move in account currency.
    pub amount: f64,
}

/// Portfolio move if BTC moves by `btc_change_percent` and nothing else does.
pub fn btc_scenario(holdings: &[Holding], total_value: f64, btc_change_percent: f64) -> ScenarioImpact {
    let percent = btc_exposure(holdings, total_value) / 100.0 * btc_change_percent;
    ScenarioImpact {
        percent,
        amount: total_value * percent / 100.0,
    }
}

/// Value-weighted volatility: majors count fully, everything else at half.
pub fn volatility_score(holdings: &[Holding], total_value: f64) -> f64 {
    if total_value <= 0.0 {
        return 0.0;
    }
    holdings
        .iter()
        .map(|h| {
            let weight = h.value() / total_value;
            let volatility = if HIGH_VOLATILITY.contains(&h.symbol.as_str()) {
                1.0
            } else {
                0.5
            };
            weight * volatility
        })
        .sum()
}

pub fn risk_zone(holdings: &[Holding], total_value: f64, return_percent: f64) -> RiskZone {
    let score = volatility_score(holdings, total_value);
    if score > 0.7 && return_percent > 10.0 {
        RiskZone::Aggressive
    } else if score > 0.5 || return_percent > 5.0 {
        RiskZone::Balanced
    } else {
        RiskZone::Defensive
    }
}
