use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PositionSide;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesPosition {
    pub id: String,
    pub pair: String,
    pub direction: PositionSide,
    /// Notional size in account currency.
    pub size: f64,
    pub entry_price: f64,
    #[serde(default)]
    pub mark_price: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    pub open_date: NaiveDate,
    #[serde(default)]
    pub close_date: Option<NaiveDate>,
    #[serde(default)]
    pub exit_price: Option<f64>,
    /// Realized P&L, set once closed.
    #[serde(default)]
    pub pnl: Option<f64>,
    #[serde(default)]
    pub pnl_percent: Option<f64>,
}

impl FuturesPosition {
    pub fn is_open(&self) -> bool {
        self.close_date.is_none()
    }

    pub fn contracts(&self) -> f64 {
        if self.entry_price != 0.0 {
            self.size / self.entry_price
        } else {
            0.0
        }
    }

    /// Mark-to-market P&L. Zero without a mark price.
    pub fn unrealized_pnl(&self) -> f64 {
        let Some(mark) = self.mark_price else {
            return 0.0;
        };
        match self.direction {
            PositionSide::Long => self.contracts() * (mark - self.entry_price),
            PositionSide::Short => self.contracts() * (self.entry_price - mark),
        }
    }

    pub fn unrealized_pnl_percent(&self) -> f64 {
        if self.size != 0.0 {
            self.unrealized_pnl() / self.size * 100.0
        } else {
            0.0
        }
    }

    /// Currency lost if the stop is hit.
    pub fn risk_amount(&self) -> Option<f64> {
        let stop = self.stop_loss?;
        Some((self.contracts() * (self.entry_price - stop)).abs())
    }

    /// Reward per unit of risk, i.e. the `x` in `1:x`.
    pub fn risk_reward(&self) -> Option<f64> {
        let stop = self.stop_loss?;
        let target = self.take_profit?;
        let risk = (self.entry_price - stop).abs();
        if risk == 0.0 {
            return None;
        }
        Some((target - self.entry_price).abs() / risk)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesSummary {
    pub open_positions: usize,
    pub closed_positions: usize,
    pub open_pnl: f64,
    pub closed_pnl: f64,
    pub winning_closed: usize,
    pub win_rate: f64,
}

impl FuturesSummary {
    pub fn from_positions(positions: &[FuturesPosition]) -> Self {
        let (open, closed): (Vec<&FuturesPosition>, Vec<&FuturesPosition>) =
            positions.iter().partition(|p| p.is_open());

        let open_pnl = open.iter().map(|p| p.unrealized_pnl()).sum();
        let closed_pnl = closed.iter().map(|p| p.pnl.unwrap_or(0.0)).sum();
        let winning_closed = closed
            .iter()
            .filter(|p| p.pnl.unwrap_or(0.0) > 0.0)
            .count();

        Self {
            open_positions: open.len(),
            closed_positions: closed.len(),
            open_pnl,
            closed_pnl,
            winning_closed,
            win_rate: if closed.is_empty() {
                0.0
            } else {
                winning_closed as f64 / closed.len() as f64 * 100.0
            },
        }
    }
}
