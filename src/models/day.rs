use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DayOutcome, RecordKind, TradeDirection};
use crate::portfolio::tax::tds_estimate;

// Gross/net P&L are fixed multiples of the day's total. These are placeholder
// approximations with no fee model behind them; keep them labelled as such.
pub const FUTURES_GROSS_APPROX: f64 = 1.05;
pub const FUTURES_NET_APPROX: f64 = 0.95;
pub const SPOT_GROSS_APPROX: f64 = 1.02;
pub const SPOT_NET_APPROX: f64 = 0.98;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    pub pair: String,
    pub direction: TradeDirection,
    pub pnl: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_futures: bool,
}

impl TradeRecord {
    pub fn is_winner(&self) -> bool {
        self.pnl > 0.0
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesDayStats {
    pub futures_pnl: f64,
    pub tds_estimate: f64,
    pub futures_trades: usize,
}

/// One calendar day of journal activity.
///
/// Aggregates are always derived from `trades` through [`DayRecord::from_trades`];
/// a day with no trades has zero P&L, no win rate and no gross/net figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    pub kind: RecordKind,
    pub pnl: f64,
    pub trade_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_pnl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_pnl: Option<f64>,
    #[serde(default)]
    pub trades: Vec<TradeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub futures: Option<FuturesDayStats>,
}

impl DayRecord {
    /// Zero-value record used for days with no data.
    pub fn empty(date: NaiveDate, kind: RecordKind) -> Self {
        Self {
            date,
            kind,
            pnl: 0.0,
            trade_count: 0,
            win_rate: None,
            gross_pnl: None,
            net_pnl: None,
            trades: Vec::new(),
            futures: None,
        }
    }

    pub fn from_trades(date: NaiveDate, kind: RecordKind, trades: Vec<TradeRecord>) -> Self {
        if trades.is_empty() {
            return Self::empty(date, kind);
        }

        let trade_count = trades.len();
        let pnl: f64 = trades.iter().map(|t| t.pnl).sum();
        let winners = trades.iter().filter(|t| t.is_winner()).count();
        let win_rate = winners as f64 / trade_count as f64 * 100.0;

        let (gross, net) = match kind {
            RecordKind::Futures => (FUTURES_GROSS_APPROX, FUTURES_NET_APPROX),
            RecordKind::Trades => (SPOT_GROSS_APPROX, SPOT_NET_APPROX),
        };

        let futures = match kind {
            RecordKind::Futures => Some(FuturesDayStats {
                futures_pnl: pnl,
                tds_estimate: tds_estimate(pnl),
                futures_trades: trade_count,
            }),
            RecordKind::Trades => None,
        };

        Self {
            date,
            kind,
            pnl,
            trade_count,
            win_rate: Some(win_rate),
            gross_pnl: Some(pnl * gross),
            net_pnl: Some(pnl * net),
            trades,
            futures,
        }
    }

    pub fn has_trades(&self) -> bool {
        self.trade_count > 0
    }

    pub fn winning_trades(&self) -> usize {
        self.trades.iter().filter(|t| t.is_winner()).count()
    }

    pub fn tds_estimate(&self) -> f64 {
        self.futures.as_ref().map_or(0.0, |f| f.tds_estimate)
    }

    pub fn outcome(&self) -> DayOutcome {
        if self.trade_count == 0 {
            DayOutcome::NoTrades
        } else if self.pnl > 0.0 {
            DayOutcome::Winning
        } else if self.pnl < 0.0 {
            DayOutcome::Losing
        } else {
            DayOutcome::Flat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{day, trade};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn empty_day_has_no_aggregates() {
        let d = DayRecord::from_trades(date(), RecordKind::Futures, Vec::new());
        assert_eq!(d, DayRecord::empty(date(), RecordKind::Futures));
        assert_eq!(d.pnl, 0.0);
        assert_eq!(d.trade_count, 0);
        assert!(d.win_rate.is_none());
        assert!(d.futures.is_none());
        assert_eq!(d.outcome(), DayOutcome::NoTrades);
    }

    #[test]
    fn futures_day_aggregates_trades() {
        let d = day(
            date(),
            RecordKind::Futures,
            vec![
                trade("a", "BTC/USDT Perp", 2000.0, true),
                trade("b", "ETH/USDT Perp", -500.0, true),
            ],
        );
        assert_eq!(d.trade_count, 2);
        assert!((d.pnl - 1500.0).abs() < 1e-9);
        assert_eq!(d.win_rate, Some(50.0));
        assert!((d.gross_pnl.unwrap() - 1575.0).abs() < 1e-9);
        assert!((d.net_pnl.unwrap() - 1425.0).abs() < 1e-9);
        let f = d.futures.as_ref().unwrap();
        assert!((f.futures_pnl - 1500.0).abs() < 1e-9);
        assert!((f.tds_estimate - 15.0).abs() < 1e-9);
        assert_eq!(f.futures_trades, 2);
        assert_eq!(d.outcome(), DayOutcome::Winning);
    }

    #[test]
    fn losing_futures_day_has_zero_tds() {
        let d = day(
            date(),
            RecordKind::Futures,
            vec![trade("a", "BTC/USDT Perp", -500.0, true)],
        );
        assert_eq!(d.futures.as_ref().unwrap().futures_pnl, -500.0);
        assert_eq!(d.tds_estimate(), 0.0);
        assert_eq!(d.outcome(), DayOutcome::Losing);
    }

    #[test]
    fn spot_day_uses_spot_multipliers() {
        let d = day(
            date(),
            RecordKind::Trades,
            vec![trade("a", "SOL/USDT", 1000.0, false)],
        );
        assert!((d.gross_pnl.unwrap() - 1020.0).abs() < 1e-9);
        assert!((d.net_pnl.unwrap() - 980.0).abs() < 1e-9);
        assert!(d.futures.is_none());
    }

    #[test]
    fn serializes_date_only_key() {
        let d = DayRecord::empty(date(), RecordKind::Trades);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["tradeCount"], 0);
        assert!(json.get("winRate").is_none());
    }
}
