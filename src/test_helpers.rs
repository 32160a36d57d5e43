use chrono::NaiveDate;

use crate::config::{Config, DEFAULT_TIMEZONE};
use crate::models::{DayRecord, PositionSide, RecordKind, TradeDirection, TradeRecord};
use crate::portfolio::{FuturesPosition, Holding};

/// Untagged trade. Futures trades are Long, spot trades Buy.
pub fn trade(id: &str, pair: &str, pnl: f64, is_futures: bool) -> TradeRecord {
    TradeRecord {
        id: id.to_string(),
        pair: pair.to_string(),
        direction: if is_futures {
            TradeDirection::Long
        } else {
            TradeDirection::Buy
        },
        pnl,
        tags: Vec::new(),
        is_futures,
    }
}

pub fn tagged_trade(id: &str, pair: &str, pnl: f64, is_futures: bool, tag: &str) -> TradeRecord {
    TradeRecord {
        tags: vec![tag.to_string()],
        ..trade(id, pair, pnl, is_futures)
    }
}

pub fn day(date: NaiveDate, kind: RecordKind, trades: Vec<TradeRecord>) -> DayRecord {
    DayRecord::from_trades(date, kind, trades)
}

pub fn holding(symbol: &str, quantity: f64, average_buy_price: f64, current_price: f64) -> Holding {
    Holding {
        id: symbol.to_lowercase(),
        coin: symbol.to_string(),
        symbol: symbol.to_string(),
        quantity,
        average_buy_price,
        current_price,
    }
}

/// Open position with no mark, stop or target.
pub fn position(id: &str, direction: PositionSide, size: f64, entry_price: f64) -> FuturesPosition {
    FuturesPosition {
        id: id.to_string(),
        pair: "BTC/USDT Perp".to_string(),
        direction,
        size,
        entry_price,
        mark_price: None,
        stop_loss: None,
        take_profit: None,
        notes: None,
        open_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        close_date: None,
        exit_price: None,
        pnl: None,
        pnl_percent: None,
    }
}

/// A Config suitable for testing: default paths, fixed seed, quiet logging.
pub fn default_test_config() -> Config {
    Config {
        currency: "₹".to_string(),
        timezone: DEFAULT_TIMEZONE,
        record_kind: RecordKind::Futures,
        seed: Some(42),
        login_path: "/auth".to_string(),
        onboarding_path: "/onboarding".to_string(),
        landing_path: "/".to_string(),
        log_level: "ERROR".to_string(),
    }
}
