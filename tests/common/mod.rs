use chrono::NaiveDate;
use trade_journal::models::{DayRecord, RecordKind, TradeDirection, TradeRecord};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a trade; spot trades are Buy, futures trades Long.
pub fn make_trade(id: &str, pair: &str, pnl: f64, is_futures: bool, tags: &[&str]) -> TradeRecord {
    TradeRecord {
        id: id.to_string(),
        pair: pair.to_string(),
        direction: if is_futures {
            TradeDirection::Long
        } else {
            TradeDirection::Buy
        },
        pnl,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_futures,
    }
}

/// A small supplied trade history spanning a month boundary.
pub fn supplied_history() -> Vec<DayRecord> {
    vec![
        DayRecord::from_trades(
            ymd(2024, 1, 30),
            RecordKind::Trades,
            vec![make_trade("t1", "ETH/USDT", 5_000.0, false, &["Swing"])],
        ),
        DayRecord::from_trades(
            ymd(2024, 2, 1),
            RecordKind::Trades,
            vec![
                make_trade("t2", "BTC/USDT", 12_000.0, false, &["Breakout"]),
                make_trade("t3", "BTC/USDT Perp", -3_000.0, true, &["Breakout"]),
                make_trade("t4", "SOL/USDT", -800.0, false, &[]),
            ],
        ),
        DayRecord::from_trades(
            ymd(2024, 2, 14),
            RecordKind::Trades,
            vec![make_trade("t5", "BTC/USDT", -2_500.0, false, &["Scalping"])],
        ),
    ]
}
