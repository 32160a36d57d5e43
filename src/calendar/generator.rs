use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::calendar::month::YearMonth;
use crate::models::{DayRecord, RecordKind, TradeDirection, TradeRecord};

pub const PAIRS: &[&str] = &[
    "BTC/USDT",
    "ETH/USDT",
    "SOL/USDT",
    "MATIC/USDT",
    "ADA/USDT",
    "BTC/USDT Perp",
    "ETH/USDT Perp",
];

pub const STRATEGIES: &[&str] = &["Breakout", "Reversal", "Trend Following", "Scalping", "Swing"];

const TRADING_DAY_PROBABILITY: f64 = 0.7;
const MAX_TRADES_PER_DAY: usize = 5;
const WIN_PROBABILITY: f64 = 0.6;
const TAG_PROBABILITY: f64 = 0.5;
const WIN_PNL_MIN: f64 = 1_000.0;
const WIN_PNL_MAX: f64 = 51_000.0;
const LOSS_PNL_MIN: f64 = 500.0;
const LOSS_PNL_MAX: f64 = 30_500.0;

/// Mock trade-history generator.
///
/// Output depends entirely on the injected RNG: use [`CalendarGenerator::seeded`]
/// for reproducible months and [`CalendarGenerator::from_entropy`] otherwise.
pub struct CalendarGenerator<R: Rng = StdRng> {
    rng: R,
}

impl CalendarGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> CalendarGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// One record per calendar day of `month`, in date order.
    pub fn generate(&mut self, month: YearMonth, kind: RecordKind) -> Vec<DayRecord> {
        let days: Vec<DayRecord> = month.days().map(|date| self.generate_day(date, kind)).collect();

        debug!(
            "Generated {} {} calendar: {} trading days",
            month,
            kind,
            days.iter().filter(|d| d.has_trades()).count()
        );
        days
    }

    fn generate_day(&mut self, date: NaiveDate, kind: RecordKind) -> DayRecord {
        if !self.rng.gen_bool(TRADING_DAY_PROBABILITY) {
            return DayRecord::empty(date, kind);
        }

        let count = self.rng.gen_range(1..=MAX_TRADES_PER_DAY);
        let trades = (0..count)
            .map(|i| self.generate_trade(date, i, kind))
            .collect();

        DayRecord::from_trades(date, kind, trades)
    }

    fn generate_trade(&mut self, date: NaiveDate, index: usize, kind: RecordKind) -> TradeRecord {
        let pair = PAIRS[self.rng.gen_range(0..PAIRS.len())];

        let long_side = self.rng.gen_bool(0.5);
        let direction = match (kind, long_side) {
            (RecordKind::Futures, true) => TradeDirection::Long,
            (RecordKind::Futures, false) => TradeDirection::Short,
            (RecordKind::Trades, true) => TradeDirection::Buy,
            (RecordKind::Trades, false) => TradeDirection::Sell,
        };

        let pnl = if self.rng.gen_bool(WIN_PROBABILITY) {
            self.rng.gen_range(WIN_PNL_MIN..=WIN_PNL_MAX)
        } else {
            -self.rng.gen_range(LOSS_PNL_MIN..=LOSS_PNL_MAX)
        };

        let tags = if self.rng.gen_bool(TAG_PROBABILITY) {
            vec![STRATEGIES[self.rng.gen_range(0..STRATEGIES.len())].to_string()]
        } else {
            Vec::new()
        };

        TradeRecord {
            id: format!("{}-{}", date, index),
            pair: pair.to_string(),
            direction,
            pnl,
            tags,
            is_futures: kind == RecordKind::Futures || is_perpetual(pair),
        }
    }
}

pub fn is_perpetual(pair: &str) -> bool {
    pair.contains("Perp")
}
