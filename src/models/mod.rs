pub mod day;
pub mod direction;

pub use day::{DayRecord, FuturesDayStats, TradeRecord};
pub use direction::*;
