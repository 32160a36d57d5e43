use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::JournalError;

/// Side of a journal trade. Spot trades are Buy/Sell, futures trades Long/Short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    Buy,
    Sell,
    Long,
    Short,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TradeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Buy => "Buy",
            TradeDirection::Sell => "Sell",
            TradeDirection::Long => "Long",
            TradeDirection::Short => "Short",
        }
    }

    pub fn is_derivative(self) -> bool {
        matches!(self, TradeDirection::Long | TradeDirection::Short)
    }
}

impl FromStr for TradeDirection {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(TradeDirection::Buy),
            "sell" => Ok(TradeDirection::Sell),
            "long" => Ok(TradeDirection::Long),
            "short" => Ok(TradeDirection::Short),
            _ => Err(JournalError::UnknownDirection(s.to_string())),
        }
    }
}

/// Side of an open futures position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionSide {
    Long,
    Short,
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSide::Long => write!(f, "Long"),
            PositionSide::Short => write!(f, "Short"),
        }
    }
}

/// Which calendar a set of day records belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Futures,
    Trades,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Futures => write!(f, "futures"),
            RecordKind::Trades => write!(f, "trades"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "futures" => Ok(RecordKind::Futures),
            "trades" | "spot" => Ok(RecordKind::Trades),
            _ => Err(JournalError::UnknownRecordKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    Futures,
    Spot,
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketType::Futures => write!(f, "futures"),
            MarketType::Spot => write!(f, "spot"),
        }
    }
}

impl MarketType {
    /// Parse a market filter value. `"all"` means no constraint and yields `None`.
    pub fn parse_filter(s: &str) -> Result<Option<Self>, JournalError> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(None),
            "futures" => Ok(Some(MarketType::Futures)),
            "spot" => Ok(Some(MarketType::Spot)),
            _ => Err(JournalError::UnknownMarketType(s.to_string())),
        }
    }

    pub fn matches(self, is_futures: bool) -> bool {
        match self {
            MarketType::Futures => is_futures,
            MarketType::Spot => !is_futures,
        }
    }
}

/// Colour class of a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOutcome {
    Winning,
    Losing,
    Flat,
    NoTrades,
}

impl fmt::Display for DayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOutcome::Winning => write!(f, "winning"),
            DayOutcome::Losing => write!(f, "losing"),
            DayOutcome::Flat => write!(f, "flat"),
            DayOutcome::NoTrades => write!(f, "no_trades"),
        }
    }
}
