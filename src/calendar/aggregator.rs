use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::calendar::month::YearMonth;
use crate::models::{DayRecord, MarketType, RecordKind, TradeRecord};

/// Calendar day of `instant` as seen in `tz`. Day keys are always produced
/// this way so that lookups never shift by a day across timezones.
pub fn local_date<T: TimeZone>(instant: DateTime<T>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Supplied records that fall inside the displayed month.
pub fn records_for_month(records: &[DayRecord], month: YearMonth) -> Vec<DayRecord> {
    records
        .iter()
        .filter(|r| month.contains(r.date))
        .cloned()
        .collect()
}

/// Day records keyed by date-only calendar day.
#[derive(Debug, Clone)]
pub struct DayIndex {
    kind: RecordKind,
    days: HashMap<NaiveDate, DayRecord>,
}

impl DayIndex {
    pub fn new(kind: RecordKind, records: impl IntoIterator<Item = DayRecord>) -> Self {
        let days = records.into_iter().map(|r| (r.date, r)).collect();
        Self { kind, days }
    }

    /// Record for `date`, or a zero-value record when none exists.
    pub fn lookup(&self, date: NaiveDate) -> DayRecord {
        self.get(date)
            .cloned()
            .unwrap_or_else(|| DayRecord::empty(date, self.kind))
    }

    pub fn lookup_instant(&self, instant: DateTime<Utc>, tz: Tz) -> DayRecord {
        self.lookup(local_date(instant, tz))
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Trade-level filter. Every set field must match; unset or blank fields
/// match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayFilter {
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_type: Option<MarketType>,
}

impl DayFilter {
    pub fn pair(pair: &str) -> Self {
        Self {
            pair: Some(pair.to_string()),
            ..Self::default()
        }
    }

    pub fn strategy(tag: &str) -> Self {
        Self {
            strategy: Some(tag.to_string()),
            ..Self::default()
        }
    }

    pub fn market(market_type: MarketType) -> Self {
        Self {
            market_type: Some(market_type),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        non_blank(&self.pair).is_none()
            && non_blank(&self.strategy).is_none()
            && self.market_type.is_none()
    }

    pub fn matches(&self, trade: &TradeRecord) -> bool {
        if let Some(pair) = non_blank(&self.pair) {
            if trade.pair != pair {
                return false;
            }
        }
        if let Some(tag) = non_blank(&self.strategy) {
            if !trade.has_tag(tag) {
                return false;
            }
        }
        if let Some(market) = self.market_type {
            if !market.matches(trade.is_futures) {
                return false;
            }
        }
        true
    }

    /// Both filters applied at once.
    pub fn and(&self, other: &DayFilter) -> Option<DayFilter> {
        let pair = merge_field(&owned(&self.pair), &owned(&other.pair))?;
        let strategy = merge_field(&owned(&self.strategy), &owned(&other.strategy))?;
        let market_type = merge_field(&self.market_type, &other.market_type)?;
        Some(DayFilter {
            pair,
            strategy,
            market_type,
        })
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn owned(field: &Option<String>) -> Option<String> {
    non_blank(field).map(str::to_string)
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(owned(&value))
}

// `None` from the outer option means the two constraints can never both hold.
fn merge_field<T: Clone + PartialEq>(a: &Option<T>, b: &Option<T>) -> Option<Option<T>> {
    match (a, b) {
        (Some(x), Some(y)) if x != y => None,
        (Some(x), _) => Some(Some(x.clone())),
        (None, y) => Some(y.clone()),
    }
}

/// Keep only trades passing `filter` and recompute each day from what remains.
pub fn apply_filters(days: &[DayRecord], filter: &DayFilter) -> Vec<DayRecord> {
    if filter.is_empty() {
        return days.to_vec();
    }

    let filtered: Vec<DayRecord> = days
        .iter()
        .map(|day| {
            if day.trades.is_empty() {
                return day.clone();
            }
            let kept: Vec<TradeRecord> = day
                .trades
                .iter()
                .filter(|t| filter.matches(t))
                .cloned()
                .collect();
            DayRecord::from_trades(day.date, day.kind, kept)
        })
        .collect();

    debug!(
        "Filter {:?} kept {} of {} trades",
        filter,
        filtered.iter().map(|d| d.trade_count).sum::<usize>(),
        days.iter().map(|d| d.trade_count).sum::<usize>()
    );
    filtered
}
