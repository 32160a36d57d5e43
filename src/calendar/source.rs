use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use std::time::Duration;

use crate::calendar::aggregator::records_for_month;
use crate::calendar::generator::CalendarGenerator;
use crate::calendar::month::YearMonth;
use crate::models::{DayRecord, RecordKind};

/// Where a calendar gets its day records from. A trade-history endpoint would
/// implement this with the same record shape.
#[async_trait]
pub trait DayRecordSource: Send + Sync {
    async fn fetch_month(&mut self, month: YearMonth, kind: RecordKind) -> Result<Vec<DayRecord>>;
}

/// Generates a fresh random month on every fetch.
pub struct MockSource {
    generator: CalendarGenerator<StdRng>,
    latency: Option<Duration>,
}

impl MockSource {
    pub fn new(seed: Option<u64>) -> Self {
        let generator = match seed {
            Some(s) => CalendarGenerator::seeded(s),
            None => CalendarGenerator::from_entropy(),
        };
        Self {
            generator,
            latency: None,
        }
    }

    /// Delay every fetch, mimicking a network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl DayRecordSource for MockSource {
    async fn fetch_month(&mut self, month: YearMonth, kind: RecordKind) -> Result<Vec<DayRecord>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.generator.generate(month, kind))
    }
}

/// Serves records that were supplied up front. Only records of the requested
/// kind are returned.
pub struct StaticSource {
    records: Vec<DayRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<DayRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DayRecordSource for StaticSource {
    async fn fetch_month(&mut self, month: YearMonth, kind: RecordKind) -> Result<Vec<DayRecord>> {
        let mut records = records_for_month(&self.records, month);
        records.retain(|r| r.kind == kind);
        Ok(records)
    }
}
