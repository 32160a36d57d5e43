use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::calendar::aggregator::{apply_filters, records_for_month, DayFilter, DayIndex};
use crate::calendar::grid::{build_month_grid, CalendarCell};
use crate::calendar::month::YearMonth;
use crate::calendar::report::MonthReport;
use crate::calendar::source::DayRecordSource;
use crate::models::{DayOutcome, DayRecord, RecordKind};

/// One rendered grid cell with its resolved day.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub cell: CalendarCell,
    pub day: DayRecord,
    pub outcome: DayOutcome,
    pub is_today: bool,
}

/// State behind a trading calendar: the displayed month, the loaded records,
/// the active filter and the selected day.
///
/// Every month change reloads from the source; nothing is cached across months.
pub struct CalendarView {
    month: YearMonth,
    kind: RecordKind,
    filter: DayFilter,
    records: Vec<DayRecord>,
    index: DayIndex,
    selected: Option<DayRecord>,
}

impl CalendarView {
    pub async fn load(
        source: &mut dyn DayRecordSource,
        month: YearMonth,
        kind: RecordKind,
    ) -> Result<Self> {
        let mut view = Self {
            month,
            kind,
            filter: DayFilter::default(),
            records: Vec::new(),
            index: DayIndex::new(kind, Vec::new()),
            selected: None,
        };
        view.reload(source).await?;
        Ok(view)
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn filter(&self) -> &DayFilter {
        &self.filter
    }

    pub fn selected(&self) -> Option<&DayRecord> {
        self.selected.as_ref()
    }

    /// Filtered records of the displayed month, in date order.
    pub fn days(&self) -> Vec<DayRecord> {
        self.month.days().filter_map(|d| self.index.get(d).cloned()).collect()
    }

    pub fn cells(&self, today: NaiveDate) -> Vec<CellView> {
        build_month_grid(self.month)
            .into_iter()
            .map(|cell| {
                let day = self.index.lookup(cell.date);
                CellView {
                    cell,
                    outcome: day.outcome(),
                    is_today: cell.date == today,
                    day,
                }
            })
            .collect()
    }

    pub fn set_filter(&mut self, filter: DayFilter) {
        self.filter = filter;
        self.reindex();
    }

    /// Select a day for drill-down. Days without data resolve to a zero record.
    pub fn select(&mut self, date: NaiveDate) -> &DayRecord {
        self.selected.insert(self.index.lookup(date))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub async fn next_month(&mut self, source: &mut dyn DayRecordSource) -> Result<()> {
        self.month = self.month.next()?;
        self.reload(source).await
    }

    pub async fn prev_month(&mut self, source: &mut dyn DayRecordSource) -> Result<()> {
        self.month = self.month.prev()?;
        self.reload(source).await
    }

    pub fn report(&self) -> MonthReport {
        MonthReport::from_days(self.month, self.kind, &self.days())
    }

    async fn reload(&mut self, source: &mut dyn DayRecordSource) -> Result<()> {
        let fetched = source.fetch_month(self.month, self.kind).await?;
        self.records = records_for_month(&fetched, self.month);
        self.selected = None;
        self.reindex();
        info!(
            "Loaded {} calendar for {} ({} records)",
            self.kind,
            self.month,
            self.records.len()
        );
        Ok(())
    }

    fn reindex(&mut self) {
        let filtered = apply_filters(&self.records, &self.filter);
        self.index = DayIndex::new(self.kind, filtered);
        if let Some(date) = self.selected.as_ref().map(|d| d.date) {
            self.selected = Some(self.index.lookup(date));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::source::StaticSource;
    use crate::models::MarketType;
    use crate::test_helpers::{day, trade};

    fn ymd(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn source() -> StaticSource {
        StaticSource::new(vec![
            day(
                ymd(1, 10),
                RecordKind::Trades,
                vec![
                    trade("1", "BTC/USDT", 2500.0, false),
                    trade("2", "BTC/USDT Perp", -4000.0, true),
                ],
            ),
            day(ymd(2, 5), RecordKind::Trades, vec![trade("3", "ETH/USDT", 900.0, false)]),
        ])
    }

    #[tokio::test]
    async fn cells_resolve_to_records_or_zero_days() {
        let mut src = source();
        let view = CalendarView::load(&mut src, YearMonth::new(2024, 0).unwrap(), RecordKind::Trades)
            .await
            .unwrap();
        let cells = view.cells(ymd(1, 10));
        assert_eq!(cells.len(), 35);

        let hit = cells.iter().find(|c| c.cell.date == ymd(1, 10)).unwrap();
        assert_eq!(hit.day.trade_count, 2);
        assert_eq!(hit.outcome, DayOutcome::Losing);
        assert!(hit.is_today);

        // Feb 1 is padding; Feb data was not loaded for the January view.
        let pad = cells.iter().find(|c| c.cell.date == ymd(2, 1)).unwrap();
        assert!(!pad.cell.belongs_to_displayed_month);
        assert_eq!(pad.outcome, DayOutcome::NoTrades);
    }

    #[tokio::test]
    async fn filter_change_reaggregates_selected_day() {
        let mut src = source();
        let mut view = CalendarView::load(&mut src, YearMonth::new(2024, 0).unwrap(), RecordKind::Trades)
            .await
            .unwrap();
        assert_eq!(view.select(ymd(1, 10)).pnl, -1500.0);

        view.set_filter(DayFilter::market(MarketType::Spot));
        let selected = view.selected().unwrap();
        assert_eq!(selected.pnl, 2500.0);
        assert_eq!(selected.trade_count, 1);
        assert_eq!(view.report().total_pnl, 2500.0);
    }

    #[tokio::test]
    async fn selecting_empty_day_gives_zero_record() {
        let mut src = source();
        let mut view = CalendarView::load(&mut src, YearMonth::new(2024, 0).unwrap(), RecordKind::Trades)
            .await
            .unwrap();
        let empty = view.select(ymd(1, 11)).clone();
        assert_eq!(empty, DayRecord::empty(ymd(1, 11), RecordKind::Trades));
        view.clear_selection();
        assert!(view.selected().is_none());
    }

    #[tokio::test]
    async fn navigation_reloads_month() {
        let mut src = source();
        let mut view = CalendarView::load(&mut src, YearMonth::new(2024, 0).unwrap(), RecordKind::Trades)
            .await
            .unwrap();
        view.select(ymd(1, 10));
        view.next_month(&mut src).await.unwrap();
        assert_eq!(view.month(), YearMonth::new(2024, 1).unwrap());
        assert!(view.selected().is_none());
        assert_eq!(view.days().len(), 1);
        assert_eq!(view.report().total_pnl, 900.0);

        view.prev_month(&mut src).await.unwrap();
        view.prev_month(&mut src).await.unwrap();
        assert_eq!(view.month(), YearMonth::new(2023, 11).unwrap());
        assert!(view.days().is_empty());
    }
}
