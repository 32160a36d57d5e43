pub mod aggregator;
pub mod generator;
pub mod grid;
pub mod month;
pub mod report;
pub mod source;
pub mod view;

pub use aggregator::{apply_filters, local_date, records_for_month, DayFilter, DayIndex};
pub use generator::CalendarGenerator;
pub use grid::{build_month_grid, grid_len, CalendarCell, GRID_CELLS};
pub use month::YearMonth;
pub use report::MonthReport;
pub use source::{DayRecordSource, MockSource, StaticSource};
pub use view::{CalendarView, CellView};
