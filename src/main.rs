use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal::calendar::{local_date, CalendarView, CellView, MockSource, YearMonth};
use trade_journal::config::Config;
use trade_journal::models::{DayOutcome, RecordKind};
use trade_journal::routing::{GuardPaths, OnboardingAnswers, RouteTable, SessionStore};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::new(Rfc3339))
        .init();

    // trade-journal [year] [month 1-12] [futures|trades] [--json]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    let today = local_date(Utc::now(), cfg.timezone);
    let year: i32 = match positional.first() {
        Some(s) => s.parse().with_context(|| format!("invalid year {s:?}"))?,
        None => today.year(),
    };
    let month: i64 = match positional.get(1) {
        Some(s) => s.parse().with_context(|| format!("invalid month {s:?}"))?,
        None => today.month() as i64,
    };
    let kind: RecordKind = match positional.get(2) {
        Some(s) => s.parse()?,
        None => cfg.record_kind,
    };
    let month = YearMonth::from_calendar(year, month)
        .with_context(|| format!("invalid month argument for {year}"))?;

    // Demo session: signed in and onboarded, so the dashboard renders.
    let session = SessionStore::new();
    session.login("demo@tradejournal.app").await;
    session
        .complete_onboarding(OnboardingAnswers {
            experience_level: "Intermediate".to_string(),
            investment_goal: "Long-term growth".to_string(),
            risk_comfort: "Balanced".to_string(),
        })
        .await;

    let routes = RouteTable::journal(GuardPaths::from_config(&cfg));
    let landed = routes.follow("/dashboard", session.snapshot().await)?;
    info!("Route /dashboard resolved to {}", landed);

    let mut source = MockSource::new(cfg.seed);
    if cfg.seed.is_none() {
        warn!("JOURNAL_SEED not set; calendar data will differ between runs");
    }
    let view = CalendarView::load(&mut source, month, kind).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view.days())?);
        return Ok(());
    }

    print_grid(&view.cells(today), &cfg.currency);
    view.report().print_summary(&cfg.currency);

    Ok(())
}

fn print_grid(cells: &[CellView], currency: &str) {
    println!();
    println!(
        "  {}",
        WEEKDAYS
            .iter()
            .map(|d| format!("{:<9}", d))
            .collect::<String>()
    );
    for week in cells.chunks(7) {
        let line: String = week.iter().map(|c| format_cell(c, currency)).collect();
        println!("  {}", line);
    }
}

fn format_cell(cell: &CellView, currency: &str) -> String {
    let day = cell.cell.date.day();
    if !cell.cell.belongs_to_displayed_month {
        return format!("{:<9}", format!("({})", day));
    }
    let marker = if cell.is_today { "*" } else { "" };
    let body = match cell.outcome {
        DayOutcome::NoTrades => format!("{}{}", day, marker),
        DayOutcome::Winning => format!("{}{} +{}{}k", day, marker, currency, (cell.day.pnl / 1000.0).round()),
        DayOutcome::Losing => format!("{}{} -{}{}k", day, marker, currency, (cell.day.pnl.abs() / 1000.0).round()),
        DayOutcome::Flat => format!("{}{} 0", day, marker),
    };
    format!("{:<9}", body)
}
