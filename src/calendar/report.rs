use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::month::YearMonth;
use crate::models::{DayOutcome, DayRecord, RecordKind};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
    pub month: YearMonth,
    pub kind: RecordKind,

    // P&L
    pub total_pnl: f64,
    pub gross_pnl: f64,
    pub net_pnl: f64,
    pub total_tds: f64,

    // Days
    pub trading_days: usize,
    pub winning_days: usize,
    pub losing_days: usize,
    pub best_day: Option<(NaiveDate, f64)>,
    pub worst_day: Option<(NaiveDate, f64)>,

    // Trades
    pub total_trades: usize,
    pub winning_trades: usize,
    pub win_rate: Option<f64>,
}

impl MonthReport {
    pub fn from_days(month: YearMonth, kind: RecordKind, days: &[DayRecord]) -> Self {
        let in_month: Vec<&DayRecord> = days.iter().filter(|d| month.contains(d.date)).collect();
        let active: Vec<&&DayRecord> = in_month.iter().filter(|d| d.has_trades()).collect();

        let total_trades: usize = active.iter().map(|d| d.trade_count).sum();
        let winning_trades: usize = active.iter().map(|d| d.winning_trades()).sum();

        let best_day = active
            .iter()
            .max_by(|a, b| a.pnl.total_cmp(&b.pnl))
            .map(|d| (d.date, d.pnl));
        let worst_day = active
            .iter()
            .min_by(|a, b| a.pnl.total_cmp(&b.pnl))
            .map(|d| (d.date, d.pnl));

        MonthReport {
            month,
            kind,
            total_pnl: active.iter().map(|d| d.pnl).sum(),
            gross_pnl: active.iter().filter_map(|d| d.gross_pnl).sum(),
            net_pnl: active.iter().filter_map(|d| d.net_pnl).sum(),
            total_tds: active.iter().map(|d| d.tds_estimate()).sum(),
            trading_days: active.len(),
            winning_days: active
                .iter()
                .filter(|d| d.outcome() == DayOutcome::Winning)
                .count(),
            losing_days: active
                .iter()
                .filter(|d| d.outcome() == DayOutcome::Losing)
                .count(),
            best_day,
            worst_day,
            total_trades,
            winning_trades,
            win_rate: if total_trades > 0 {
                Some(winning_trades as f64 / total_trades as f64 * 100.0)
            } else {
                None
            },
        }
    }

    pub fn print_summary(&self, currency: &str) {
        let title = match self.kind {
            RecordKind::Futures => "FUTURES CALENDAR",
            RecordKind::Trades => "TRADES CALENDAR",
        };

        println!("\n{}", "=".repeat(60));
        println!("  {} – {}", title, self.month);
        println!("{}", "=".repeat(60));
        println!();
        println!("  P&L");
        println!("  ───────────────────────────────────");
        println!("  Total:       {}", signed_money(currency, self.total_pnl));
        println!("  Gross (≈):   {}", signed_money(currency, self.gross_pnl));
        println!("  Net (≈):     {}", signed_money(currency, self.net_pnl));
        if self.kind == RecordKind::Futures {
            println!("  TDS est.:    {}{:.0}", currency, self.total_tds);
        }
        println!();
        println!("  DAYS");
        println!("  ───────────────────────────────────");
        println!("  Trading:     {}", self.trading_days);
        println!(
            "  Win/Loss:    {} / {}",
            self.winning_days, self.losing_days
        );
        if let Some((date, pnl)) = self.best_day {
            println!("  Best:        {} {}", date, signed_money(currency, pnl));
        }
        if let Some((date, pnl)) = self.worst_day {
            println!("  Worst:       {} {}", date, signed_money(currency, pnl));
        }
        println!();
        println!("  TRADES");
        println!("  ───────────────────────────────────");
        println!("  Total:       {}", self.total_trades);
        println!("  Winners:     {}", self.winning_trades);
        match self.win_rate {
            Some(wr) => println!("  Win Rate:    {:.1}%", wr),
            None => println!("  Win Rate:    –"),
        }
        println!("{}", "=".repeat(60));
    }
}

pub fn signed_money(currency: &str, amount: f64) -> String {
    let sign = if amount > 0.0 {
        "+"
    } else if amount < 0.0 {
        "-"
    } else {
        ""
    };
    format!("{}{}{:.0}", sign, currency, amount.abs())
}
