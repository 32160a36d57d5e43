use serde::Serialize;

/// Flat rate applied to realized crypto gains.
pub const GAINS_TAX_RATE: f64 = 0.30;
/// Flat TDS placeholder on positive futures P&L.
pub const TDS_RATE: f64 = 0.01;

/// TDS withheld on a futures P&L. Losses withhold nothing.
pub fn tds_estimate(futures_pnl: f64) -> f64 {
    futures_pnl.max(0.0) * TDS_RATE
}

/// India tax estimate shown next to the portfolio. Educational only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPreview {
    pub realized_gains: f64,
    pub estimated_tax: f64,
    pub futures_tds: f64,
}

impl TaxPreview {
    pub fn new(realized_gains: f64, futures_tds: f64) -> Self {
        let realized_gains = if realized_gains.is_finite() {
            realized_gains
        } else {
            0.0
        };
        Self {
            realized_gains,
            estimated_tax: realized_gains * GAINS_TAX_RATE,
            futures_tds,
        }
    }

    pub fn shows_tds(&self) -> bool {
        self.futures_tds > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tds_is_never_negative() {
        assert_eq!(tds_estimate(-500.0), 0.0);
        assert_eq!(tds_estimate(0.0), 0.0);
        assert!((tds_estimate(12_000.0) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn preview_taxes_gains_at_thirty_percent() {
        let p = TaxPreview::new(100_000.0, 250.0);
        assert!((p.estimated_tax - 30_000.0).abs() < 1e-9);
        assert!(p.shows_tds());
        assert!(!TaxPreview::new(1.0, 0.0).shows_tds());
    }

    #[test]
    fn missing_gains_count_as_zero() {
        let p = TaxPreview::new(f64::NAN, 0.0);
        assert_eq!(p.realized_gains, 0.0);
        assert_eq!(p.estimated_tax, 0.0);
    }
}
