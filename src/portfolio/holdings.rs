use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub coin: String,
    pub symbol: String,
    pub quantity: f64,
    pub average_buy_price: f64,
    pub current_price: f64,
}

impl Holding {
    pub fn value(&self) -> f64 {
        self.quantity * self.current_price
    }

    pub fn cost(&self) -> f64 {
        self.quantity * self.average_buy_price
    }

    pub fn pnl(&self) -> f64 {
        self.value() - self.cost()
    }

    pub fn pnl_percent(&self) -> f64 {
        let cost = self.cost();
        if cost > 0.0 {
            self.pnl() / cost * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_cost: f64,
    pub total_change: f64,
    pub total_change_percent: f64,
    /// Largest single-holding share of total value, in percent.
    pub largest_allocation: f64,
}

impl PortfolioSummary {
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let total_value: f64 = holdings.iter().map(Holding::value).sum();
        let total_cost: f64 = holdings.iter().map(Holding::cost).sum();
        let total_change = total_value - total_cost;

        let largest_allocation = holdings
            .iter()
            .map(|h| allocation_percent(h, total_value))
            .fold(0.0, f64::max);

        Self {
            total_value,
            total_cost,
            total_change,
            total_change_percent: if total_cost > 0.0 {
                total_change / total_cost * 100.0
            } else {
                0.0
            },
            largest_allocation,
        }
    }
}

/// Share of `total_value` held in `holding`, in percent.
pub fn allocation_percent(holding: &Holding, total_value: f64) -> f64 {
    if total_value > 0.0 {
        holding.value() / total_value * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::holding;

    #[test]
    fn summary_totals_and_allocation() {
        let holdings = vec![
            holding("BTC", 0.5, 80.0, 100.0),
            holding("ETH", 2.0, 30.0, 25.0),
        ];
        let s = PortfolioSummary::from_holdings(&holdings);
        assert!((s.total_value - 100.0).abs() < 1e-9);
        assert!((s.total_cost - 100.0).abs() < 1e-9);
        assert!(s.total_change.abs() < 1e-9);
        assert!(s.total_change_percent.abs() < 1e-9);
        assert!((s.largest_allocation - 50.0).abs() < 1e-9);
        assert!((allocation_percent(&holdings[1], s.total_value) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn holding_pnl() {
        let h = holding("SOL", 10.0, 24_000.0, 25_344.0);
        assert!((h.pnl() - 13_440.0).abs() < 1e-6);
        assert!((h.pnl_percent() - 5.6).abs() < 1e-9);
    }

    #[test]
    fn empty_portfolio_has_zero_percentages() {
        let s = PortfolioSummary::from_holdings(&[]);
        assert_eq!(s.total_value, 0.0);
        assert_eq!(s.total_change_percent, 0.0);
        assert_eq!(s.largest_allocation, 0.0);
        assert_eq!(allocation_percent(&holding("ADA", 1.0, 1.0, 1.0), 0.0), 0.0);
    }
}
