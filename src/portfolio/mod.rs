pub mod futures;
pub mod holdings;
pub mod risk;
pub mod tax;

pub use futures::{FuturesPosition, FuturesSummary};
pub use holdings::{allocation_percent, Holding, PortfolioSummary};
pub use risk::{btc_scenario, risk_zone, RiskZone};
pub use tax::{tds_estimate, TaxPreview};
