use serde::{Deserialize, Serialize};

/// Monthly site traffic totals (`GET /api/bar_chart_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPoint {
    /// Period in format "YYYY-MM"
    pub year_month: String,
    pub inbound_traffic: f64,
    pub unique_visitors: f64,
}
