use serde::{Deserialize, Serialize};

/// One line of the sales-by-month chart (`GET /api/line_chart_data`).
/// There is one series per year; `id` carries the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSeries {
    pub id: String,
    #[serde(default)]
    pub color: Option<String>,
    pub data: Vec<SalesPoint>,
}

/// Monthly sales total: `x` is the month abbreviation ("Jan"), `y` the amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub x: String,
    pub y: f64,
}
