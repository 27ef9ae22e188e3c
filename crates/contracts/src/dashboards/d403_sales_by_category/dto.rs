use serde::{Deserialize, Serialize};

/// Share of current-year sales for one product category
/// (`GET /api/pie_chart_data`). `value` is a percentage rounded to 2 places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub id: String,
    pub label: String,
    pub value: f64,
}
