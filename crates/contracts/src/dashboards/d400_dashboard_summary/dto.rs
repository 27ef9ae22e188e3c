use serde::{Deserialize, Serialize};

/// Aggregate metrics for the dashboard cards (`GET /api/cards_data`).
///
/// Current-month figures are compared against the previous month; the
/// `percentage_diff_*` fields are ratios (`0.12` means +12%) and are `null`
/// when the comparison base is zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardsSummary {
    pub november_orders: u64,
    pub november_income: f64,
    pub november_new_clients: u64,
    pub annual_income_2024: f64,
    pub november_inbound_traffic: f64,
    #[serde(default)]
    pub november_unique_visitors: f64,
    #[serde(default)]
    pub november_avg_session_duration: Option<f64>,
    #[serde(default)]
    pub percentage_diff_orders: Option<f64>,
    #[serde(default)]
    pub percentage_diff_income: Option<f64>,
    #[serde(default)]
    pub percentage_diff_new_clients: Option<f64>,
    #[serde(default)]
    pub percentage_diff_inbound_traffic: Option<f64>,
    #[serde(default)]
    pub percentage_diff_unique_visitors: Option<f64>,
    #[serde(default)]
    pub percentage_diff_income_year: Option<f64>,
}
