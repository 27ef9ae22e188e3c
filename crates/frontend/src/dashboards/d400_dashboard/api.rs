use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::dashboards::d400_dashboard_summary::CardsSummary;

const PATH: &str = "/api/cards_data";

/// Current-month totals and their deltas against the previous month
pub async fn fetch_cards(base: &str) -> Result<CardsSummary, ApiError> {
    get_json(&api_url(base, PATH)).await
}
