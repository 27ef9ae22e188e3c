use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::dashboards::d401_traffic_by_month::TrafficPoint;

const PATH: &str = "/api/bar_chart_data";

/// Monthly traffic totals for every year the server has data for
pub async fn fetch_traffic(base: &str) -> Result<Vec<TrafficPoint>, ApiError> {
    get_json(&api_url(base, PATH)).await
}
