use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::dashboards::d402_sales_by_month::SalesSeries;

const PATH: &str = "/api/line_chart_data";

/// Monthly sales totals, one series per year
pub async fn fetch_sales_series(base: &str) -> Result<Vec<SalesSeries>, ApiError> {
    get_json(&api_url(base, PATH)).await
}
