use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::dashboards::d403_sales_by_category::CategoryShare;

const PATH: &str = "/api/pie_chart_data";

/// Share of the current year's sales per product category, in percent
pub async fn fetch_category_shares(base: &str) -> Result<Vec<CategoryShare>, ApiError> {
    get_json(&api_url(base, PATH)).await
}
