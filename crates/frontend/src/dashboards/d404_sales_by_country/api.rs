use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::dashboards::d404_sales_by_country::GeoDatum;

const PATH: &str = "/api/geo_chart_data";

/// Sales value per ISO country code
pub async fn fetch_geo_data(base: &str) -> Result<Vec<GeoDatum>, ApiError> {
    get_json(&api_url(base, PATH)).await
}
