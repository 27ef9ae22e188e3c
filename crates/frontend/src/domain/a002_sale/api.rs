use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::domain::a002_sale::SalesRecord;

pub const RESOURCE: &str = "sales_data";
const PATH: &str = "/api/sales_data";

/// Every sale in server order (oldest first)
pub async fn fetch_sales(base: &str) -> Result<Vec<SalesRecord>, ApiError> {
    get_json(&api_url(base, PATH)).await
}
