use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::domain::a001_client::ClientRecord;

pub const RESOURCE: &str = "client_data";
const PATH: &str = "/api/client_data";

pub async fn fetch_clients(base: &str) -> Result<Vec<ClientRecord>, ApiError> {
    get_json(&api_url(base, PATH)).await
}
