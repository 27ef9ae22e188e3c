use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::post_json;
use contracts::system::users::{CreateUserDto, CreateUserResponse};

const PATH: &str = "/api/users";

/// Create a team member; the server answers 201 with the new id
pub async fn create_user(base: &str, dto: &CreateUserDto) -> Result<CreateUserResponse, ApiError> {
    post_json(&api_url(base, PATH), dto).await
}
