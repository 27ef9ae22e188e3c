use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::http::{delete, get_json};
use async_trait::async_trait;
use contracts::domain::a003_team_member::TeamMember;

pub const RESOURCE: &str = "team_data";
const PATH: &str = "/api/team_data";
const USERS_PATH: &str = "/api/users";

pub async fn fetch_team(base: &str) -> Result<Vec<TeamMember>, ApiError> {
    get_json(&api_url(base, PATH)).await
}

/// Mutations on team members; the bulk delete only needs this seam.
#[async_trait(?Send)]
pub trait TeamMemberApi {
    async fn delete_member(&self, id: u32) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpTeamMemberApi {
    base: String,
}

impl HttpTeamMemberApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl TeamMemberApi for HttpTeamMemberApi {
    async fn delete_member(&self, id: u32) -> Result<(), ApiError> {
        delete(&api_url(&self.base, &format!("{}/{}", USERS_PATH, id))).await
    }
}
