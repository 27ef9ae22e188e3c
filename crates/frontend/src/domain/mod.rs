pub mod a001_client;
pub mod a002_sale;
pub mod a003_team_member;
