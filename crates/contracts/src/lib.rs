//! Wire contracts shared between the dashboard views and the analytics API.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
