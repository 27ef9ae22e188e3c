use serde::{Deserialize, Serialize};

/// Sales total for one country (`GET /api/geo_chart_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoDatum {
    /// ISO 3166-1 alpha-3 country code, matched against the map features
    pub id: String,
    pub value: f64,
}
