use crate::shared::serde_helpers::string_or_number;
use serde::{Deserialize, Serialize};

/// Client row (`GET /api/client_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub register_id: String,
    pub name: String,
    pub age: u32,
    #[serde(deserialize_with = "string_or_number")]
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(deserialize_with = "string_or_number")]
    pub zip_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_identifiers() {
        let json = r#"{
            "registerId": 100234,
            "name": "Anna Weber",
            "age": 34,
            "phone": "+49 30 1234567",
            "email": "anna.weber@example.com",
            "address": "Hauptstrasse 5",
            "city": "Berlin",
            "country": "Germany",
            "zipCode": 10115
        }"#;
        let client: ClientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(client.register_id, "100234");
        assert_eq!(client.zip_code, "10115");
        assert_eq!(client.phone, "+49 30 1234567");
    }
}
