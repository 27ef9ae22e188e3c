use crate::shared::serde_helpers::string_or_number;
use serde::{Deserialize, Serialize};

/// One sale joined with its product and client (`GET /api/sales_data`).
///
/// The server also sends client contact fields; they are not used by any view
/// and are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub sale_id: u64,
    /// ISO date, "YYYY-MM-DD"
    pub sale_date: String,
    pub product_brand: String,
    pub product_model: String,
    pub product_category: String,
    pub sale_quantity: u32,
    pub final_price: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub register_id: String,
    pub client_name: String,
    pub client_city: String,
    pub client_country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_client_fields() {
        let json = r#"{
            "saleId": 17,
            "saleDate": "2024-11-05",
            "productBrand": "Lenovo",
            "productModel": "ThinkPad X1",
            "productCategory": "Laptops",
            "productPrice": 1499.0,
            "saleQuantity": 2,
            "finalPrice": 2998.0,
            "registerId": "R-0042",
            "clientName": "Marco Rossi",
            "clientAge": 41,
            "clientCity": "Milan",
            "clientCountry": "Italy"
        }"#;
        let sale: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(sale.sale_id, 17);
        assert_eq!(sale.final_price, 2998.0);
        assert_eq!(sale.register_id, "R-0042");
        assert_eq!(sale.client_country, "Italy");
    }
}
