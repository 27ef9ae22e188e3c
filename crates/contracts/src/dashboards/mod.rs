pub mod d400_dashboard_summary;
pub mod d401_traffic_by_month;
pub mod d402_sales_by_month;
pub mod d403_sales_by_category;
pub mod d404_sales_by_country;
