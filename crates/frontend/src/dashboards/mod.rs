pub mod d400_dashboard;
pub mod d401_traffic_by_month;
pub mod d402_sales_by_month;
pub mod d403_sales_by_category;
pub mod d404_sales_by_country;

pub use d400_dashboard::ui::DashboardPage;
pub use d401_traffic_by_month::ui::TrafficByMonthPage;
pub use d402_sales_by_month::ui::SalesByMonthPage;
pub use d403_sales_by_category::ui::SalesByCategoryPage;
pub use d404_sales_by_country::ui::SalesByCountryPage;
