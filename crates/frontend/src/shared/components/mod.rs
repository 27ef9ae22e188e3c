pub mod bar_chart;
pub mod line_chart;
pub mod page_header;
pub mod stat_card;
pub mod status;
pub mod table_checkbox;
pub mod year_selector;
