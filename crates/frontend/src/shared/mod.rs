pub mod api_error;
pub mod api_utils;
pub mod chart_layout;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod number_format;
pub mod remote;
pub mod reporter;
