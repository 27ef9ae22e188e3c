pub mod api;
pub mod selection;
pub mod ui;
