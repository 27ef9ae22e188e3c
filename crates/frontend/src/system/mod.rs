pub mod pages;
pub mod users;
