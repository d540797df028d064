//! Built-in pages

pub mod blank_page;
pub mod main_page;

pub use blank_page::{BlankPage, BlankPageFactory};
pub use main_page::{MainPage, MainPageFactory};
