pub mod catalog;
pub mod checklist;
pub mod location;
pub mod models;
pub mod proximity;
pub mod utils;
