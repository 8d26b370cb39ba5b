pub mod billing;
pub mod models;
pub mod utils;
