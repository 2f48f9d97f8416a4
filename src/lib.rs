pub mod catalog;
pub mod config;
pub mod exchange;
pub mod models;
pub mod wallet;
