pub mod app;
pub mod config;
pub mod plan;
pub mod platform;
pub mod storage;
pub mod ui;
pub mod utils;
