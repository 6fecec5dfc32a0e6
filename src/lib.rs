pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod feedback;
pub mod generator;
pub mod logging;
pub mod scheduler;
pub mod surface;
pub mod ui;
pub mod utils;
