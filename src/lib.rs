pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod loader;
pub mod predictions;
pub mod teams;
pub mod tui;
pub mod types;
pub mod week;
