pub mod app;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod console;
pub mod context;
pub mod error;
pub mod keystore;
pub mod render;
pub mod service;
pub mod tracing;
pub mod types;
