pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod models;
pub mod pages;
pub mod text;

// Re-export for convenience
pub use app::App;
pub use config::ClientConfig;
