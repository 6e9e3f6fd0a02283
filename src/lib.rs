pub mod api;
pub mod config;
pub mod error;
pub mod funnel;
pub mod provider;
pub mod record;
// cmd and reports belong to the binary (main.rs).
