/// Resource-specific service implementations for the client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
