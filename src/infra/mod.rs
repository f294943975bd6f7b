pub mod app;
pub mod config;
pub mod google_auth;
pub mod http_client;
pub mod setup;
pub mod sheets_client;
