pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod permission;
pub mod router;
pub mod services;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod testing;
