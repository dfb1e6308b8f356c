// handlers/mod.rs - HTTP handlers
//
// Public (no auth): /, /health
// Admin (authenticated + admin privilege): /watch/*

pub mod health;
pub mod watch;

pub use health::{health, root};
