pub mod config;
pub mod error;
pub mod gatekeeper;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
