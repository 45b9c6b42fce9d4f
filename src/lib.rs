pub mod config;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod utils;
pub mod validation;
