//! API module - route construction and request handlers

pub mod handlers;
pub mod routes;
