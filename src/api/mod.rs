//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into allocator calls and formats
//! responses. It performs no validation of the submitted URL.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
