//! Service discovery (`/`) and liveness (`/health`) endpoints.

pub mod dtos;
pub mod handlers;
pub mod routes;
