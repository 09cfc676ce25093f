//! Static reference lists (Malaysian states and school subjects).
//!
//! Both lists are immutable, sentinel-first, and returned verbatim; the
//! search filters consume the same constants.

pub mod dtos;
pub mod handlers;
pub mod routes;
