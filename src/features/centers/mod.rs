//! Tuition center catalog feature.
//!
//! Holds the in-memory catalog and the read-mostly API over it: listing,
//! keyword/subject/state/city/price filtering with sorting, single-record
//! lookup and single-record creation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/centers` | List all centers |
//! | GET | `/api/search` | Filter and sort centers |
//! | GET | `/api/center/{id}` | Single center lookup |
//! | POST | `/api/centers` | Create a center |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CatalogService;
