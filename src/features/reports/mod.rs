//! Crisis report registry.
//!
//! Reports are addressed by a sequential id and by their content hash. Only
//! the original reporter may amend a report, and each report keeps a record
//! of its latest amendment.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports` | Caller | Submit a report (charges the submission fee) |
//! | GET | `/api/reports` | Caller | List reports |
//! | GET | `/api/reports/summary` | Caller | Registry counters |
//! | GET | `/api/reports/by-hash/{hash}` | Caller | Resolve a content hash |
//! | GET | `/api/reports/{id}` | Caller | Get a report |
//! | PUT | `/api/reports/{id}` | Reporter | Amend a report |
//! | GET | `/api/reports/{id}/update` | Caller | Latest amendment |

pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
