//! Submission fee ledger.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/fees/balance` | Caller | Balance of the calling payer |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{FeeLedger, InMemoryLedger};
