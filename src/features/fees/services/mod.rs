pub mod ledger;

pub use ledger::{FeeLedger, InMemoryLedger};
