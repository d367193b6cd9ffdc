use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// Balance ledger charged for registry submissions
pub trait FeeLedger: Send + Sync {
    /// Reduce `payer`'s balance by `amount`; on error the balance is untouched
    fn debit(&self, payer: &str, amount: u64) -> Result<(), LedgerError>;

    fn balance(&self, payer: &str) -> Result<u64, LedgerError>;
}

/// Process-local ledger
///
/// Payers it has never seen start with `opening_balance`.
#[derive(Debug)]
pub struct InMemoryLedger {
    opening_balance: u64,
    balances: Mutex<HashMap<String, u64>>,
}

impl InMemoryLedger {
    pub fn new(opening_balance: u64) -> Self {
        Self {
            opening_balance,
            balances: Mutex::new(HashMap::new()),
        }
    }
}

impl FeeLedger for InMemoryLedger {
    fn debit(&self, payer: &str, amount: u64) -> Result<(), LedgerError> {
        let mut balances = self
            .balances
            .lock()
            .map_err(|e| LedgerError::Unavailable(e.to_string()))?;
        let balance = balances
            .entry(payer.to_string())
            .or_insert(self.opening_balance);

        if *balance < amount {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available: *balance,
            });
        }

        *balance -= amount;
        tracing::debug!("Debited {} from {} (remaining: {})", amount, payer, balance);
        Ok(())
    }

    fn balance(&self, payer: &str) -> Result<u64, LedgerError> {
        let balances = self
            .balances
            .lock()
            .map_err(|e| LedgerError::Unavailable(e.to_string()))?;
        Ok(balances
            .get(payer)
            .copied()
            .unwrap_or(self.opening_balance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payer_gets_opening_balance() {
        let ledger = InMemoryLedger::new(1000);
        assert_eq!(ledger.balance("alice").unwrap(), 1000);
    }

    #[test]
    fn test_debit_reduces_balance() {
        let ledger = InMemoryLedger::new(1000);
        ledger.debit("alice", 500).unwrap();
        ledger.debit("alice", 500).unwrap();

        assert_eq!(ledger.balance("alice").unwrap(), 0);
        assert_eq!(ledger.balance("bob").unwrap(), 1000);
    }

    #[test]
    fn test_insufficient_funds_leaves_balance() {
        let ledger = InMemoryLedger::new(1000);
        ledger.debit("alice", 600).unwrap();

        let err = ledger.debit("alice", 500).unwrap_err();

        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                required: 500,
                available: 400
            }
        );
        assert_eq!(ledger.balance("alice").unwrap(), 400);
    }
}
