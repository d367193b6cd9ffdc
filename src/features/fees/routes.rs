use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::fees::handlers;
use crate::features::fees::services::FeeLedger;

/// Create routes for the fees feature
pub fn routes(ledger: Arc<dyn FeeLedger>) -> Router {
    Router::new()
        .route("/api/fees/balance", get(handlers::get_balance))
        .with_state(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fees::services::ledger::LedgerError;
    use crate::features::fees::services::InMemoryLedger;
    use crate::shared::test_helpers::with_caller;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    struct OfflineLedger;

    impl FeeLedger for OfflineLedger {
        fn debit(&self, _payer: &str, _amount: u64) -> Result<(), LedgerError> {
            Err(LedgerError::Unavailable("offline".to_string()))
        }

        fn balance(&self, _payer: &str) -> Result<u64, LedgerError> {
            Err(LedgerError::Unavailable("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_balance_reflects_debits() {
        let ledger = Arc::new(InMemoryLedger::new(1_000));
        ledger.debit("ST1TEST", 500).unwrap();
        let server = TestServer::new(with_caller(routes(ledger), "ST1TEST")).unwrap();

        let response = server.get("/api/fees/balance").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["payer"], "ST1TEST");
        assert_eq!(body["data"]["balance"], 500);
    }

    #[tokio::test]
    async fn test_unseen_payer_has_opening_balance() {
        let ledger = Arc::new(InMemoryLedger::new(1_000));
        let server = TestServer::new(with_caller(routes(ledger), "newcomer")).unwrap();

        let body: Value = server.get("/api/fees/balance").await.json();
        assert_eq!(body["data"]["balance"], 1_000);
    }

    #[tokio::test]
    async fn test_unavailable_ledger() {
        let ledger: Arc<dyn FeeLedger> = Arc::new(OfflineLedger);
        let server = TestServer::new(with_caller(routes(ledger), "ST1TEST")).unwrap();

        server
            .get("/api/fees/balance")
            .await
            .assert_status(StatusCode::BAD_GATEWAY);
    }
}
