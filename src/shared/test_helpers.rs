use std::sync::Arc;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use axum_test::TestServer;

use crate::core::middleware::identity_middleware;
use crate::features::auth::CallerIdentity;
use crate::shared::constants::DEFAULT_IDENTITY_HEADER;

/// Wrap a router so every request arrives as `caller`
pub fn with_caller(router: Router, caller: &str) -> Router {
    let identity = CallerIdentity::new(caller);
    router.layer(middleware::from_fn(move |mut request: Request, next: Next| {
        let identity = identity.clone();
        async move {
            request.extensions_mut().insert(identity);
            let response: Response = next.run(request).await;
            response
        }
    }))
}

/// Test server guarded by the real identity middleware on the default header
pub fn test_server_with_identity(router: Router) -> TestServer {
    let header = Arc::new(HeaderName::from_static(DEFAULT_IDENTITY_HEADER));
    let router = router.route_layer(middleware::from_fn_with_state(header, identity_middleware));
    TestServer::new(router).unwrap()
}

/// Header pair identifying `caller` on the default identity header
pub fn caller_header(caller: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
        HeaderValue::from_str(caller).unwrap(),
    )
}
