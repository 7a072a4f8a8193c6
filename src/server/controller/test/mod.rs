use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, service::token::TokenService, state::AppState};


/// Lowest work factor bcrypt accepts.
const TEST_COST: u32 = 4;

/// Router wired to a fresh in-memory database, plus a token for a seeded user.
struct TestApp {
    _test: TestContext,
    db: DatabaseConnection,
    tokens: TokenService,
    app: Router,
    token: String,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap().clone();
        let tokens = TokenService::new("test-secret", 1);

        let user = factory::create_user(&db).await.unwrap();
        let token = tokens.issue(user.id).unwrap();

        let app = router().with_state(AppState::new(db.clone(), tokens.clone(), TEST_COST));

        Self {
            _test: test,
            db,
            tokens,
            app,
            token,
        }
    }

    /// Sends a request with the seeded user's token.
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send_as(Some(&self.token), method, uri, body).await
    }

    async fn send_as(
        &self,
        token: Option<&str>,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}
