//! Router-level tests for the payment link HTTP API.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use paylink_hex::inbound::HttpServer;
use paylink_hex::PaymentLinkService;
use paylink_types::{
    NewPaymentLink, PaymentLink, PaymentLinkPatch, PaymentLinkRepository, RepoError, WriteOutcome,
};

/// Minimal in-memory repository backing the router under test.
struct InMemoryRepo {
    links: Mutex<HashMap<String, PaymentLink>>,
}

impl InMemoryRepo {
    fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PaymentLinkRepository for InMemoryRepo {
    async fn save(&self, link: NewPaymentLink) -> Result<PaymentLink, RepoError> {
        let now = Utc::now();
        let id = link
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let missing = |column: &str| {
            RepoError::Database(format!("NOT NULL constraint failed: payment_links.{column}"))
        };

        let stored = PaymentLink {
            id: id.clone(),
            name: link.name.ok_or_else(|| missing("name"))?,
            sku: link.sku.ok_or_else(|| missing("sku"))?,
            amount: link.amount.ok_or_else(|| missing("amount"))?,
            currency: link.currency.ok_or_else(|| missing("currency"))?,
            status: link.status.ok_or_else(|| missing("status"))?,
            created_at: now,
            updated_at: now,
        };

        self.links.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_one(&self, id: &str) -> Result<Option<PaymentLink>, RepoError> {
        Ok(self.links.lock().unwrap().get(id).cloned())
    }

    async fn update(&self, id: &str, patch: PaymentLinkPatch) -> Result<WriteOutcome, RepoError> {
        let mut links = self.links.lock().unwrap();
        match links.get_mut(id) {
            Some(link) => {
                if let Some(name) = patch.name {
                    link.name = name;
                }
                if let Some(sku) = patch.sku {
                    link.sku = sku;
                }
                if let Some(amount) = patch.amount {
                    link.amount = amount;
                }
                if let Some(currency) = patch.currency {
                    link.currency = currency;
                }
                if let Some(status) = patch.status {
                    link.status = status;
                }
                link.updated_at = Utc::now();
                Ok(WriteOutcome::new(1))
            }
            None => Ok(WriteOutcome::new(0)),
        }
    }

    async fn delete(&self, id: &str) -> Result<WriteOutcome, RepoError> {
        let removed = self.links.lock().unwrap().remove(id).is_some();
        Ok(WriteOutcome::new(if removed { 1 } else { 0 }))
    }
}

fn router() -> axum::Router {
    HttpServer::new(PaymentLinkService::new(InMemoryRepo::new())).router()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_then_get() {
    let app = router();

    let create = json_request(
        "POST",
        "/api/payment-links",
        serde_json::json!({
            "id": "1",
            "name": "Test Payment",
            "sku": "TEST123",
            "amount": 100.0,
            "currency": "USD",
            "status": "active"
        }),
    );

    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["id"], "1");
    assert_eq!(created["name"], "Test Payment");

    let response = app
        .oneshot(
            Request::get("/api/payment-links/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["sku"], "TEST123");
    assert_eq!(fetched["amount"], 100.0);
}

#[tokio::test]
async fn test_get_missing_is_404() {
    let response = router()
        .oneshot(
            Request::get("/api/payment-links/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_updates_and_returns_current_record() {
    let app = router();

    let create = json_request(
        "POST",
        "/api/payment-links",
        serde_json::json!({
            "id": "1",
            "name": "Test Payment",
            "sku": "TEST123",
            "amount": 100.0,
            "currency": "USD",
            "status": "active"
        }),
    );
    app.clone().oneshot(create).await.unwrap();

    let patch = json_request(
        "PATCH",
        "/api/payment-links/1",
        serde_json::json!({ "name": "Updated Payment", "amount": 150.0 }),
    );
    let response = app.oneshot(patch).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Updated Payment");
    assert_eq!(updated["amount"], 150.0);
    assert_eq!(updated["sku"], "TEST123");
}

#[tokio::test]
async fn test_patch_missing_is_404() {
    let patch = json_request(
        "PATCH",
        "/api/payment-links/1",
        serde_json::json!({ "name": "Nonexistent Payment" }),
    );

    let response = router().oneshot(patch).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let app = router();

    let create = json_request(
        "POST",
        "/api/payment-links",
        serde_json::json!({
            "id": "1",
            "name": "Test Payment",
            "sku": "TEST123",
            "amount": 100.0,
            "currency": "USD",
            "status": "active"
        }),
    );
    app.clone().oneshot(create).await.unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::delete("/api/payment-links/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::delete("/api/payment-links/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
