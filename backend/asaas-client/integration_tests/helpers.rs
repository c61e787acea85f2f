//! Shared setup for the integration tests.

use asaas_client::AsaasClient;
use common::RedactedApiKey;

use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "$aact_test_key_123";
pub const API_PATH: &str = "/api/v3";

/// Start a mock server and a client pointed at its `/api/v3`.
pub async fn start() -> (MockServer, AsaasClient) {
    let server = MockServer::start().await;
    let client = AsaasClient::with_http_client(
        &format!("{}{API_PATH}", server.uri()),
        RedactedApiKey::new(TEST_API_KEY),
        reqwest::Client::new(),
    )
    .expect("mock server URI should be a valid base URL");
    (server, client)
}

/// Path under `/api/v3`.
pub fn api(path: &str) -> String {
    format!("{API_PATH}/{path}")
}

pub fn customer_json(id: &str, name: &str) -> Value {
    json!({
        "object": "customer",
        "id": id,
        "dateCreated": "2024-06-01",
        "name": name,
        "email": "maria@example.com",
        "cpfCnpj": "24971563792",
        "notificationDisabled": false,
        "deleted": false
    })
}

pub fn payment_json(id: &str, status: &str) -> Value {
    json!({
        "object": "payment",
        "id": id,
        "dateCreated": "2024-06-01",
        "customer": "cus_000005219613",
        "subscription": null,
        "value": 100.0,
        "netValue": 98.01,
        "billingType": "BOLETO",
        "status": status,
        "dueDate": "2024-07-10",
        "originalDueDate": "2024-07-10",
        "paymentDate": null,
        "description": null,
        "discount": null,
        "deleted": false
    })
}

pub fn subscription_json(id: &str) -> Value {
    json!({
        "object": "subscription",
        "id": id,
        "dateCreated": "2024-06-01",
        "customer": "cus_000005219613",
        "billingType": "PIX",
        "cycle": "MONTHLY",
        "value": 49.9,
        "nextDueDate": "2024-07-01",
        "endDate": null,
        "status": "ACTIVE",
        "deleted": false
    })
}

pub fn page_json(data: Vec<Value>) -> Value {
    let count = data.len();
    json!({
        "object": "list",
        "hasMore": false,
        "totalCount": count,
        "limit": 10,
        "offset": 0,
        "data": data
    })
}
