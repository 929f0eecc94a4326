//! Black-box tests: the real HTTP transport against an in-process stub
//! server bound to an ephemeral port.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;

use stocklink_client::stock::models::{StockLevelUpdate, VariationParentStatus};
use stocklink_client::{ApiConfig, StockClient};
use stocklink_core::{StockItemId, StockLocationId};

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// One request as the stub server saw it.
#[derive(Debug, Clone)]
struct SeenRequest {
    path: String,
    authorization: Option<String>,
    content_type: Option<String>,
    body: String,
}

/// Stub server answering every request with a fixed status and payload.
struct StubServer {
    base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    async fn spawn(status: StatusCode, payload: &'static str) -> Self {
        init_logging();

        let seen: Arc<Mutex<Vec<SeenRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let record = seen.clone();

        let app = Router::new().fallback(move |req: Request| {
            let record = record.clone();
            async move {
                let (parts, body) = req.into_parts();
                let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
                let header = |name: &str| {
                    parts
                        .headers
                        .get(name)
                        .map(|v| v.to_str().unwrap().to_owned())
                };
                record.lock().unwrap().push(SeenRequest {
                    path: parts.uri.path().to_owned(),
                    authorization: header("authorization"),
                    content_type: header("content-type"),
                    body: String::from_utf8(bytes.to_vec()).unwrap(),
                });
                (status, payload)
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            seen,
            handle,
        }
    }

    fn client(&self) -> StockClient {
        StockClient::connect(&ApiConfig::new(self.base_url.as_str(), "test-token"))
            .expect("failed to build transport")
    }

    fn last_request(&self) -> SeenRequest {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

const ITEM: &str = "01890a5d-ac96-774b-bcce-b302099a8057";
const LOCATION: &str = "01890a5d-ac96-774b-bcce-b302099a8058";

#[tokio::test]
async fn sku_exists_end_to_end() -> anyhow::Result<()> {
    let server = StubServer::spawn(StatusCode::OK, "true").await;
    let stock = server.client();

    let exists = stock.sku_exists("ABC-123").await?;
    assert!(exists);

    let seen = server.last_request();
    assert_eq!(seen.path, "/api/Stock/SKUExists");
    assert_eq!(seen.authorization.as_deref(), Some("test-token"));
    assert_eq!(
        seen.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(seen.body, "SKU=ABC-123");
    Ok(())
}

#[tokio::test]
async fn non_json_payload_surfaces_as_a_decode_error() {
    let server = StubServer::spawn(StatusCode::OK, "maybe").await;
    let stock = server.client();

    let err = stock.sku_exists("ABC-123").await.unwrap_err();
    assert!(err.is_decode());
    assert!(!err.is_transport());
}

#[tokio::test]
async fn a_server_failure_surfaces_as_a_transport_error() {
    let server = StubServer::spawn(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let stock = server.client();

    let err = stock
        .check_variation_parent_sku_exists("SHIRT-P")
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn enum_results_decode_from_their_names() -> anyhow::Result<()> {
    let server = StubServer::spawn(StatusCode::OK, "\"AlreadyVariation\"").await;
    let stock = server.client();

    let status = stock.check_variation_parent_sku_exists("SHIRT-P").await?;
    assert_eq!(status, VariationParentStatus::AlreadyVariation);
    Ok(())
}

#[tokio::test]
async fn void_operations_succeed_on_transport_success() -> anyhow::Result<()> {
    let server = StubServer::spawn(StatusCode::OK, "").await;
    let stock = server.client();

    stock
        .update_stock_minimum_level(
            StockItemId::from_str(ITEM)?,
            StockLocationId::from_str(LOCATION)?,
            4,
        )
        .await?;

    let seen = server.last_request();
    assert_eq!(seen.path, "/api/Stock/UpdateStockMinimumLevel");
    assert_eq!(
        seen.body,
        format!("stockItemId={ITEM}&locationId={LOCATION}&minimumLevel=4")
    );
    Ok(())
}

#[tokio::test]
async fn structured_results_decode_from_wire_casing() -> anyhow::Result<()> {
    let payload: &'static str = r#"[{
        "StockItemId": "01890a5d-ac96-774b-bcce-b302099a8057",
        "SKU": "ABC-123",
        "Location": {
            "StockLocationId": "01890a5d-ac96-774b-bcce-b302099a8058",
            "LocationName": "Default"
        },
        "StockLevel": 7,
        "StockValue": 21.0,
        "MinimumLevel": 1,
        "InOrderBook": 0,
        "Due": 0,
        "Available": 7,
        "UnitCost": 3.0
    }]"#;
    let server = StubServer::spawn(StatusCode::OK, payload).await;
    let stock = server.client();

    let updates = [StockLevelUpdate {
        sku: "ABC-123".to_owned(),
        location_id: StockLocationId::from_str(LOCATION)?,
        level: 7,
    }];
    let levels = stock.set_stock_level(&updates, Some("cli import")).await?;

    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].sku, "ABC-123");
    assert_eq!(levels[0].stock_level, 7);

    let seen = server.last_request();
    let levels_json = serde_json::to_string(&updates)?;
    assert_eq!(
        seen.body,
        format!("stockLevels={levels_json}&changeSource=cli+import")
    );
    Ok(())
}
