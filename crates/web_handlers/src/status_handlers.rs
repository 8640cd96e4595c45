use actix_web::{HttpResponse, web};
use document_store::StorageGateway;
use submission_types::{DiagnosticReport, HealthStatus, RootMessage};

/// Liveness message for the root path
pub async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(RootMessage {
        message: "Caffebar Hölderlin Backend läuft".to_string(),
    })
}

/// Health check endpoint, independent of storage availability
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::ok())
}

/// Diagnostic snapshot of the backend and its storage connection.
/// Storage failures are rendered into the report; the endpoint always answers 200.
pub async fn database_diagnostics(gateway: web::Data<StorageGateway>) -> HttpResponse {
    let settings = gateway.settings();
    let mut report = DiagnosticReport::new(settings.url_is_set(), settings.name_is_set());

    if gateway.is_initialized() {
        match gateway.list_collection_names().await {
            Ok(collections) => report.connected(collections),
            Err(e) => {
                log::warn!("⚠️ Listing collections failed: {}", e);
                report.connected_with_error(&e.to_string());
            }
        }
    }

    HttpResponse::Ok().json(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use document_store::{DatabaseSettings, StorageGateway};
    use serde_json::Value;

    use crate::test_support::*;

    #[actix_web::test]
    async fn test_root_reports_liveness() {
        let app = test::init_service(test_app(StorageGateway::uninitialized(
            DatabaseSettings::default(),
        )))
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Caffebar Hölderlin Backend läuft");
    }

    #[actix_web::test]
    async fn test_health_is_ok_without_storage() {
        let app = test::init_service(test_app(StorageGateway::uninitialized(
            DatabaseSettings::default(),
        )))
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn test_diagnostics_without_storage() {
        let app = test::init_service(test_app(StorageGateway::uninitialized(
            DatabaseSettings::default(),
        )))
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["backend"], "✅ Running");
        assert_eq!(body["database"], "⚠️  Available but not initialized");
        assert_eq!(body["connection_status"], "Not Connected");
        assert_eq!(body["database_url"], "❌ Not Set");
        assert_eq!(body["database_name"], "❌ Not Set");
        assert_eq!(body["collections"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_diagnostics_with_malformed_connection_string() {
        let settings = DatabaseSettings::new(
            Some("postgres://localhost/hoelderlin".to_string()),
            Some("hoelderlin".to_string()),
        );
        let gateway = StorageGateway::connect(settings).await;
        let app = test::init_service(test_app(gateway)).await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "⚠️  Available but not initialized");
        assert_eq!(body["connection_status"], "Not Connected");
        assert_eq!(body["database_url"], "✅ Set");
        assert_eq!(body["database_name"], "✅ Set");
        assert_eq!(body["collections"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_diagnostics_lists_first_ten_collections() {
        let names: Vec<String> = (0..12).map(|i| format!("c{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let store = Arc::new(MemoryStore::new(&refs));
        let app = test::init_service(test_app(gateway_with(store))).await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["database"], "✅ Connected & Working");
        assert_eq!(body["connection_status"], "Connected");
        assert_eq!(body["database_url"], "✅ Set");
        assert_eq!(body["database_name"], "✅ Set");
        assert_eq!(body["collections"].as_array().unwrap().len(), 10);
        assert_eq!(body["collections"][0], "c0");
    }

    #[actix_web::test]
    async fn test_diagnostics_reports_unreachable_storage() {
        let store = Arc::new(FailingStore(
            "Server selection timeout: No available servers. Topology: Unknown",
        ));
        let app = test::init_service(test_app(gateway_with(store))).await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let database = body["database"].as_str().unwrap();
        assert!(database.starts_with("⚠️  Connected but Error: Server selection timeout"));
        assert_eq!(body["connection_status"], "Connected");
        assert_eq!(body["collections"], serde_json::json!([]));
    }
}
