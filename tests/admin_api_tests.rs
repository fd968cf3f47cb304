//! Admin API tests
//!
//! Campaign creation and dashboard reads behind the bearer-token guard.

use std::sync::{Arc, Once, OnceLock};

use actix_web::http::StatusCode;
use actix_web::middleware::from_fn;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use tempfile::TempDir;

use phishdrill::api::services::admin::admin_routes;
use phishdrill::config::init_config;
use phishdrill::middleware::AuthMiddleware;
use phishdrill::services::token::TrackingToken;
use phishdrill::storage::SeaOrmStorage;

// =============================================================================
// Test Setup
// =============================================================================

const ADMIN_TOKEN: &str = "test-admin-token";

static INIT: Once = Once::new();
static TEST_DIR: OnceLock<TempDir> = OnceLock::new();
static STORAGE_INIT: tokio::sync::OnceCell<()> = tokio::sync::OnceCell::const_new();
static STORAGE: OnceLock<Arc<SeaOrmStorage>> = OnceLock::new();

fn init_static_config() {
    INIT.call_once(|| {
        // SAFETY: first config access happens after this, inside call_once
        unsafe {
            std::env::set_var("ADMIN_TOKEN", ADMIN_TOKEN);
            std::env::set_var("PUBLIC_BASE_URL", "https://drill.example");
        }
        init_config();
    });
}

async fn init_test_env() {
    init_static_config();

    STORAGE_INIT
        .get_or_init(|| async {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let db_path = temp_dir.path().join("admin_test.db");
            let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

            let storage = Arc::new(
                SeaOrmStorage::new(&db_url, "sqlite")
                    .await
                    .expect("Failed to create storage"),
            );
            let _ = STORAGE.set(storage);
            let _ = TEST_DIR.set(temp_dir);
        })
        .await;
}

fn get_storage() -> Arc<SeaOrmStorage> {
    STORAGE.get().expect("Storage not initialized").clone()
}

macro_rules! admin_app {
    () => {{
        let storage = get_storage();

        test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .service(admin_routes("/admin").wrap(from_fn(AuthMiddleware::admin_auth))),
        )
        .await
    }};
}

fn authed(req: TestRequest) -> TestRequest {
    req.insert_header(("Authorization", format!("Bearer {}", ADMIN_TOKEN)))
}

fn campaign_payload(admin_id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "admin_id": admin_id,
        "name": name,
        "template": "password-reset",
        "participants": ["one@corp.test", "two@corp.test"],
        "scheduled_at": "2026-09-01T09:00:00Z",
    })
}

async fn create_campaign(admin_id: &str, name: &str) -> serde_json::Value {
    let app = admin_app!();
    let req = authed(TestRequest::post().uri("/admin/campaigns"))
        .set_json(campaign_payload(admin_id, name))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["data"].clone()
}

// =============================================================================
// Auth Tests
// =============================================================================

#[tokio::test]
async fn test_admin_requires_token() {
    init_test_env().await;

    let app = admin_app!();
    let req = TestRequest::get()
        .uri("/admin/templates")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_rejects_wrong_token() {
    init_test_env().await;

    let app = admin_app!();
    let req = TestRequest::get()
        .uri("/admin/templates")
        .insert_header(("Authorization", "Bearer wrong-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Campaign Tests
// =============================================================================

#[tokio::test]
async fn test_create_campaign_sets_counters() {
    init_test_env().await;

    let created = create_campaign("admin1", "Counter Drill").await;

    assert_eq!(created["status"], "scheduled");
    assert_eq!(created["sent"], 2);
    assert_eq!(created["clicked"], 0);
    assert_eq!(created["submitted"], 0);
    assert_eq!(created["email_template"], "password-reset");
    assert_eq!(created["id"].as_str().unwrap().len(), 20);
}

#[tokio::test]
async fn test_create_campaign_rejects_unknown_template() {
    init_test_env().await;

    let app = admin_app!();
    let mut payload = campaign_payload("admin1", "Bad Template Drill");
    payload["template"] = serde_json::json!("watering-hole");

    let req = authed(TestRequest::post().uri("/admin/campaigns"))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_campaign_rejects_bad_schedule() {
    init_test_env().await;

    let app = admin_app!();
    let mut payload = campaign_payload("admin1", "Bad Date Drill");
    payload["scheduled_at"] = serde_json::json!("next tuesday");

    let req = authed(TestRequest::post().uri("/admin/campaigns"))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_campaign_scoped_to_tenant() {
    init_test_env().await;

    let created = create_campaign("admin-scope", "Scoped Drill").await;
    let id = created["id"].as_str().unwrap();

    let app = admin_app!();

    // Owner sees it
    let req = authed(TestRequest::get().uri(&format!(
        "/admin/campaigns/{}?admin_id=admin-scope",
        id
    )))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Another tenant gets 404, not someone else's data
    let req = authed(TestRequest::get().uri(&format!(
        "/admin/campaigns/{}?admin_id=admin-other",
        id
    )))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_campaigns_for_tenant() {
    init_test_env().await;

    create_campaign("admin-list", "List Drill A").await;
    create_campaign("admin-list", "List Drill B").await;

    let app = admin_app!();
    let req = authed(TestRequest::get().uri("/admin/campaigns?admin_id=admin-list")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let campaigns = body["data"].as_array().unwrap();
    assert_eq!(campaigns.len(), 2);
}

#[tokio::test]
async fn test_campaign_emails_carry_decodable_tracking_links() {
    init_test_env().await;

    let created = create_campaign("admin-links", "Link Drill").await;
    let id = created["id"].as_str().unwrap();

    let app = admin_app!();
    let req = authed(TestRequest::get().uri(&format!(
        "/admin/campaigns/{}/emails?admin_id=admin-links",
        id
    )))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let emails = body["data"].as_array().unwrap();
    assert_eq!(emails.len(), 2);

    for email in emails {
        let link = email["tracking_link"].as_str().unwrap();
        let prefix = "https://drill.example/api/interact?q=";
        assert!(link.starts_with(prefix), "unexpected link: {}", link);

        // The embedded token decodes back to this exact recipient
        let encoded = &link[prefix.len()..];
        let raw = urlencoding::decode(encoded).unwrap();
        let token = TrackingToken::decode(&raw).unwrap();
        assert_eq!(token.admin_id, "admin-links");
        assert_eq!(token.campaign_id, id);
        assert_eq!(token.email_id, email["id"].as_str().unwrap());

        // Rendered message embeds the same link
        assert!(email["body"].as_str().unwrap().contains(link));
        assert_eq!(email["delivery_status"], "sent");
    }
}

#[tokio::test]
async fn test_campaign_participants_listing() {
    init_test_env().await;

    let created = create_campaign("admin-plist", "Participant Drill").await;
    let id = created["id"].as_str().unwrap();

    let app = admin_app!();
    let req = authed(TestRequest::get().uri(&format!(
        "/admin/campaigns/{}/participants?admin_id=admin-plist",
        id
    )))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Participant Drill - Participants");
    let emails = body["data"]["emails"].as_array().unwrap();
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0], "one@corp.test");
    assert_eq!(emails[1], "two@corp.test");

    // Another tenant cannot read it
    let req = authed(TestRequest::get().uri(&format!(
        "/admin/campaigns/{}/participants?admin_id=admin-other",
        id
    )))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_campaign_interactions_listing() {
    init_test_env().await;

    let created = create_campaign("admin-logs", "Log Drill").await;
    let id = created["id"].as_str().unwrap().to_string();

    // Record one click through the storage layer
    let storage = get_storage();
    let emails = storage.list_emails("admin-logs", &id).await.unwrap();
    storage
        .record_interaction(
            "admin-logs",
            &id,
            &emails[0].id,
            phishdrill::storage::InteractionKind::LinkClick,
        )
        .await
        .unwrap();

    let app = admin_app!();
    let req = authed(TestRequest::get().uri(&format!(
        "/admin/campaigns/{}/interactions?admin_id=admin-logs",
        id
    )))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let logs = body["data"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["interaction_type"], "link click");
    assert_eq!(logs[0]["email_id"], emails[0].id);
}

#[tokio::test]
async fn test_templates_listing() {
    init_test_env().await;

    let app = admin_app!();
    let req = authed(TestRequest::get().uri("/admin/templates")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let templates = body["data"].as_array().unwrap();
    assert_eq!(templates.len(), 4);

    let ids: Vec<&str> = templates
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"password-reset"));
    assert!(ids.contains(&"prize-alert"));
    assert!(ids.contains(&"account-alert"));
    assert!(ids.contains(&"document-share"));
}
