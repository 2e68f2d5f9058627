use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use models::{ContactRecord, WaitlistRecord};
use server::routes::{self, ServerState};
use service::file::{contact_store::ContactStore, waitlist_store::WaitlistStore};
use service::notify::{LogNotifier, Notifier};

const ADMIN_KEY: &str = "test-ops-key";

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

#[derive(Default)]
struct CountingNotifier {
    waitlist: AtomicUsize,
    contacts: AtomicUsize,
}

#[async_trait::async_trait]
impl Notifier for CountingNotifier {
    async fn notify_waitlist(&self, _record: &WaitlistRecord) {
        self.waitlist.fetch_add(1, Ordering::SeqCst);
    }

    async fn notify_contact(&self, _record: &ContactRecord) {
        self.contacts.fetch_add(1, Ordering::SeqCst);
    }
}

struct TestApp {
    base_url: String,
}

/// Spin up the router on an ephemeral port with per-run temp data files.
async fn start_server(notifier: Arc<dyn Notifier>) -> anyhow::Result<TestApp> {
    let temp_id = Uuid::new_v4();
    let data_dir = format!("target/test-data/{}", temp_id);
    let waitlist = WaitlistStore::new(format!("{data_dir}/waitlist.json")).await?;
    let contacts = ContactStore::new(format!("{data_dir}/contacts.json")).await?;

    let state = ServerState {
        waitlist,
        contacts,
        notifier,
        admin_api_key: Some(ADMIN_KEY.into()),
    };

    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(Arc::new(LogNotifier)).await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_waitlist_signup_normalizes_and_conflicts_on_repeat() -> anyhow::Result<()> {
    let app = start_server(Arc::new(LogNotifier)).await?;
    let c = client();

    // mixed-case signup stores the lowercased email
    let res = c
        .post(format!("{}/waitlist", app.base_url))
        .json(&json!({"email": "USER@Example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "user@example.com");
    assert_eq!(body["data"]["source"], "waitlist");

    // identical request now conflicts and the collection does not grow
    let res = c
        .post(format!("{}/waitlist", app.base_url))
        .json(&json!({"email": "USER@Example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Email already registered");
    assert_eq!(body["alreadyExists"], true);

    let res = c
        .get(format!("{}/waitlist", app.base_url))
        .header("X-API-Key", ADMIN_KEY)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["waitlist"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn e2e_waitlist_rejects_invalid_emails() -> anyhow::Result<()> {
    let app = start_server(Arc::new(LogNotifier)).await?;
    let c = client();

    for bad in ["not-an-email", "a@b", ""] {
        let res = c
            .post(format!("{}/waitlist", app.base_url))
            .json(&json!({"email": bad}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "{bad}");
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["error"], "Valid email is required");
    }

    // nothing was appended
    let res = c
        .get(format!("{}/waitlist", app.base_url))
        .header("X-API-Key", ADMIN_KEY)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["waitlist"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn e2e_contact_field_validation() -> anyhow::Result<()> {
    let app = start_server(Arc::new(LogNotifier)).await?;
    let c = client();

    // 1-character name
    let res = c
        .post(format!("{}/contact", app.base_url))
        .json(&json!({"name": "A", "email": "a@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Name is required (minimum 2 characters)");

    // demo request without a company
    let res = c
        .post(format!("{}/contact", app.base_url))
        .json(&json!({"name": "Alice", "email": "alice@example.com", "type": "demo"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Company name is required for demo requests");

    // bad email wins over everything else
    let res = c
        .post(format!("{}/contact", app.base_url))
        .json(&json!({"name": "Alice", "email": "nope"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Valid email is required");
    Ok(())
}

#[tokio::test]
async fn e2e_contact_success_message_differs_by_type() -> anyhow::Result<()> {
    let app = start_server(Arc::new(LogNotifier)).await?;
    let c = client();

    let res = c
        .post(format!("{}/contact", app.base_url))
        .json(&json!({
            "name": "Alice",
            "email": "Alice@Example.com",
            "company": "Acme",
            "type": "demo"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Demo request submitted successfully. We'll be in touch soon!");
    assert_eq!(body["data"]["type"], "demo");
    assert_eq!(body["data"]["email"], "alice@example.com");

    // type defaults to "contact" and optional fields default to null
    let res = c
        .post(format!("{}/contact", app.base_url))
        .json(&json!({"name": "Bob", "email": "bob@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Message sent successfully. We'll get back to you soon!");
    assert_eq!(body["data"]["type"], "contact");
    assert!(body["data"]["company"].is_null());
    assert!(body["data"]["message"].is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_list_endpoints_require_api_key() -> anyhow::Result<()> {
    let app = start_server(Arc::new(LogNotifier)).await?;
    let c = client();

    for path in ["waitlist", "contact"] {
        let res = c.get(format!("{}/{}", app.base_url, path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED, "{path} without key");

        let res = c
            .get(format!("{}/{}", app.base_url, path))
            .header("X-API-Key", "wrong-key")
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED, "{path} wrong key");
    }

    let res = c
        .get(format!("{}/contact", app.base_url))
        .header("X-API-Key", ADMIN_KEY)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["contacts"], json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_notifier_fires_once_per_successful_append() -> anyhow::Result<()> {
    let notifier = Arc::new(CountingNotifier::default());
    let app = start_server(notifier.clone()).await?;
    let c = client();

    // one success, one duplicate, one rejection: a single waitlist event
    for email in ["a@example.com", "a@example.com", "bad"] {
        let _ = c
            .post(format!("{}/waitlist", app.base_url))
            .json(&json!({"email": email}))
            .send()
            .await?;
    }
    assert_eq!(notifier.waitlist.load(Ordering::SeqCst), 1);

    for _ in 0..2 {
        let res = c
            .post(format!("{}/contact", app.base_url))
            .json(&json!({"name": "Alice", "email": "alice@example.com"}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }
    assert_eq!(notifier.contacts.load(Ordering::SeqCst), 2);
    Ok(())
}
