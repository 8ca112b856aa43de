use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use tower::ServiceExt;

use homesense_server::app::build_router;
use homesense_server::configs::schema::SchemaManager;
use homesense_server::configs::settings::{Auth, Database};
use homesense_server::configs::storage::Storage;

pub struct MockApp {
    pub router: Router,
    pub storage: Arc<Storage>,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    url: String::from("sqlite::memory:"),
                    clean_start: true,
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let router = build_router(storage.clone(), Auth {
            session_ttl_hours: 24,
        });

        Self { router, storage }
    }

    /// Registers an account and returns the session cookie from the response.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> String {
        let request = Request::builder()
            .uri("/signup")
            .method(Method::POST)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(format!(
                "username={username}&email={email}&password={password}&location=Helsinki"
            )))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        session_cookie(&response).expect("signup should set a session cookie")
    }
}

pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .map(|value| value.to_str().unwrap().split(';').next().unwrap().to_string())
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&body).unwrap()
}
