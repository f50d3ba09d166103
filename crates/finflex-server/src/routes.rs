//! Router
//!
//! API routes first; every other path is served from the built frontend,
//! falling back to `index.html` so client-side routes survive a reload.

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{health_check, list_plans};
use crate::state::AppState;

pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/plans", get(list_plans))
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use finflex_core::Catalog;
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body></body></html>";

    /// Throwaway frontend build with an index and one asset
    fn static_fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("finflex-server-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        std::fs::write(dir.join("app.css"), "body{}").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = static_fixture("health");
        let (status, body) = get_body(app(AppState::new(Catalog::finflex()), &dir), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_plans() {
        let dir = static_fixture("plans");
        let (status, body) = get_body(app(AppState::new(Catalog::finflex()), &dir), "/api/plans").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let tiers = json["tiers"].as_array().unwrap();
        assert_eq!(tiers.len(), 4);
        assert_eq!(tiers[1]["id"], "teams");
        assert_eq!(tiers[1]["price"]["yearly"], 75.0);
        assert_eq!(tiers[3]["price"]["monthly"], "Custom");
    }

    #[tokio::test]
    async fn test_serves_assets_and_spa_fallback() {
        let dir = static_fixture("spa");
        let state = AppState::new(Catalog::finflex());

        let (status, body) = get_body(app(state.clone(), &dir), "/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{}");

        for route in ["/", "/signin", "/plans"] {
            let (status, body) = get_body(app(state.clone(), &dir), route).await;
            assert_eq!(status, StatusCode::OK, "{route}");
            assert_eq!(body, INDEX, "{route}");
        }
    }
}
