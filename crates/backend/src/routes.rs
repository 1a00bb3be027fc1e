use axum::http::Method;
use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::request_log::request_logger;

/// URL prefix of the MSDS/COA documents
pub const DOCUMENTS_PREFIX: &str = "/pdfs";

/// Static routes of the catalog site.
///
/// - `/health` for liveness checks
/// - `/pdfs/*` from the documents directory
/// - everything else from the frontend bundle; unknown paths get
///   `index.html` so client-side routes survive a reload
pub fn configure_routes(dist_dir: &Path, documents_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]);

    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service(DOCUMENTS_PREFIX, ServeDir::new(documents_dir))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    /// Temporary site root with a bundle and one document; removed on drop.
    struct SiteDir(std::path::PathBuf);

    impl SiteDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("catalog-host-{}-{}", name, std::process::id()));
            std::fs::create_dir_all(dir.join("dist")).unwrap();
            std::fs::create_dir_all(dir.join("pdfs/coa")).unwrap();
            std::fs::write(dir.join("dist/index.html"), "<html>catalog</html>").unwrap();
            std::fs::write(dir.join("pdfs/coa/LC-1001.pdf"), "%PDF-1.4").unwrap();
            Self(dir)
        }

        fn app(&self) -> Router {
            configure_routes(&self.0.join("dist"), &self.0.join("pdfs"))
        }
    }

    impl Drop for SiteDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_health() {
        let site = SiteDir::new("health");
        let app = site.app();
        let (status, body) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let site = SiteDir::new("spa");
        let app = site.app();
        let (status, body) = get_body(app, "/chemicals/LC-1001").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("catalog"));
    }

    #[tokio::test]
    async fn test_documents_are_served_under_prefix() {
        let site = SiteDir::new("docs");
        let app = site.app();
        let (status, body) = get_body(app.clone(), "/pdfs/coa/LC-1001.pdf").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "%PDF-1.4");

        let (status, _) = get_body(app, "/pdfs/coa/missing.pdf").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_site_dir_is_removed_after_use() {
        let path = {
            let site = SiteDir::new("cleanup");
            let (status, _) = get_body(site.app(), "/health").await;
            assert_eq!(status, StatusCode::OK);
            site.0.clone()
        };
        assert!(!path.exists());
    }
}
