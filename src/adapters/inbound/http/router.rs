use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{create_brand, delete_brand, get_brand, health, list_brands, update_brand};
use crate::ports::services::BrandService;

/// Base path of the brand resource
pub const BRANDS_PATH: &str = "/api/v1/brands";

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub brand_service: Arc<dyn BrandService>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(create_brand_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Add state for dependency injection
        .with_state(state)
}

/// Create a router with just brand operations
pub fn create_brand_router() -> Router<AppState> {
    Router::new()
        .route(BRANDS_PATH, get(list_brands).post(create_brand))
        .route(
            &format!("{}/{{id}}", BRANDS_PATH),
            get(get_brand).put(update_brand).delete(delete_brand),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::persistence::InMemoryBrandRepository, services::BrandServiceImpl,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn create_test_app_state() -> AppState {
        let repository = Arc::new(InMemoryBrandRepository::new());

        AppState {
            brand_service: Arc::new(BrandServiceImpl::new(repository)),
        }
    }

    #[tokio::test]
    async fn test_health() {
        let server = TestServer::new(create_router(create_test_app_state())).unwrap();

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<serde_json::Value>(),
            serde_json::json!({ "status": "ok" })
        );
    }

    #[tokio::test]
    async fn test_brand_router() {
        let brand_router = create_brand_router().with_state(create_test_app_state());
        let server = TestServer::new(brand_router).unwrap();

        let response = server.get(BRANDS_PATH).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Vec<serde_json::Value>>().len(), 0);
    }

    #[tokio::test]
    async fn test_router_as_service() {
        use axum::{body::Body, http::Request};
        use tower::ServiceExt;

        let app = create_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri(BRANDS_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let server = TestServer::new(create_router(create_test_app_state())).unwrap();

        let response = server.get("/api/v1/widgets").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
