//! HTTP server.
//!
//! This module provides:
//! - The axum router over a [`TextGateway`](crate::TextGateway) (`create_router`)
//! - Route handlers (`routes`) and their error mapping (`error`)
//! - Configuration types (`config`)
//! - `serve`, which runs the router until a shutdown signal arrives

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{Result, TextGateway};

pub use config::{Config, Environment, ServerConfig};
pub use error::{ApiError, ErrorBody, Operation};
pub use state::AppState;

/// Create the application router.
///
/// With `cors_permissive`, any origin may call the API with credentials,
/// any method and any header.
pub fn create_router(gateway: Arc<dyn TextGateway>, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        CorsLayer::very_permissive()
    } else {
        CorsLayer::new()
    };

    let api_routes = Router::new()
        .route("/analyze", post(routes::analyze_text))
        .route("/optimize", post(routes::optimize_content))
        .route("/models", get(routes::list_models));

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api/v1", api_routes)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState::new(gateway))
}

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after the signal.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ContentOptimizationRequest, ContentOptimizationResponse, Gateway, GatewayError,
        HealthResponse, ModelsResponse, TextAnalysisRequest, TextAnalysisResponse,
    };
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    /// Gateway whose operations always fail internally.
    struct BrokenGateway;

    #[async_trait]
    impl TextGateway for BrokenGateway {
        fn health(&self) -> HealthResponse {
            HealthResponse {
                status: "healthy".into(),
                version: "test".into(),
                models_loaded: Vec::new(),
            }
        }

        async fn analyze_text(&self, _: TextAnalysisRequest) -> Result<TextAnalysisResponse> {
            Err(GatewayError::Internal("onnx session poisoned".into()))
        }

        async fn optimize_content(
            &self,
            _: ContentOptimizationRequest,
        ) -> Result<ContentOptimizationResponse> {
            Err(GatewayError::Internal("tokenizer missing".into()))
        }

        fn list_models(&self) -> ModelsResponse {
            ModelsResponse {
                models: Vec::new(),
                languages_supported: Vec::new(),
                analysis_types: Vec::new(),
            }
        }
    }

    fn app() -> Router {
        let gateway = Gateway::builder().build().unwrap();
        create_router(Arc::new(gateway), true)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["models_loaded"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn unknown_analysis_type_is_422() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/analyze",
                r#"{"text":"Bonjour","language":"fr","analysis_type":"translation"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(json["detail"].as_str().unwrap().contains("translation"));
    }

    #[tokio::test]
    async fn missing_field_is_422() {
        let response = app()
            .oneshot(post_json("/api/v1/optimize", r#"{"content":"Salut"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let response = app()
            .oneshot(post_json("/api/v1/analyze", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn internal_failure_returns_fixed_message() {
        let router = create_router(Arc::new(BrokenGateway), true);

        let response = router
            .clone()
            .oneshot(post_json(
                "/api/v1/analyze",
                r#"{"text":"x","language":"fr","analysis_type":"sentiment"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Erreur lors de l'analyse");

        let response = router
            .oneshot(post_json(
                "/api/v1/optimize",
                r#"{"content":"x","target_audience":"y","platform":"facebook","language":"fr"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Erreur lors de l'optimisation");
        assert!(!json.to_string().contains("tokenizer"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(Request::get("/api/v2/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_origin() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/v1/analyze")
            .header(header::ORIGIN, "https://app.example.mg")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://app.example.mg"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }
}
