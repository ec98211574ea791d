//! Route table and handlers for the admin API

use crate::admin::{AdminError, AdminState};
use crate::application::migration::{MigrationReport, MigrationStatus, OrderNumberMigration};
use crate::application::order_store::OrderStore;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::instrument;

/// Build the admin router over the given state
pub fn router<S>(state: AdminState<S>) -> Router
where
    S: OrderStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::<S>))
        .route("/admin/migration/status", get(migration_status::<S>))
        .route("/admin/migration/run", post(run_migration::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[instrument(skip_all)]
async fn health<S>(State(state): State<AdminState<S>>) -> Result<&'static str, AdminError>
where
    S: OrderStore + Clone + Send + Sync + 'static,
{
    state.store().health_check().await?;
    Ok("ok")
}

#[instrument(skip_all)]
async fn migration_status<S>(
    State(state): State<AdminState<S>>,
) -> Result<Json<MigrationStatus>, AdminError>
where
    S: OrderStore + Clone + Send + Sync + 'static,
{
    let migration = OrderNumberMigration::new(state.store().clone(), state.write_delay());
    let status = migration.status().await?;
    Ok(Json(status))
}

#[instrument(skip_all)]
async fn run_migration<S>(State(state): State<AdminState<S>>) -> Json<MigrationReport>
where
    S: OrderStore + Clone + Send + Sync + 'static,
{
    // Per-record failures are part of the report body, not an HTTP error;
    // the console shows them verbatim.
    let mut migration = OrderNumberMigration::new(state.store().clone(), state.write_delay());
    Json(migration.run().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderId, OrderSummary};
    use crate::infrastructure::InMemoryOrderStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(store: InMemoryOrderStore) -> Router {
        router(AdminState::new(store, Duration::ZERO))
    }

    fn seeded_store() -> InMemoryOrderStore {
        InMemoryOrderStore::seeded(vec![
            OrderSummary {
                id: OrderId::new(1),
                order_number: None,
                created_at: Utc::now(),
            },
            OrderSummary {
                id: OrderId::new(2),
                order_number: Some("GN905EG1234567".to_string()),
                created_at: Utc::now(),
            },
        ])
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_ok() {
        let response = app(seeded_store())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_status_endpoint_returns_counts() {
        let response = app(seeded_store())
            .oneshot(
                Request::builder()
                    .uri("/admin/migration/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["migrated"], 1);
        assert_eq!(body["pending"], 1);
    }

    #[tokio::test]
    async fn test_status_endpoint_maps_store_failure_to_500() {
        let store = seeded_store();
        store.fail_counts();

        let response = app(store)
            .oneshot(
                Request::builder()
                    .uri("/admin/migration/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], "internal_error");
    }

    #[tokio::test]
    async fn test_run_endpoint_returns_report() {
        let store = seeded_store();

        let response = app(store.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/migration/run")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["migrated_count"], 1);
        assert_eq!(body["failures"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_run_endpoint_reports_failures_in_body() {
        // A failing record keeps the endpoint at 200; the failure list is
        // the console's to display.
        let store = seeded_store();
        store.fail_assign_for(OrderId::new(1));

        let response = app(store)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/migration/run")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["migrated_count"], 0);
        assert_eq!(body["failures"][0]["order_id"], 1);
    }
}
