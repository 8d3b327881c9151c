use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::app_data::AppData;
use crate::types::dto::common::HealthResponse;

/// Liveness probe, open to unauthenticated callers
pub struct HealthApi {
    app_data: Arc<AppData>,
}

impl HealthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[derive(Tags)]
enum HealthTags {
    Health,
}

#[OpenApi(tag = "HealthTags::Health")]
impl HealthApi {
    /// Service status and database reachability
    #[oai(path = "/health", method = "get")]
    async fn health(&self) -> Json<HealthResponse> {
        let database = match self.app_data.db.ping().await {
            Ok(()) => "up",
            Err(e) => {
                tracing::warn!("Health check could not reach the database: {}", e);
                "down"
            }
        };

        Json(HealthResponse {
            status: "ok".to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_app_data;

    #[tokio::test]
    async fn test_health_reports_database_up() {
        let api = HealthApi::new(setup_test_app_data().await);

        let response = api.health().await;

        assert_eq!(response.status, "ok");
        assert_eq!(response.database, "up");
    }
}
