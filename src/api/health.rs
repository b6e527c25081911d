use chrono::Utc;
use poem_openapi::{payload::Json, Object, OpenApi, Tags};

/// Response model for the health endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Current server time (RFC 3339)
    pub timestamp: String,
}

/// API tags for health endpoints
#[derive(Tags)]
enum HealthTags {
    /// Health check endpoints
    Health,
}

/// Health check API
pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the API service
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
