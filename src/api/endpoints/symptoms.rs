//! Symptom analysis and recent checks.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::guidance;
use crate::history::PreviousCheck;
use crate::models::{Guidance, GuidanceRequest, HospitalListing};

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: Guidance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitals: Option<HospitalListing>,
}

#[derive(Debug, Serialize)]
pub struct PreviousResponse {
    pub checks: Vec<PreviousCheck>,
}

/// `POST /api/symptoms/analyze`
///
/// When the request names a city, the response carries hospitals there
/// for the first recommended specialty.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    body: Result<Json<GuidanceRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let result = guidance::analyze(ctx.llm.as_ref(), &request).await?;

    let city = request
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let hospitals = city.map(|city| ctx.directory.list(Some(city), result.primary_specialty()));

    // History is best-effort.
    match ctx.history() {
        Ok(mut history) => {
            history.record(request.free_text.trim(), city, result.clone());
        }
        Err(e) => tracing::warn!(error = %e, "Symptom check not recorded in history"),
    }

    Ok(Json(AnalyzeResponse { result, hospitals }))
}

/// `GET /api/symptoms/previous`, newest first.
pub async fn previous(State(ctx): State<ApiContext>) -> Result<Json<PreviousResponse>, ApiError> {
    let checks = ctx.history()?.recent();
    Ok(Json(PreviousResponse { checks }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::directory::HospitalDirectory;
    use crate::guidance::MockLlmClient;

    #[tokio::test]
    async fn analyze_survives_unusable_history() {
        let ctx = ApiContext::new(
            Arc::new(MockLlmClient::new(r#"{"severity_level": "low"}"#)),
            HospitalDirectory::bundled().unwrap(),
        );
        ctx.poison_history();

        let mut request = GuidanceRequest::new("mild sore throat");
        request.city = Some("Delhi".into());
        let Json(response) = analyze(State(ctx.clone()), Ok(Json(request)))
            .await
            .unwrap();

        assert_eq!(response.result.severity_level.as_str(), "low");
        assert_eq!(response.hospitals.unwrap().applied_filters.city.as_deref(), Some("Delhi"));
        assert!(matches!(
            previous(State(ctx)).await,
            Err(ApiError::Internal(_))
        ));
    }
}
