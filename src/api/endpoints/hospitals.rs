//! Hospital directory listing.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::types::ApiContext;
use crate::models::HospitalListing;

#[derive(Debug, Default, Deserialize)]
pub struct HospitalQuery {
    pub city: Option<String>,
    pub department: Option<String>,
}

/// `GET /api/hospitals?city=&department=`
///
/// Never fails: an unknown city yields an empty listing.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<HospitalQuery>,
) -> Json<HospitalListing> {
    Json(
        ctx.directory
            .list(query.city.as_deref(), query.department.as_deref()),
    )
}
