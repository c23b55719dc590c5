use crate::models::Region;
use crate::services::metrics::record_listing;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

pub async fn list_images(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    let region = Region::from_path(region);
    let urls = state.store.list(&region).await?;

    record_listing();
    tracing::debug!(region = %region, count = urls.len(), "Listed region images");

    Ok(Json(urls))
}
