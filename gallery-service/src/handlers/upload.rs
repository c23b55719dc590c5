use crate::dtos::UploadResponse;
use crate::models::Region;
use crate::services::metrics::record_upload;
use crate::startup::AppState;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use service_core::error::AppError;

pub const IMAGE_FIELD: &str = "image";
pub const REGION_FIELD: &str = "region";

pub const NOT_AN_IMAGE_MESSAGE: &str = "Not an image! Please upload only images.";
pub const MISSING_IMAGE_MESSAGE: &str =
    "File upload failed. Please ensure you are uploading an image.";

struct IncomingImage {
    file_name: String,
    content_type: Option<String>,
    data: Bytes,
}

impl IncomingImage {
    /// A file input left empty still submits a part, with no name and no bytes.
    fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.data.is_empty()
    }

    fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::bad_request(format!("Invalid upload: {}", e.body_text())))?;

    let mut region_value: Option<String> = None;
    let mut image: Option<IncomingImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(REGION_FIELD) => {
                region_value = Some(field.text().await.map_err(multipart_error)?);
            }
            Some(IMAGE_FIELD) => {
                if image.is_some() {
                    record_upload("rejected");
                    return Err(AppError::bad_request(format!(
                        "Unexpected field: {}",
                        IMAGE_FIELD
                    )));
                }
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_owned);
                let data = field.bytes().await.map_err(multipart_error)?;
                image = Some(IncomingImage {
                    file_name,
                    content_type,
                    data,
                });
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown upload field");
            }
        }
    }

    let image = match image {
        Some(image) if !image.is_empty() => image,
        _ => {
            record_upload("rejected");
            return Err(AppError::bad_request(MISSING_IMAGE_MESSAGE));
        }
    };

    if !image.is_image() {
        record_upload("rejected");
        tracing::info!(
            file_name = %image.file_name,
            content_type = ?image.content_type,
            "Rejected non-image upload"
        );
        return Err(AppError::bad_request(NOT_AN_IMAGE_MESSAGE));
    }

    let region = Region::from_form(region_value.as_deref()).inspect_err(|_| {
        record_upload("rejected");
    })?;

    let stored = state
        .store
        .store(&region, &image.file_name, &image.data)
        .await?;

    record_upload("stored");
    tracing::info!(
        region = %region,
        file = %stored,
        size = image.data.len(),
        "Image upload completed"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse::stored(stored.to_string())),
    ))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::bad_request(format!("Invalid upload: {}", err.body_text()))
    }
}
