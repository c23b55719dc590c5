//! HTTP access to the gallery service.

use crate::error::ClientError;
use crate::models::{ErrorBody, ImageFile, UploadResponse};
use async_trait::async_trait;
use reqwest::{multipart, Client, Response, Url};

#[async_trait]
pub trait GalleryApi: Send + Sync {
    /// `GET /images/:region`
    async fn list_images(&self, region: &str) -> Result<Vec<String>, ClientError>;

    /// `POST /upload`. A missing file is still submitted; the service decides.
    async fn upload(
        &self,
        region: &str,
        file: Option<&ImageFile>,
    ) -> Result<UploadResponse, ClientError>;
}

pub struct HttpGalleryApi {
    client: Client,
    base_url: Url,
}

impl HttpGalleryApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn status_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ClientError::Status { status, message }
}

#[async_trait]
impl GalleryApi for HttpGalleryApi {
    async fn list_images(&self, region: &str) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(&["images", region])?;

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Failed to send GET request to {}: {}", url, e);
            ClientError::from(e)
        })?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(response.json().await?)
    }

    async fn upload(
        &self,
        region: &str,
        file: Option<&ImageFile>,
    ) -> Result<UploadResponse, ClientError> {
        let url = self.endpoint(&["upload"])?;

        let mut form = multipart::Form::new().text("region", region.to_string());
        if let Some(file) = file {
            let part = multipart::Part::bytes(file.data.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)?;
            form = form.part("image", part);
        }

        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                ClientError::from(e)
            })?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(response.json().await?)
    }
}
