use crate::error::ClientError;
use crate::models::{GalleryView, UploadForm, UploadStatus};
use crate::services::gallery_api::GalleryApi;
use crate::tabs::RegionTabs;
use std::collections::HashMap;

/// Identifies one image fetch. Only the most recently issued ticket of a
/// region may update that region's gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    region: String,
    generation: u64,
}

impl FetchTicket {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct GalleryClient<A> {
    api: A,
    tabs: RegionTabs,
    views: HashMap<String, GalleryView>,
    latest: HashMap<String, u64>,
    next_generation: u64,
    form: UploadForm,
    status: UploadStatus,
}

impl<A: GalleryApi> GalleryClient<A> {
    /// The upload form defaults to the initially active region, or the first
    /// one when none is active.
    pub fn new(api: A, tabs: RegionTabs) -> Self {
        let default_region = tabs
            .active()
            .or_else(|| tabs.regions().first().map(String::as_str))
            .unwrap_or_default()
            .to_string();

        Self {
            api,
            tabs,
            views: HashMap::new(),
            latest: HashMap::new(),
            next_generation: 0,
            form: UploadForm::new(default_region),
            status: UploadStatus::Idle,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn tabs(&self) -> &RegionTabs {
        &self.tabs
    }

    pub fn view(&self, region: &str) -> &GalleryView {
        static IDLE: GalleryView = GalleryView::Idle;
        self.views.get(region).unwrap_or(&IDLE)
    }

    pub fn form(&self) -> &UploadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UploadForm {
        &mut self.form
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    /// Fetches the images of whichever region was active at construction.
    pub async fn start(&mut self) {
        if let Some(region) = self.tabs.active().map(str::to_owned) {
            self.refresh(&region).await;
        }
    }

    /// Makes `region` the only active region and fetches its images.
    pub async fn select_region(&mut self, region: &str) -> Result<(), ClientError> {
        self.tabs.select(region)?;
        self.refresh(region).await;
        Ok(())
    }

    /// Marks `region` as loading and issues a ticket superseding every
    /// earlier fetch of that region.
    pub fn begin_fetch(&mut self, region: &str) -> FetchTicket {
        self.next_generation += 1;
        let generation = self.next_generation;

        self.latest.insert(region.to_string(), generation);
        self.views.insert(region.to_string(), GalleryView::Loading);

        FetchTicket {
            region: region.to_string(),
            generation,
        }
    }

    /// Applies a fetch result unless a newer fetch of the same region was
    /// issued in the meantime. Returns whether the result was applied.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<String>, ClientError>,
    ) -> bool {
        if self.latest.get(&ticket.region) != Some(&ticket.generation) {
            tracing::debug!(
                region = %ticket.region,
                generation = ticket.generation,
                "Discarding stale image list"
            );
            return false;
        }

        let view = match result {
            Ok(urls) => GalleryView::from_urls(&ticket.region, urls),
            Err(e) => {
                tracing::error!(region = %ticket.region, error = %e, "Error fetching images");
                GalleryView::Failed
            }
        };
        self.views.insert(ticket.region, view);
        true
    }

    pub async fn refresh(&mut self, region: &str) {
        let ticket = self.begin_fetch(region);
        let result = self.api.list_images(ticket.region()).await;
        self.complete_fetch(ticket, result);
    }

    /// Submits the upload form. On success the form is reset and the
    /// submitted region's gallery is fetched again.
    pub async fn submit_upload(&mut self) -> &UploadStatus {
        let region = self.form.region.clone();
        self.status = UploadStatus::InProgress;

        match self.api.upload(&region, self.form.file.as_ref()).await {
            Ok(response) => {
                tracing::info!(region = %region, file = ?response.file, "Upload succeeded");
                self.status = UploadStatus::Succeeded(response.message);
                self.form.reset();
                self.refresh(&region).await;
            }
            Err(e) => {
                tracing::error!(region = %region, error = %e, "Upload error");
                self.status = UploadStatus::failed(&e);
            }
        }

        &self.status
    }
}
