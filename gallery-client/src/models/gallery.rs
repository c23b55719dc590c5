pub const LOADING_MESSAGE: &str = "Loading images...";
pub const EMPTY_MESSAGE: &str = "No images uploaded for this region yet.";
pub const LOAD_FAILED_MESSAGE: &str =
    "Could not load images. Please check the connection and try again.";

/// What a region's gallery area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryView {
    /// Never fetched.
    #[default]
    Idle,
    Loading,
    Images(Vec<GalleryImage>),
    Empty,
    Failed,
}

impl GalleryView {
    pub fn from_urls(region: &str, urls: Vec<String>) -> Self {
        if urls.is_empty() {
            return GalleryView::Empty;
        }
        GalleryView::Images(
            urls.into_iter()
                .map(|src| GalleryImage::new(region, src))
                .collect(),
        )
    }

    /// Placeholder text, for every state that isn't a list of images.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GalleryView::Loading => Some(LOADING_MESSAGE),
            GalleryView::Empty => Some(EMPTY_MESSAGE),
            GalleryView::Failed => Some(LOAD_FAILED_MESSAGE),
            GalleryView::Idle | GalleryView::Images(_) => None,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        match self {
            GalleryView::Images(images) => images,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    /// Deferred until the image scrolls into view.
    pub lazy: bool,
}

impl GalleryImage {
    pub fn new(region: &str, src: String) -> Self {
        Self {
            src,
            alt: format!("Image of {}", region),
            lazy: true,
        }
    }
}
