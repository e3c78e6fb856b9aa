//! Image CDN URLs for uploaded assets.

/// Image CDN origin.
const CDN_ORIGIN: &str = "https://cdn.sanity.io/images";

/// Builds sized CDN URLs for image assets of one project/dataset.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// URL for `asset_ref` scaled to `width`×`height`.
    ///
    /// Asset refs look like `image-<id>-<W>x<H>-<ext>`. Anything else yields `None`.
    pub fn url(&self, asset_ref: &str, width: u32, height: u32) -> Option<String> {
        let rest = asset_ref.strip_prefix("image-")?;
        let (id_and_dims, ext) = rest.rsplit_once('-')?;
        let (id, dims) = id_and_dims.rsplit_once('-')?;
        let (w, h) = dims.split_once('x')?;
        if id.is_empty() || ext.is_empty() || w.parse::<u32>().is_err() || h.parse::<u32>().is_err() {
            return None;
        }

        Some(format!(
            "{CDN_ORIGIN}/{}/{}/{id_and_dims}.{ext}?w={width}&h={height}",
            self.project_id, self.dataset
        ))
    }
}
