//! Request URL construction
//!
//! A `RequestTemplate` holds every query parameter that is the same for all
//! pages of a run. `page_url` adds the two that vary per page.

use crate::config::SearchConfig;
use crate::credentials::Credentials;
use crate::pagination::PAGE_SIZE;
use crate::types::PageOffset;
use url::Url;

/// Per-run request template
#[derive(Debug, Clone)]
pub struct RequestTemplate {
    base: Url,
    page_size: u32,
}

impl RequestTemplate {
    /// Build the template from the run configuration and credentials
    pub fn new(config: &SearchConfig, credentials: &Credentials) -> Self {
        let mut base = config.endpoint.clone();
        {
            let mut pairs = base.query_pairs_mut();
            pairs
                .append_pair("key", &credentials.api_key)
                .append_pair("cx", &credentials.scope_id)
                .append_pair("q", &config.query())
                .append_pair("safe", config.safe.as_param());

            if let Some(image) = &config.image {
                pairs.append_pair("searchType", "image");
                if let Some(ty) = image.image_type {
                    pairs.append_pair("imgType", ty.as_param());
                }
                if let Some(size) = image.size {
                    pairs.append_pair("imgSize", size.as_param());
                }
                if let Some(color) = image.color {
                    pairs.append_pair("imgDominantColor", color.as_param());
                }
                if let Some(scale) = image.scale {
                    pairs.append_pair("imgColorType", scale.as_param());
                }
            }

            if let Some(file_type) = config.file_type {
                pairs.append_pair("fileType", file_type.as_param());
            }
            if let Some(exact) = &config.exact {
                pairs.append_pair("exactTerms", exact);
            }
            if let Some(exclude) = &config.exclude {
                pairs.append_pair("excludeTerms", exclude);
            }
            if let Some(site) = &config.site {
                pairs
                    .append_pair("siteSearch", site)
                    .append_pair("siteSearchFilter", "i");
            }
        }

        Self {
            base,
            page_size: PAGE_SIZE,
        }
    }

    /// URL for the page starting at `offset`.
    ///
    /// The service numbers results from 1, so `start` is `offset + 1`.
    pub fn page_url(&self, offset: PageOffset) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("start", &(offset + 1).to_string())
            .append_pair("num", &self.page_size.to_string());
        url
    }
}
