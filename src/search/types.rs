//! Decoded response types
//!
//! Every field of the response may be missing or `null`; missing text
//! decodes as an empty string and missing collections as empty.

use serde::{Deserialize, Deserializer};

/// One decoded page of results
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ResultItem>,
}

impl ResultPage {
    /// Number of items on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One search hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub image: Option<ImageDescriptor>,
}

/// Image metadata attached to image-search hits
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    #[serde(default)]
    pub context_link: Option<String>,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
