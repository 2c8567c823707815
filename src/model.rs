use serde::Deserialize;

/// A stored file record in a Storyblok space.
///
/// Only the fields the purge needs are decoded; everything else in the API
/// payload is ignored.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct Asset {
    id: u64,
    filename: String,
}

impl Asset {
    pub fn new(id: u64, filename: &str) -> Asset {
        Asset {
            id,
            filename: filename.to_string(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// Body of one page of the "list assets" endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetListResponse {
    pub assets: Vec<Asset>,
}
