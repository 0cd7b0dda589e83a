use catalog_client::ResourceKind;
use serde::Deserialize;

/// Query of the passthrough endpoint. Both fields stay raw strings so bad
/// values can be answered with a specific 400 instead of a generic
/// extractor error.
#[derive(Debug, Deserialize)]
pub struct PassthroughQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub page: Option<String>,
}

impl PassthroughQuery {
    pub fn kind(&self) -> Option<ResourceKind> {
        self.kind.as_deref()?.parse().ok()
    }

    /// Requested page, `1` when absent. `None` for anything that is not a
    /// positive integer.
    pub fn page(&self) -> Option<u32> {
        match self.page.as_deref() {
            None => Some(1),
            Some(raw) => raw.trim().parse().ok().filter(|page| *page >= 1),
        }
    }
}
