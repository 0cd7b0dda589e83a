use catalog_client::{CatalogClient, ResourceKind};
use serde_json::Value;

/// Where the passthrough endpoint gets its envelopes from.
pub trait CatalogSource {
    async fn envelope(&self, kind: ResourceKind, page: u32) -> anyhow::Result<Value>;
}

impl CatalogSource for CatalogClient {
    async fn envelope(&self, kind: ResourceKind, page: u32) -> anyhow::Result<Value> {
        let envelope = self.fetch_kind(kind, page).await;
        Ok(serde_json::to_value(envelope)?)
    }
}
