//! Client side of the Batman universe catalog: typed records, the
//! fetch-with-fallback client, and a generic paginated card grid.

pub mod client;
pub mod components;
pub mod fallback;
pub mod models;
pub mod requests;
pub mod resource;
pub mod responses;
pub mod views;

pub use client::{CatalogClient, DEFAULT_BASE_URL, FetchError, PageFetcher};
pub use requests::{ParseKindError, ResourceKind};
pub use resource::Resource;
pub use responses::{AnyEnvelope, Envelope, Pagination};
pub use views::ResourceGrid;
