pub mod api_response;

pub use api_response::{AnyEnvelope, DEFAULT_PAGE_SIZE, Envelope, Meta, Pagination};
