pub mod api_requests;

pub use api_requests::{PageRequest, ParseKindError, ResourceKind};
