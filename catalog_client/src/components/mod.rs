mod card;
mod pagination;

pub use card::{Card, CardField};
pub use pagination::{ControlState, PageControl, PaginationControl};
