mod grid;

pub use grid::{Completion, GridStatus, GridView, LOADING_TEXT, ResourceGrid, Ticket};
