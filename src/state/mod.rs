// State management module.
// Handles filters, loading, and list selection for the viewer tabs.

pub mod filters;
pub mod list;

pub use filters::{Filters, SINCE_CYCLE};
pub use list::{LoadingState, SelectableList};
