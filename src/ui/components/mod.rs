//! Reusable UI components.

mod bulk_select;

pub use bulk_select::{BulkAction, BulkSelectInput};
