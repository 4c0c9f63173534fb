pub mod entry;
pub mod list;

pub use entry::PlanEntry;
pub use list::{PlanList, RowRef};
