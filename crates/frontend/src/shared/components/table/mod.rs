pub mod number_format;
pub mod sort_cycle;
pub mod sortable_header_cell;

pub use number_format::*;
pub use sort_cycle::{SortCycle, SortDirection};
pub use sortable_header_cell::SortableHeaderCell;
