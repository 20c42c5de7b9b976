pub mod select_all_checkbox;
pub mod sortable_header_cell;

pub use select_all_checkbox::SelectAllCheckbox;
pub use sortable_header_cell::SortableHeaderCell;
