//! UI Components
//!
//! Reusable Leptos components.

mod page_header;
mod text_field;
mod location_select;
mod item_grid;
mod confirm_modal;

pub use page_header::PageHeader;
pub use text_field::TextField;
pub use location_select::LocationSelect;
pub use item_grid::ItemGrid;
pub use confirm_modal::ConfirmModal;
