pub mod create_form;
pub mod grid;

pub use create_form::CreateListForm;
pub use grid::LeadListGrid;
