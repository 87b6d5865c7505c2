pub mod filters;
pub mod list;

pub use filters::ContactFilters;
pub use list::ContactList;
