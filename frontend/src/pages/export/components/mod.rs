pub mod actions;
pub mod filters;
pub mod guide;

pub use actions::ExportActions;
pub use filters::ExportFiltersCard;
pub use guide::{CrmGuide, FieldMappingTable};
