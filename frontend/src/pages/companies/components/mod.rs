pub mod search;
pub mod table;

pub use search::CompanySearchForm;
pub use table::{CompanyPager, CompanyTable};
