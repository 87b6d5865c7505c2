pub mod companies;
pub mod contacts;
pub mod dashboard;
pub mod export;
pub mod lead_generation;
pub mod lead_lists;
pub mod settings;
