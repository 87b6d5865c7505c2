pub mod download;
pub mod format;
pub mod timeout;

pub use download::trigger_csv_download;
