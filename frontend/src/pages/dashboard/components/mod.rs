pub mod data_quality;
pub mod quick_actions;
pub mod recent_contacts;
pub mod summary;

pub use data_quality::DataQualityCard;
pub use quick_actions::{GettingStartedCard, QuickActions};
pub use recent_contacts::RecentContactsSection;
pub use summary::SummarySection;
