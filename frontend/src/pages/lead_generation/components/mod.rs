pub mod form;
pub mod preview;
pub mod results;

pub use form::LeadGenerationFormCard;
pub use preview::{CompaniesPreview, ContactsPreview};
pub use results::{HowItWorks, ResultsSummary};
