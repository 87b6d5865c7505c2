use crate::api::{ApiClient, ApiError, LeadGenerationRequest, LeadGenerationResponse};
use std::rc::Rc;

/// Outcome of posting a generated batch back to the database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub companies_saved: usize,
    pub companies_failed: usize,
    pub contacts_saved: usize,
    pub contacts_failed: usize,
}

impl SaveReport {
    pub fn failed(&self) -> usize {
        self.companies_failed + self.contacts_failed
    }

    pub fn saved(&self) -> usize {
        self.companies_saved + self.contacts_saved
    }

    pub fn summary(&self) -> String {
        let mut text = format!(
            "Saved {} companies and {} contacts",
            self.companies_saved, self.contacts_saved
        );
        if self.failed() > 0 {
            text.push_str(&format!(" ({} failed)", self.failed()));
        }
        text
    }
}

#[derive(Clone)]
pub struct LeadGenerationRepository {
    client: Rc<ApiClient>,
}

impl LeadGenerationRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        request: &LeadGenerationRequest,
    ) -> Result<LeadGenerationResponse, ApiError> {
        self.client.generate_industry_leads(request).await
    }

    /// Posts every company, then every contact. A failed record is counted and skipped.
    pub async fn save(&self, leads: &LeadGenerationResponse) -> SaveReport {
        let mut report = SaveReport::default();
        for company in &leads.companies {
            match self.client.create_company(company).await {
                Ok(_) => report.companies_saved += 1,
                Err(err) => {
                    log::warn!("Saving company {:?} failed: {}", company.name, err);
                    report.companies_failed += 1;
                }
            }
        }
        for contact in &leads.contacts {
            match self.client.create_contact(contact).await {
                Ok(_) => report.contacts_saved += 1,
                Err(err) => {
                    log::warn!("Saving contact {:?} failed: {}", contact.full_name(), err);
                    report.contacts_failed += 1;
                }
            }
        }
        log::info!("{}", report.summary());
        report
    }
}
