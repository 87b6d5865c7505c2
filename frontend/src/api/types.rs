use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, alias = "company_size")]
    pub size: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_count: Option<u64>,
    /// Fields this client does not model, kept so the record can be posted back as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    pub fn display_location(&self) -> Option<String> {
        if let Some(location) = non_blank(&self.location) {
            return Some(location.to_string());
        }
        let parts: Vec<&str> = [&self.location_city, &self.location_state]
            .into_iter()
            .filter_map(non_blank)
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub lead_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn has_email(&self) -> bool {
        non_blank(&self.email).is_some()
    }

    pub fn has_phone(&self) -> bool {
        non_blank(&self.phone).is_some()
    }

    /// "Job title at Company", dropping whichever half is missing.
    pub fn headline(&self) -> Option<String> {
        match (non_blank(&self.job_title), non_blank(&self.company_name)) {
            (Some(title), Some(company)) => Some(format!("{title} at {company}")),
            (Some(title), None) => Some(title.to_string()),
            (None, Some(company)) => Some(company.to_string()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyListResponse {
    #[serde(default)]
    pub companies: Vec<Company>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanySearchResponse {
    #[serde(default)]
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactListResponse {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadListsResponse {
    #[serde(default)]
    pub lists: Vec<LeadList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl CompanyQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanySearchQuery {
    pub industry: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
}

impl CompanySearchQuery {
    pub fn is_empty(&self) -> bool {
        self.params().is_empty()
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        for (key, value) in [
            ("industry", &self.industry),
            ("location", &self.location),
            ("size", &self.size),
        ] {
            if let Some(v) = non_blank(value) {
                params.push((key, v.to_string()));
            }
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub has_email: Option<bool>,
    pub has_phone: Option<bool>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl ContactQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(has_email) = self.has_email {
            params.push(("has_email", has_email.to_string()));
        }
        if let Some(has_phone) = self.has_phone {
            params.push(("has_phone", has_phone.to_string()));
        }
        if let Some(sort) = non_blank(&self.sort) {
            params.push(("sort", sort.to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order", order.as_str().to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeadListRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadGenerationRequest {
    pub industry: String,
    pub location: String,
    pub company_size: String,
    pub limit: u32,
    pub use_real_data: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadGenerationResponse {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub total_companies: u64,
    #[serde(default)]
    pub total_contacts: u64,
    #[serde(default)]
    pub search_criteria: SearchCriteria,
}

impl LeadGenerationResponse {
    pub fn contacts_with_email(&self) -> usize {
        self.contacts.iter().filter(|c| c.has_email()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportFilters {
    pub has_email: bool,
    pub has_phone: bool,
    pub min_score: u32,
}

impl Default for ExportFilters {
    fn default() -> Self {
        Self {
            has_email: true,
            has_phone: false,
            min_score: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub filters: ExportFilters,
    pub zoho_format: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    pub csv_data: String,
    pub filename: String,
    #[serde(default)]
    pub total_contacts: Option<u64>,
    #[serde(default)]
    pub total_companies: Option<u64>,
}

impl ExportResponse {
    pub fn record_count(&self) -> u64 {
        self.total_contacts
            .or(self.total_companies)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvTemplateResponse {
    pub csv_data: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl From<&str> for ApiError {
    fn from(message: &str) -> Self {
        ApiError::validation(message)
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub const VALIDATION: &'static str = "VALIDATION_ERROR";
    pub const UNKNOWN: &'static str = "UNKNOWN";
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";
    pub const TIMEOUT: &'static str = "TIMEOUT";
    pub const HTTP_STATUS: &'static str = "HTTP_STATUS";
    pub const DECODE_FAILED: &'static str = "DECODE_FAILED";

    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::VALIDATION)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::UNKNOWN)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::REQUEST_FAILED)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::TIMEOUT)
    }

    pub fn decode_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::DECODE_FAILED)
    }

    pub fn http_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::HTTP_STATUS.to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }

    pub fn is_timeout(&self) -> bool {
        self.code == Self::TIMEOUT
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
