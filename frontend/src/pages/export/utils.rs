use crate::api::{ExportFilters, ExportRequest, ExportResponse};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Zoho,
    HubSpot,
    Standard,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Zoho, ExportFormat::HubSpot, ExportFormat::Standard];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Zoho => "zoho",
            ExportFormat::HubSpot => "hubspot",
            ExportFormat::Standard => "standard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Zoho => "Zoho CRM Format",
            ExportFormat::HubSpot => "HubSpot Format",
            ExportFormat::Standard => "Standard CSV",
        }
    }

    /// Unknown values fall back to the default format.
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTarget {
    Contacts,
    Companies,
}

impl ExportTarget {
    pub fn noun(&self) -> &'static str {
        match self {
            ExportTarget::Contacts => "contacts",
            ExportTarget::Companies => "companies",
        }
    }
}

pub const MIN_SCORE_OPTIONS: &[(u32, &str)] = &[
    (0, "Any Score"),
    (50, "50+"),
    (70, "70+"),
    (80, "80+"),
    (90, "90+"),
];

/// (LeadDB field, Zoho CRM field, HubSpot field)
pub const FIELD_MAPPINGS: &[(&str, &str, &str)] = &[
    ("first_name", "First Name", "First Name"),
    ("last_name", "Last Name", "Last Name"),
    ("email", "Email", "Email"),
    ("job_title", "Title", "Job Title"),
    ("company_name", "Account Name", "Company Name"),
    ("phone", "Phone/Mobile", "Phone Number"),
];

pub const ZOHO_STEPS: &[&str] = &[
    "Export contacts using \"Zoho CRM Format\"",
    "In Zoho CRM, go to Contacts → Import",
    "Upload the downloaded CSV file",
    "Map fields (auto-detected)",
    "Complete the import process",
];

pub const HUBSPOT_STEPS: &[&str] = &[
    "Export contacts using \"HubSpot Format\"",
    "In HubSpot, go to Contacts → Import",
    "Choose \"File from computer\"",
    "Upload CSV and map properties",
    "Review and start import",
];

/// Scores outside the offered thresholds are treated as "any score".
pub fn parse_min_score(value: &str) -> u32 {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|score| MIN_SCORE_OPTIONS.iter().any(|(s, _)| s == score))
        .unwrap_or(0)
}

pub fn export_request(filters: ExportFilters, format: ExportFormat) -> ExportRequest {
    ExportRequest {
        filters,
        zoho_format: format == ExportFormat::Zoho,
    }
}

pub fn success_description(response: &ExportResponse) -> String {
    format!(
        "Exported {} records to {}",
        response.record_count(),
        response.filename
    )
}
