pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Marketing",
    "Healthcare",
    "Finance",
    "Retail",
    "Manufacturing",
    "Education",
    "Real Estate",
    "Consulting",
    "E-commerce",
];

pub const COMPANY_SIZES: &[&str] = &["1-10", "10-50", "50-100", "100-500", "500+"];

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;
pub const DEFAULT_LIMIT: u32 = 50;

pub const PREVIEW_COMPANIES: usize = 5;
pub const PREVIEW_CONTACTS: usize = 10;

/// "... and N more {noun}" when the preview was cut short.
pub fn more_label(total: usize, shown: usize, noun: &str) -> Option<String> {
    (total > shown).then(|| format!("... and {} more {}", total - shown, noun))
}

pub fn data_source_hint(use_real_data: bool) -> &'static str {
    if use_real_data {
        "Will scrape real companies and generate verified emails from public sources"
    } else {
        "Will use sample data for testing purposes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_label_only_when_truncated() {
        assert_eq!(more_label(5, 5, "companies"), None);
        assert_eq!(
            more_label(12, 10, "contacts").as_deref(),
            Some("... and 2 more contacts")
        );
    }

    #[test]
    fn default_limit_is_in_range() {
        assert!((MIN_LIMIT..=MAX_LIMIT).contains(&DEFAULT_LIMIT));
    }
}
