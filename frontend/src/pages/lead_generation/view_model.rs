use super::{
    repository::{LeadGenerationRepository, SaveReport},
    utils::{COMPANY_SIZES, DEFAULT_LIMIT, INDUSTRIES, MAX_LIMIT, MIN_LIMIT},
};
use crate::{
    api::{ApiError, LeadGenerationRequest, LeadGenerationResponse},
    state::{config::use_api_client, toast::use_toast},
};
use leptos::*;
use serde_json::json;
use std::rc::Rc;

/// Raw form input as typed by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadGenerationForm {
    pub industry: String,
    pub location: String,
    pub company_size: String,
    pub limit: String,
    pub use_real_data: bool,
}

impl Default for LeadGenerationForm {
    fn default() -> Self {
        Self {
            industry: String::new(),
            location: String::new(),
            company_size: String::new(),
            limit: DEFAULT_LIMIT.to_string(),
            use_real_data: true,
        }
    }
}

impl LeadGenerationForm {
    pub fn to_request(&self) -> Result<LeadGenerationRequest, ApiError> {
        let mut errors = Vec::new();

        let industry = self.industry.trim();
        if industry.is_empty() {
            errors.push("Industry is required".to_string());
        } else if !INDUSTRIES.contains(&industry) {
            errors.push(format!("Unknown industry: {industry}"));
        }

        let company_size = self.company_size.trim();
        if !company_size.is_empty() && !COMPANY_SIZES.contains(&company_size) {
            errors.push(format!("Unknown company size: {company_size}"));
        }

        let limit = match self.limit.trim().parse::<u32>() {
            Ok(n) if (MIN_LIMIT..=MAX_LIMIT).contains(&n) => n,
            _ => {
                errors.push(format!(
                    "Number of leads must be between {MIN_LIMIT} and {MAX_LIMIT}"
                ));
                DEFAULT_LIMIT
            }
        };

        if !errors.is_empty() {
            return Err(ApiError {
                details: Some(json!({ "errors": errors })),
                ..ApiError::validation("Please fix the lead generation form")
            });
        }

        Ok(LeadGenerationRequest {
            industry: industry.to_string(),
            location: self.location.trim().to_string(),
            company_size: company_size.to_string(),
            limit,
            use_real_data: self.use_real_data,
        })
    }
}

pub fn results_description(results: &LeadGenerationResponse) -> String {
    format!(
        "Found {} companies with {} contacts",
        results.total_companies, results.total_contacts
    )
}

#[derive(Clone, Copy)]
pub struct LeadGenerationViewModel {
    pub industry: RwSignal<String>,
    pub location: RwSignal<String>,
    pub company_size: RwSignal<String>,
    pub limit: RwSignal<String>,
    pub use_real_data: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub results: RwSignal<Option<LeadGenerationResponse>>,
    pub generate_action: Action<LeadGenerationRequest, Result<LeadGenerationResponse, ApiError>>,
    pub save_action: Action<LeadGenerationResponse, SaveReport>,
}

impl LeadGenerationViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let toasts = use_toast();
        let defaults = LeadGenerationForm::default();

        let error = create_rw_signal(None::<ApiError>);
        let results = create_rw_signal(None::<LeadGenerationResponse>);

        let generate_action = create_action(move |request: &LeadGenerationRequest| {
            let repo = LeadGenerationRepository::new_with_client(Rc::new(api.get_untracked()));
            let request = request.clone();
            async move { repo.generate(&request).await }
        });

        let save_action = create_action(move |leads: &LeadGenerationResponse| {
            let repo = LeadGenerationRepository::new_with_client(Rc::new(api.get_untracked()));
            let leads = leads.clone();
            async move { repo.save(&leads).await }
        });

        create_effect(move |_| {
            if let Some(result) = generate_action.value().get() {
                match result {
                    Ok(response) => {
                        toasts.success("Leads Generated", results_description(&response));
                        error.set(None);
                        results.set(Some(response));
                    }
                    Err(err) => {
                        log::error!("Lead generation failed: {}", err);
                        toasts.error("Generation Failed", err.error.clone());
                        error.set(Some(err));
                    }
                }
            }
        });

        create_effect(move |_| {
            if let Some(report) = save_action.value().get() {
                if report.saved() == 0 && report.failed() > 0 {
                    toasts.error("Save Failed", report.summary());
                } else {
                    toasts.success("Saved to Database", report.summary());
                }
            }
        });

        Self {
            industry: create_rw_signal(defaults.industry),
            location: create_rw_signal(defaults.location),
            company_size: create_rw_signal(defaults.company_size),
            limit: create_rw_signal(defaults.limit),
            use_real_data: create_rw_signal(defaults.use_real_data),
            error,
            results,
            generate_action,
            save_action,
        }
    }

    pub fn form(&self) -> LeadGenerationForm {
        LeadGenerationForm {
            industry: self.industry.get_untracked(),
            location: self.location.get_untracked(),
            company_size: self.company_size.get_untracked(),
            limit: self.limit.get_untracked(),
            use_real_data: self.use_real_data.get_untracked(),
        }
    }

    /// Validates the form; only a valid request is sent.
    pub fn submit(&self) -> bool {
        match self.form().to_request() {
            Ok(request) => {
                self.error.set(None);
                self.generate_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }

    pub fn save(&self) {
        if let Some(leads) = self.results.get_untracked() {
            self.save_action.dispatch(leads);
        }
    }

    pub fn can_generate(&self) -> bool {
        !self.industry.get().trim().is_empty() && !self.generate_action.pending().get()
    }
}

pub fn use_lead_generation_view_model() -> LeadGenerationViewModel {
    match use_context::<LeadGenerationViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeadGenerationViewModel::new();
            provide_context(vm);
            vm
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::config::provide_config;
    use crate::test_support::ssr::with_idle_resources;

    #[test]
    fn invalid_submit_sets_error_without_dispatching() {
        with_idle_resources(|| {
            provide_config("http://localhost:5000");
            let vm = use_lead_generation_view_model();
            assert!(!vm.can_generate());

            vm.limit.set("500".into());
            assert!(!vm.submit());
            let err = vm.error.get_untracked().unwrap();
            assert_eq!(err.code, ApiError::VALIDATION);
            assert_eq!(vm.generate_action.version().get_untracked(), 0);
        });
    }
}
