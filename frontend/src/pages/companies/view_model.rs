use super::repository::{CompaniesPageData, CompaniesRepository, CompaniesRequest};
use crate::{
    api::{ApiClient, ApiError, CompanySearchQuery},
    state::config::use_api_client,
};
use leptos::*;
use std::rc::Rc;

pub const COMPANIES_PER_PAGE: u32 = 20;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Blank search forms fall back to the first listing page.
pub fn request_for_search(industry: String, location: String, size: String) -> CompaniesRequest {
    let query = CompanySearchQuery {
        industry: optional(industry),
        location: optional(location),
        size: optional(size),
    };
    if query.is_empty() {
        first_page()
    } else {
        CompaniesRequest::Search(query)
    }
}

pub fn first_page() -> CompaniesRequest {
    CompaniesRequest::Page {
        page: 1,
        per_page: COMPANIES_PER_PAGE,
    }
}

#[derive(Clone, Copy)]
pub struct CompaniesViewModel {
    pub industry: RwSignal<String>,
    pub location: RwSignal<String>,
    pub size: RwSignal<String>,
    pub request: RwSignal<CompaniesRequest>,
    pub companies: Resource<(ApiClient, CompaniesRequest), Result<CompaniesPageData, ApiError>>,
}

impl CompaniesViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let request = create_rw_signal(first_page());

        let companies = create_resource(
            move || (api.get(), request.get()),
            move |(client, request)| async move {
                CompaniesRepository::new_with_client(Rc::new(client))
                    .fetch(&request)
                    .await
            },
        );

        Self {
            industry: create_rw_signal(String::new()),
            location: create_rw_signal(String::new()),
            size: create_rw_signal(String::new()),
            request,
            companies,
        }
    }

    pub fn search(&self) {
        let next = request_for_search(
            self.industry.get_untracked(),
            self.location.get_untracked(),
            self.size.get_untracked(),
        );
        log::debug!("Companies request: {:?}", next);
        self.request.set(next);
    }

    pub fn clear(&self) {
        self.industry.set(String::new());
        self.location.set(String::new());
        self.size.set(String::new());
        self.request.set(first_page());
    }

    pub fn go_to_page(&self, page: u32) {
        self.request.update(|request| {
            if let CompaniesRequest::Page { page: current, .. } = request {
                *current = page.max(1);
            }
        });
    }

    pub fn current_page(&self) -> Option<u32> {
        match self.request.get() {
            CompaniesRequest::Page { page, .. } => Some(page),
            CompaniesRequest::Search(_) => None,
        }
    }
}

pub fn use_companies_view_model() -> CompaniesViewModel {
    match use_context::<CompaniesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = CompaniesViewModel::new();
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
    fn paging_is_ignored_while_searching() {
        with_idle_resources(|| {
            provide_config("http://localhost:5000");
            let vm = use_companies_view_model();

            vm.go_to_page(3);
            assert_eq!(vm.current_page(), Some(3));

            vm.industry.set("Finance".into());
            vm.search();
            vm.go_to_page(4);
            assert_eq!(vm.current_page(), None);

            vm.clear();
            assert_eq!(vm.current_page(), Some(1));
            assert!(vm.industry.get_untracked().is_empty());
        });
    }
}
