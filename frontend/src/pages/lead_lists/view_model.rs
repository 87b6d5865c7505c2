use super::repository::LeadListsRepository;
use crate::{
    api::{ApiClient, ApiError, CreateLeadListRequest, LeadList},
    state::{config::use_api_client, toast::use_toast},
};
use leptos::*;
use std::rc::Rc;

/// Rejects a blank name; a valid name is sent exactly as typed.
pub fn build_create_request(
    name: &str,
    description: &str,
) -> Result<CreateLeadListRequest, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("List name is required"));
    }
    let description = if description.trim().is_empty() {
        None
    } else {
        Some(description.to_string())
    };
    Ok(CreateLeadListRequest {
        name: name.to_string(),
        description,
    })
}

#[derive(Clone, Copy)]
pub struct LeadListsViewModel {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub show_form: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub reload: RwSignal<u32>,
    pub lists: Resource<(ApiClient, u32), Result<Vec<LeadList>, ApiError>>,
    pub create_action: Action<CreateLeadListRequest, Result<LeadList, ApiError>>,
}

impl LeadListsViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let toasts = use_toast();

        let name = create_rw_signal(String::new());
        let description = create_rw_signal(String::new());
        let show_form = create_rw_signal(false);
        let form_error = create_rw_signal(None::<ApiError>);
        let reload = create_rw_signal(0u32);

        let lists = create_resource(
            move || (api.get(), reload.get()),
            move |(client, _)| async move {
                LeadListsRepository::new_with_client(Rc::new(client))
                    .fetch_lists()
                    .await
            },
        );

        let create_action = create_action(move |request: &CreateLeadListRequest| {
            let repo = LeadListsRepository::new_with_client(Rc::new(api.get_untracked()));
            let request = request.clone();
            async move { repo.create_list(&request).await }
        });

        create_effect(move |_| {
            if let Some(result) = create_action.value().get() {
                match result {
                    Ok(list) => {
                        log::info!("Created lead list {:?}", list.name);
                        toasts.success("List Created", format!("Created \"{}\"", list.name));
                        name.set(String::new());
                        description.set(String::new());
                        form_error.set(None);
                        show_form.set(false);
                        reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        toasts.error("Create Failed", err.error.clone());
                        form_error.set(Some(err));
                    }
                }
            }
        });

        Self {
            name,
            description,
            show_form,
            form_error,
            reload,
            lists,
            create_action,
        }
    }

    pub fn submit(&self) -> bool {
        match build_create_request(&self.name.get_untracked(), &self.description.get_untracked()) {
            Ok(request) => {
                self.form_error.set(None);
                self.create_action.dispatch(request);
                true
            }
            Err(err) => {
                self.form_error.set(Some(err));
                false
            }
        }
    }

    pub fn open_form(&self) {
        self.show_form.set(true);
    }

    pub fn cancel_form(&self) {
        self.show_form.set(false);
        self.form_error.set(None);
    }
}

pub fn use_lead_lists_view_model() -> LeadListsViewModel {
    match use_context::<LeadListsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeadListsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", "   ", "\t\n"] {
            let err = build_create_request(name, "").unwrap_err();
            assert_eq!(err.code, ApiError::VALIDATION);
        }
    }

    #[test]
    fn name_is_sent_unmodified() {
        let request = build_create_request("  Q1 Prospects ", "").unwrap();
        assert_eq!(request.name, "  Q1 Prospects ");
        assert_eq!(request.description, None);
    }

    #[test]
    fn description_is_kept_when_present() {
        let request = build_create_request("Q1 Prospects", "Inbound").unwrap();
        assert_eq!(request.description.as_deref(), Some("Inbound"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::config::provide_config;
    use crate::test_support::ssr::with_idle_resources;

    #[test]
    fn blank_submit_keeps_form_open_with_error() {
        with_idle_resources(|| {
            provide_config("http://localhost:5000");
            let vm = use_lead_lists_view_model();
            vm.open_form();
            vm.name.set("   ".into());

            assert!(!vm.submit());
            assert!(vm.show_form.get_untracked());
            assert_eq!(
                vm.form_error.get_untracked().map(|e| e.error),
                Some("List name is required".to_string())
            );
            assert_eq!(vm.create_action.version().get_untracked(), 0);

            vm.cancel_form();
            assert!(vm.form_error.get_untracked().is_none());
        });
    }
}
