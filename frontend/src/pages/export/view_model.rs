use super::{
    repository::ExportRepository,
    utils::{export_request, parse_min_score, success_description, ExportFormat, ExportTarget},
};
use crate::{
    api::{ApiError, CsvTemplateResponse, ExportFilters, ExportRequest, ExportResponse},
    state::{config::use_api_client, toast::use_toast},
    utils::trigger_csv_download,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ExportViewModel {
    pub has_email: RwSignal<bool>,
    pub has_phone: RwSignal<bool>,
    pub min_score: RwSignal<String>,
    pub format: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub export_action: Action<(ExportTarget, ExportRequest), Result<ExportResponse, ApiError>>,
    pub template_action: Action<(), Result<CsvTemplateResponse, ApiError>>,
}

impl ExportViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let toasts = use_toast();
        let defaults = ExportFilters::default();
        let error = create_rw_signal(None::<ApiError>);

        let export_action = create_action(move |input: &(ExportTarget, ExportRequest)| {
            let repo = ExportRepository::new_with_client(Rc::new(api.get_untracked()));
            let (target, request) = *input;
            async move { repo.export(target, &request).await }
        });

        let template_action = create_action(move |_: &()| {
            let repo = ExportRepository::new_with_client(Rc::new(api.get_untracked()));
            async move { repo.zoho_template().await }
        });

        create_effect(move |_| {
            let Some(result) = export_action.value().get() else {
                return;
            };
            match result.and_then(|response| {
                trigger_csv_download(&response.filename, &response.csv_data).map(|_| response)
            }) {
                Ok(response) => {
                    error.set(None);
                    toasts.success("Export Successful", success_description(&response));
                }
                Err(err) => {
                    log::error!("Export failed: {}", err);
                    toasts.error(
                        "Export Failed",
                        "There was an error exporting your data. Please try again.",
                    );
                    error.set(Some(err));
                }
            }
        });

        create_effect(move |_| {
            let Some(result) = template_action.value().get() else {
                return;
            };
            match result.and_then(|template| {
                trigger_csv_download(&template.filename, &template.csv_data)
            }) {
                Ok(()) => {
                    toasts.success(
                        "Template Downloaded",
                        "Zoho CRM import template downloaded successfully",
                    );
                }
                Err(err) => {
                    log::error!("Template download failed: {}", err);
                    toasts.error("Download Failed", "Could not download template");
                }
            }
        });

        Self {
            has_email: create_rw_signal(defaults.has_email),
            has_phone: create_rw_signal(defaults.has_phone),
            min_score: create_rw_signal(defaults.min_score.to_string()),
            format: create_rw_signal(ExportFormat::default().as_str().to_string()),
            error,
            export_action,
            template_action,
        }
    }

    pub fn request(&self) -> ExportRequest {
        let filters = ExportFilters {
            has_email: self.has_email.get_untracked(),
            has_phone: self.has_phone.get_untracked(),
            min_score: parse_min_score(&self.min_score.get_untracked()),
        };
        export_request(filters, ExportFormat::parse(&self.format.get_untracked()))
    }

    pub fn export(&self, target: ExportTarget) {
        let request = self.request();
        log::info!("Exporting {} ({:?})", target.noun(), request);
        self.export_action.dispatch((target, request));
    }

    pub fn download_template(&self) {
        self.template_action.dispatch(());
    }

    /// Any export in flight disables both export buttons.
    pub fn busy(&self) -> Signal<bool> {
        let pending = self.export_action.pending();
        Signal::derive(move || pending.get())
    }
}

pub fn use_export_view_model() -> ExportViewModel {
    match use_context::<ExportViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ExportViewModel::new();
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
    fn defaults_build_email_only_zoho_request() {
        with_idle_resources(|| {
            provide_config("http://localhost:5000");
            let vm = use_export_view_model();
            let request = vm.request();
            assert!(request.zoho_format);
            assert_eq!(
                request.filters,
                ExportFilters {
                    has_email: true,
                    has_phone: false,
                    min_score: 0
                }
            );
        });
    }

    #[test]
    fn edited_filters_flow_into_request() {
        with_idle_resources(|| {
            provide_config("http://localhost:5000");
            let vm = use_export_view_model();
            vm.has_phone.set(true);
            vm.min_score.set("90".into());
            vm.format.set("standard".into());

            let request = vm.request();
            assert!(!request.zoho_format);
            assert!(request.filters.has_phone);
            assert_eq!(request.filters.min_score, 90);
        });
    }
}
