use super::repository;
use crate::{
    api::ApiError,
    config::{normalize_base_url, DEFAULT_API_BASE_URL},
    state::config::{set_api_base_url, use_config, ConfigState},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SettingsViewModel {
    pub config: ReadSignal<ConfigState>,
    set_config: WriteSignal<ConfigState>,
    pub draft: RwSignal<String>,
    pub probe_action: Action<String, Result<(), ApiError>>,
}

impl SettingsViewModel {
    pub fn new() -> Self {
        let (config, set_config) = use_config();
        let draft = create_rw_signal(config.with_untracked(|c| c.api_base_url.clone()));

        let probe_action = create_action(move |base_url: &String| {
            repository::probe_backend(base_url.clone())
        });

        Self {
            config,
            set_config,
            draft,
            probe_action,
        }
    }

    pub fn is_dirty(&self) -> bool {
        let draft = normalize_base_url(Some(self.draft.get().as_str()));
        self.config.with(|c| c.api_base_url != draft)
    }

    /// Applying a new URL re-checks health and re-runs every page fetch
    /// through the client memo.
    pub fn apply(&self) {
        set_api_base_url(self.set_config, &self.draft.get_untracked());
        self.draft
            .set(self.config.with_untracked(|c| c.api_base_url.clone()));
    }

    pub fn reset(&self) {
        self.draft.set(DEFAULT_API_BASE_URL.to_string());
        self.apply();
    }

    pub fn test_draft(&self) {
        self.probe_action.dispatch(self.draft.get_untracked());
    }
}

pub fn use_settings_view_model() -> SettingsViewModel {
    match use_context::<SettingsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = SettingsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::config::{provide_config, ApiStatus};
    use crate::test_support::ssr::with_idle_resources;

    #[test]
    fn apply_normalizes_and_resets_status() {
        with_idle_resources(|| {
            let (config, set_config) = provide_config("http://localhost:5000");
            set_config.update(|c| c.api_status = ApiStatus::Connected);
            let vm = use_settings_view_model();
            assert!(!vm.is_dirty());

            vm.draft.set("  https://api.example.com/ ".into());
            assert!(vm.is_dirty());
            vm.apply();

            let state = config.get_untracked();
            assert_eq!(state.api_base_url, "https://api.example.com");
            assert_eq!(state.api_status, ApiStatus::Checking);
            assert_eq!(vm.draft.get_untracked(), "https://api.example.com");
            assert!(!vm.is_dirty());
        });
    }

    #[test]
    fn reset_restores_default() {
        with_idle_resources(|| {
            let (config, _) = provide_config("https://api.example.com");
            let vm = use_settings_view_model();
            vm.reset();
            assert_eq!(config.get_untracked().api_base_url, DEFAULT_API_BASE_URL);
        });
    }
}
