use crate::{
    pages::dashboard::aggregator::{
        ContractViolation, DashboardAggregator, DashboardPhase, DashboardSnapshot,
    },
    state::config::use_api_client,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub snapshot: RwSignal<DashboardSnapshot>,
    pub phase: Signal<DashboardPhase>,
    pub violations: Signal<Vec<ContractViolation>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let snapshot = create_rw_signal(DashboardSnapshot::loading());
        let current: StoredValue<Option<DashboardAggregator>> = store_value(None);

        // Re-runs whenever the base URL (and so the client) changes.
        create_effect(move |_| {
            let api = api.get();
            if let Some(previous) = current.get_value() {
                previous.cancel();
            }
            let aggregator = DashboardAggregator::new(api);
            current.set_value(Some(aggregator.clone()));
            snapshot.update(DashboardSnapshot::begin_refresh);

            spawn_local(async move {
                let outcome = aggregator
                    .refresh(move |update| {
                        snapshot.try_update(|s| s.apply(update));
                    })
                    .await;
                log::debug!("Dashboard refresh finished: {:?}", outcome);
            });
        });

        on_cleanup(move || {
            if let Some(Some(aggregator)) = current.try_get_value() {
                aggregator.cancel();
            }
        });

        Self {
            snapshot,
            phase: Signal::derive(move || snapshot.with(DashboardSnapshot::phase)),
            violations: Signal::derive(move || snapshot.with(DashboardSnapshot::contract_violations)),
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::config::provide_config;

    #[test]
    fn view_model_starts_loading() {
        let runtime = create_runtime();
        provide_config("http://localhost:5000");
        let vm = use_dashboard_view_model();
        assert_eq!(vm.phase.get_untracked(), DashboardPhase::Loading);
        assert!(vm.violations.get_untracked().is_empty());
        runtime.dispose();
    }
}
