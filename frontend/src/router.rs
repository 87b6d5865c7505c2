use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    pages::{
        companies::CompaniesPage, contacts::ContactsPage, dashboard::DashboardPage,
        export::ExportPage, lead_generation::LeadGenerationPage, lead_lists::LeadListsPage,
        settings::SettingsPage,
    },
    state::{
        config::{check_health, provide_config, use_api_client},
        toast::use_toast,
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/dashboard",
    "/companies",
    "/contacts",
    "/lead-lists",
    "/lead-generation",
    "/export",
    "/settings",
];

pub fn mount_app(api_base_url: String) {
    mount_to_body(move || app_root(&api_base_url));
}

pub fn app_root(api_base_url: &str) -> impl IntoView {
    provide_meta_context();
    let (_, set_config) = provide_config(api_base_url);
    use_toast();
    let api = use_api_client();

    create_effect(move |_| {
        let api = api.get();
        spawn_local(async move {
            check_health(&api, set_config).await;
        });
    });

    view! {
        <Title text="LeadDB"/>
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/dashboard" view=DashboardPage/>
                <Route path="/companies" view=CompaniesPage/>
                <Route path="/contacts" view=ContactsPage/>
                <Route path="/lead-lists" view=LeadListsPage/>
                <Route path="/lead-generation" view=LeadGenerationPage/>
                <Route path="/export" view=ExportPage/>
                <Route path="/settings" view=SettingsPage/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_ITEMS;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_every_page() {
        for path in ["/companies", "/contacts", "/lead-lists", "/lead-generation", "/export"] {
            assert!(ROUTE_PATHS.contains(&path), "missing route {path}");
        }
    }

    #[test]
    fn nav_items_point_at_known_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for (_, href) in NAV_ITEMS {
            assert!(all.contains(href), "nav link without route: {}", href);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
