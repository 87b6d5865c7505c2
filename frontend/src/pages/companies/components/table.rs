use crate::{
    api::Company,
    components::common::{Button, ButtonVariant},
    utils::format::{format_count, or_na, page_count},
};
use leptos::*;

const HEADER_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg";

#[component]
pub fn CompanyTable(companies: Vec<Company>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=HEADER_CLASS>{"Name"}</th>
                        <th class=HEADER_CLASS>{"Industry"}</th>
                        <th class=HEADER_CLASS>{"Size"}</th>
                        <th class=HEADER_CLASS>{"Location"}</th>
                        <th class=HEADER_CLASS>{"Website"}</th>
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    {companies
                        .into_iter()
                        .map(|company| {
                            let location = or_na(company.display_location().as_deref());
                            let website = company
                                .website
                                .clone()
                                .filter(|w| !w.trim().is_empty());
                            view! {
                                <tr>
                                    <td class=format!("{CELL_CLASS} font-medium")>{company.name.clone()}</td>
                                    <td class=CELL_CLASS>{or_na(company.industry.as_deref())}</td>
                                    <td class=CELL_CLASS>{or_na(company.size.as_deref())}</td>
                                    <td class=CELL_CLASS>{location}</td>
                                    <td class=CELL_CLASS>
                                        {match website {
                                            Some(url) => view! {
                                                <a
                                                    href=url.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-blue-600 hover:underline"
                                                >
                                                    {url}
                                                </a>
                                            }
                                            .into_view(),
                                            None => "N/A".into_view(),
                                        }}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn CompanyPager(
    page: u32,
    per_page: u32,
    total: u64,
    on_page: Callback<u32>,
) -> impl IntoView {
    let pages = page_count(total, per_page);
    let has_prev = page > 1;
    let has_next = u64::from(page) < pages;

    view! {
        <div class="flex items-center justify-between pt-4">
            <p class="text-sm text-fg-muted">
                {format!("{} companies, page {} of {}", format_count(total), page, pages.max(1))}
            </p>
            <div class="flex gap-2">
                <Button
                    variant=ButtonVariant::Outline
                    disabled=!has_prev
                    on:click=move |_| on_page.call(page.saturating_sub(1))
                >
                    {"Previous"}
                </Button>
                <Button
                    variant=ButtonVariant::Outline
                    disabled=!has_next
                    on:click=move |_| on_page.call(page + 1)
                >
                    {"Next"}
                </Button>
            </div>
        </div>
    }
}
