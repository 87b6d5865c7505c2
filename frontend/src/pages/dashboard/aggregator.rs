//! Dashboard statistics aggregation.
//!
//! Six independent reads are issued together and each result is handed to the
//! caller as soon as it settles, in completion order. A failed read only
//! affects its own metric: the last known value stays in place, the field
//! stops loading, and the failure is logged.

use std::{cell::RefCell, rc::Rc};

use futures::{
    future::{AbortHandle, FutureExt, LocalBoxFuture},
    stream::{self, FuturesUnordered, StreamExt},
};

use crate::{
    api::{ApiClient, ApiError, CompanyQuery, Contact, ContactQuery, SortOrder},
    utils::format::percent_of,
};

pub const RECENT_CONTACTS_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Companies,
    Contacts,
    ContactsWithEmail,
    ContactsWithPhone,
    Lists,
    RecentContacts,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Companies,
        Metric::Contacts,
        Metric::ContactsWithEmail,
        Metric::ContactsWithPhone,
        Metric::Lists,
        Metric::RecentContacts,
    ];

    pub fn is_contact_count(&self) -> bool {
        matches!(
            self,
            Metric::Contacts | Metric::ContactsWithEmail | Metric::ContactsWithPhone
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Companies => "companies total",
            Metric::Contacts => "contacts total",
            Metric::ContactsWithEmail => "contacts with email",
            Metric::ContactsWithPhone => "contacts with phone",
            Metric::Lists => "lists total",
            Metric::RecentContacts => "recent contacts",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    Count(u64),
    Contacts(Vec<Contact>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricUpdate {
    pub metric: Metric,
    pub result: Result<MetricValue, ApiError>,
}

/// Where the aggregator reads its metrics from.
pub trait MetricSource: Clone + 'static {
    fn fetch(&self, metric: Metric) -> LocalBoxFuture<'static, Result<MetricValue, ApiError>>;
}

impl MetricSource for ApiClient {
    fn fetch(&self, metric: Metric) -> LocalBoxFuture<'static, Result<MetricValue, ApiError>> {
        let api = self.clone();
        async move {
            match metric {
                Metric::Companies => api
                    .list_companies(&CompanyQuery {
                        per_page: Some(1),
                        ..Default::default()
                    })
                    .await
                    .map(|r| MetricValue::Count(r.total)),
                Metric::Contacts => count_contacts(&api, None, None).await,
                Metric::ContactsWithEmail => count_contacts(&api, Some(true), None).await,
                Metric::ContactsWithPhone => count_contacts(&api, None, Some(true)).await,
                Metric::Lists => api
                    .list_lead_lists()
                    .await
                    .map(|r| MetricValue::Count(r.lists.len() as u64)),
                Metric::RecentContacts => api
                    .list_contacts(&ContactQuery {
                        per_page: Some(RECENT_CONTACTS_LIMIT as u32),
                        sort: Some("created_at".into()),
                        order: Some(SortOrder::Desc),
                        ..Default::default()
                    })
                    .await
                    .map(|r| MetricValue::Contacts(r.contacts)),
            }
        }
        .boxed_local()
    }
}

async fn count_contacts(
    api: &ApiClient,
    has_email: Option<bool>,
    has_phone: Option<bool>,
) -> Result<MetricValue, ApiError> {
    api.list_contacts(&ContactQuery {
        per_page: Some(1),
        has_email,
        has_phone,
        ..Default::default()
    })
    .await
    .map(|r| MetricValue::Count(r.total))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatField {
    pub value: u64,
    pub loading: bool,
    /// Set when the latest read failed and `value` is carried over.
    pub stale: bool,
}

impl StatField {
    fn loading() -> Self {
        Self {
            value: 0,
            loading: true,
            stale: false,
        }
    }

    fn settled(&self) -> bool {
        !self.loading && !self.stale
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompanyStats {
    pub total: StatField,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total: StatField,
    pub with_email: StatField,
    pub with_phone: StatField,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListStats {
    pub total: StatField,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub companies: CompanyStats,
    pub contacts: ContactStats,
    pub lists: ListStats,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecentContacts {
    pub contacts: Vec<Contact>,
    pub loading: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPhase {
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractViolation {
    WithEmailExceedsTotal { with_email: u64, total: u64 },
    WithPhoneExceedsTotal { with_phone: u64, total: u64 },
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractViolation::WithEmailExceedsTotal { with_email, total } => write!(
                f,
                "contacts with email ({}) exceeds contacts total ({})",
                with_email, total
            ),
            ContractViolation::WithPhoneExceedsTotal { with_phone, total } => write!(
                f,
                "contacts with phone ({}) exceeds contacts total ({})",
                with_phone, total
            ),
        }
    }
}

/// Everything the dashboard renders. Created all-loading on mount.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub recent: RecentContacts,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

impl DashboardSnapshot {
    pub fn loading() -> Self {
        Self {
            stats: DashboardStats {
                companies: CompanyStats {
                    total: StatField::loading(),
                },
                contacts: ContactStats {
                    total: StatField::loading(),
                    with_email: StatField::loading(),
                    with_phone: StatField::loading(),
                },
                lists: ListStats {
                    total: StatField::loading(),
                },
            },
            recent: RecentContacts {
                contacts: Vec::new(),
                loading: true,
            },
        }
    }

    /// Marks every field loading again while keeping current values as the
    /// last known ones.
    pub fn begin_refresh(&mut self) {
        for field in self.fields_mut() {
            field.loading = true;
        }
        self.recent.loading = true;
    }

    fn fields_mut(&mut self) -> [&mut StatField; 5] {
        let stats = &mut self.stats;
        [
            &mut stats.companies.total,
            &mut stats.contacts.total,
            &mut stats.contacts.with_email,
            &mut stats.contacts.with_phone,
            &mut stats.lists.total,
        ]
    }

    fn count_field(&mut self, metric: Metric) -> Option<&mut StatField> {
        let stats = &mut self.stats;
        match metric {
            Metric::Companies => Some(&mut stats.companies.total),
            Metric::Contacts => Some(&mut stats.contacts.total),
            Metric::ContactsWithEmail => Some(&mut stats.contacts.with_email),
            Metric::ContactsWithPhone => Some(&mut stats.contacts.with_phone),
            Metric::Lists => Some(&mut stats.lists.total),
            Metric::RecentContacts => None,
        }
    }

    pub fn apply(&mut self, update: MetricUpdate) {
        let MetricUpdate { metric, result } = update;
        match result {
            Ok(MetricValue::Contacts(contacts)) if metric == Metric::RecentContacts => {
                self.recent.contacts = contacts.into_iter().take(RECENT_CONTACTS_LIMIT).collect();
                self.recent.loading = false;
            }
            Ok(MetricValue::Count(value)) if metric != Metric::RecentContacts => {
                if let Some(field) = self.count_field(metric) {
                    *field = StatField {
                        value,
                        loading: false,
                        stale: false,
                    };
                }
                for violation in self.violations_after(metric) {
                    log::warn!("Dashboard contract mismatch: {}", violation);
                }
            }
            Ok(other) => {
                log::warn!(
                    "Dashboard {} received an unexpected value: {:?}",
                    metric.label(),
                    other
                );
                self.settle_failed(metric);
            }
            Err(err) => {
                log::warn!(
                    "Dashboard {} unavailable ({}): {}",
                    metric.label(),
                    err.code,
                    err
                );
                self.settle_failed(metric);
            }
        }
    }

    /// Mismatches to report once `metric` has settled. Only contact counts
    /// take part in the check.
    fn violations_after(&self, metric: Metric) -> Vec<ContractViolation> {
        if metric.is_contact_count() {
            self.contract_violations()
        } else {
            Vec::new()
        }
    }

    fn settle_failed(&mut self, metric: Metric) {
        match self.count_field(metric) {
            Some(field) => {
                field.loading = false;
                field.stale = true;
            }
            None => self.recent.loading = false,
        }
    }

    pub fn phase(&self) -> DashboardPhase {
        let stats = &self.stats;
        let any_loading = [
            stats.companies.total,
            stats.contacts.total,
            stats.contacts.with_email,
            stats.contacts.with_phone,
            stats.lists.total,
        ]
        .iter()
        .any(|f| f.loading)
            || self.recent.loading;
        if any_loading {
            DashboardPhase::Loading
        } else {
            DashboardPhase::Ready
        }
    }

    /// Only evaluated once the three contact counts came back fresh.
    pub fn contract_violations(&self) -> Vec<ContractViolation> {
        let contacts = &self.stats.contacts;
        let mut violations = Vec::new();
        if !(contacts.total.settled() && contacts.with_email.settled() && contacts.with_phone.settled())
        {
            return violations;
        }
        let total = contacts.total.value;
        if contacts.with_email.value > total {
            violations.push(ContractViolation::WithEmailExceedsTotal {
                with_email: contacts.with_email.value,
                total,
            });
        }
        if contacts.with_phone.value > total {
            violations.push(ContractViolation::WithPhoneExceedsTotal {
                with_phone: contacts.with_phone.value,
                total,
            });
        }
        violations
    }

    pub fn email_coverage(&self) -> u64 {
        let contacts = &self.stats.contacts;
        percent_of(contacts.with_email.value, contacts.total.value)
    }

    pub fn phone_coverage(&self) -> u64 {
        let contacts = &self.stats.contacts;
        percent_of(contacts.with_phone.value, contacts.total.value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed,
    Cancelled,
}

/// Runs refreshes against one source. Starting a refresh cancels the one in
/// flight; a cancelled refresh delivers no further updates.
#[derive(Clone)]
pub struct DashboardAggregator<S: MetricSource = ApiClient> {
    source: S,
    in_flight: Rc<RefCell<Option<AbortHandle>>>,
}

impl<S: MetricSource> DashboardAggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            in_flight: Rc::new(RefCell::new(None)),
        }
    }

    pub async fn refresh(&self, mut on_update: impl FnMut(MetricUpdate)) -> RefreshOutcome {
        let requests: FuturesUnordered<LocalBoxFuture<'static, MetricUpdate>> = Metric::ALL
            .iter()
            .map(|&metric| {
                self.source
                    .fetch(metric)
                    .map(move |result| MetricUpdate { metric, result })
                    .boxed_local()
            })
            .collect();
        let (mut updates, handle) = stream::abortable(requests);
        if let Some(previous) = self.in_flight.replace(Some(handle)) {
            log::debug!("Superseding in-flight dashboard refresh");
            previous.abort();
        }

        while let Some(update) = updates.next().await {
            on_update(update);
        }

        if updates.is_aborted() {
            log::debug!("Dashboard refresh cancelled");
            RefreshOutcome::Cancelled
        } else {
            RefreshOutcome::Completed
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.in_flight.borrow_mut().take() {
            handle.abort();
        }
    }
}
