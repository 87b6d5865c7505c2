use leptos::*;
use uuid::Uuid;

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy, Debug)]
pub struct ToastState {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    /// Newest first; anything past [`TOAST_LIMIT`] is dropped.
    pub fn push(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
    ) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            title: title.into(),
            description,
            variant,
        };
        let id = toast.id;
        self.toasts.update(|list| {
            list.insert(0, toast);
            list.truncate(TOAST_LIMIT);
        });
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push(title, Some(description.into()), ToastVariant::Default)
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push(title, Some(description.into()), ToastVariant::Destructive)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let state = *self;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || state.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastState {
    match use_context::<ToastState>() {
        Some(state) => state,
        None => {
            let state = ToastState::new();
            provide_context(state);
            state
        }
    }
}
