#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::config::{provide_config, ApiStatus, ConfigState};
    use leptos::*;

    /// Config context pointing at `base_url`, already marked connected.
    pub fn provide_connected_config(
        base_url: &str,
    ) -> (ReadSignal<ConfigState>, WriteSignal<ConfigState>) {
        let (read, write) = provide_config(base_url);
        write.update(|c| c.api_status = ApiStatus::Connected);
        (read, write)
    }
}
