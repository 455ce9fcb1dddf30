use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("products API at {}", config.base_url);
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
