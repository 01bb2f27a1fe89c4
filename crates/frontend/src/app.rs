use crate::routes::routes::AppRoutes;
use crate::shared::config::ClientConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Endpoints and page paths for every controller on the page.
    provide_context(ClientConfig::from_location());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
