use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::FetchClient;
use crate::shared::config::ClientConfig;
use crate::shared::navigation::navigate_to;
use crate::system::auth::session::end_session;
use crate::usecases::u602_process_documents::SingleUploadPanel;

/// Landing page after login: single upload, shortcuts, logout
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let chat_page = config.chat_page.clone();
    let upload_page = config.upload_page.clone();
    let client = FetchClient::new(config.clone());

    let handle_logout = move |_| {
        let client = client.clone();
        let config = config.clone();
        spawn_local(async move {
            let home = end_session(&client, &config).await;
            navigate_to(&home);
        });
    };

    view! {
        <div class="dashboard">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="margin-bottom: 24px;"
            >
                <h2>"Painel"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    attr:id="logout-btn"
                    on_click=handle_logout
                >
                    "Sair"
                </Button>
            </Flex>

            <SingleUploadPanel />

            <Flex style="gap: 8px; margin-top: 24px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:id="abrir-chat"
                    on_click=move |_| navigate_to(&chat_page)
                >
                    "💬 Abrir chat fiscal"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate_to(&upload_page)
                >
                    "📦 Envio em lote"
                </Button>
            </Flex>
        </div>
    }
}
