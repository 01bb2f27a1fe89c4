//! Fiscal Chat - View Component

use leptos::prelude::*;
use thaw::*;

use super::controller::ChatController;
use super::view_model::FiscalChatVm;
use crate::shared::api_utils::FetchClient;
use crate::shared::config::ClientConfig;
use crate::shared::navigation::navigate_to;

#[component]
#[allow(non_snake_case)]
pub fn FiscalChatPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let dashboard_page = config.dashboard_page.clone();

    let vm = FiscalChatVm::new();
    let controller = ChatController::new(vm, FetchClient::new(config));
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view
    Effect::new(move |_| {
        vm.transcript.track();
        if let Some(container) = transcript_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.submit().await;
        });
    });

    view! {
        <div class="chat-page">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="margin-bottom: 16px;"
            >
                <h2>"💬 Chat fiscal"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate_to(&dashboard_page)
                >
                    "Voltar"
                </Button>
            </Flex>

            <div class="form-group">
                <label for="apiKey">"Chave da API (Gemini ou Grok)"</label>
                <input
                    type="password"
                    id="apiKey"
                    autocomplete="off"
                    prop:value=move || vm.api_key.get()
                    on:input=move |ev| vm.api_key.set(event_target_value(&ev))
                />
            </div>

            <div id="chat-box" class="chat-box" node_ref=transcript_ref>
                <For
                    each=move || vm.transcript.get().entries().to_vec()
                    key=|entry| entry.id
                    let:entry
                >
                    <div class=format!("chat-message {}", entry.sender.css_class())>
                        {entry.text.clone()}
                    </div>
                </For>
            </div>

            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Input
                        value=vm.question
                        placeholder="Pergunte sobre suas notas fiscais..."
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_sending
                    on_click=move |_| handle_send.run(())
                >
                    {move || vm.trigger_label()}
                </Button>
            </Flex>
        </div>
    }
}
