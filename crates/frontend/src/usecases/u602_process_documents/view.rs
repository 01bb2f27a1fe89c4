//! Document upload - View Components

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::batch::{BatchResultView, BatchUploadController};
use super::selection::files_from_list;
use super::single::SingleUploadController;
use super::view_model::{BatchUploadVm, SingleUploadVm};
use crate::shared::api_utils::FetchClient;
use crate::shared::components::StatusMessage;
use crate::shared::config::ClientConfig;
use crate::shared::navigation::navigate_to;

const ACCEPTED_TYPES: &str = ".pdf,.xml";

/// Single invoice upload shown on the dashboard
#[component]
#[allow(non_snake_case)]
pub fn SingleUploadPanel() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let vm = SingleUploadVm::new();
    let controller = SingleUploadController::new(vm, FetchClient::new(config));

    let handle_upload = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    view! {
        <div class="upload-panel">
            <h3>"📄 Enviar nota fiscal"</h3>
            <Flex style="gap: 8px; align-items: center;">
                <input type="file" id="file-input" accept=ACCEPTED_TYPES node_ref=vm.file_input />
                <Button appearance=ButtonAppearance::Primary on_click=handle_upload>
                    "Enviar"
                </Button>
            </Flex>
            <div id="upload-status">
                <StatusMessage status=vm.status />
            </div>
        </div>
    }
}

/// Multi-file upload page with drag-and-drop
#[component]
#[allow(non_snake_case)]
pub fn BatchUploadPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let dashboard_page = config.dashboard_page.clone();

    let vm = BatchUploadVm::new();
    let controller = BatchUploadController::new(vm, FetchClient::new(config));

    let handle_upload = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            let files = files_from_list(input.files());
            vm.selection.update(|s| s.choose(files));
        }
    };

    let handle_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.selection.update(|s| s.drag_over());
    };

    let handle_drag_leave = move |_: web_sys::DragEvent| {
        vm.selection.update(|s| s.drag_leave());
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let list = ev.data_transfer().and_then(|dt| dt.files());
        match vm.file_input.get() {
            Some(input) => vm.selection.update(|s| s.drop_into(&input, list)),
            None => vm.selection.update(|s| s.drop_files(files_from_list(list))),
        }
    };

    view! {
        <div class="upload-page">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="margin-bottom: 16px;"
            >
                <h2>"📦 Envio de notas em lote"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate_to(&dashboard_page)
                >
                    "Voltar"
                </Button>
            </Flex>

            <div
                id="upload-box"
                class=move || {
                    if vm.selection.with(|s| s.is_drop_active()) {
                        "upload-box dragging"
                    } else {
                        "upload-box"
                    }
                }
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
            >
                <p>"Arraste os arquivos aqui ou selecione abaixo"</p>
                <input
                    type="file"
                    id="file-input"
                    multiple
                    accept=ACCEPTED_TYPES
                    node_ref=vm.file_input
                    on:change=handle_file_select
                />
                <ul class="selected-files">
                    {move || {
                        vm.selection
                            .with(|s| s.names())
                            .into_iter()
                            .map(|name| view! { <li>{name}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=vm.is_sending
                on_click=handle_upload
            >
                "Enviar arquivos"
            </Button>

            <div id="result" class="upload-result">
                {move || match vm.result.get() {
                    BatchResultView::Records(records) => {
                        records
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <div class="resultado-item">
                                        <b>{record.arquivo}</b>
                                        ": "
                                        {record.status}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                    other => {
                        other
                            .lines()
                            .into_iter()
                            .map(|line| view! { <div class="resultado-linha">{line}</div> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
