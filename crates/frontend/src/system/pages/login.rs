use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::FetchClient;
use crate::shared::components::StatusMessage;
use crate::shared::config::ClientConfig;
use crate::shared::navigation::navigate_to;
use crate::shared::request_cycle::StatusLine;
use crate::system::auth::session::{LoginOutcome, SessionController, SessionSurface};

#[derive(Clone, Copy)]
struct LoginForm {
    cnpj: RwSignal<String>,
    senha: RwSignal<String>,
    message: RwSignal<Option<StatusLine>>,
}

impl SessionSurface for LoginForm {
    fn cnpj(&self) -> String {
        self.cnpj.get_untracked()
    }

    fn senha(&self) -> String {
        self.senha.get_untracked()
    }

    fn set_message(&self, message: StatusLine) {
        self.message.set(Some(message));
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let form = LoginForm {
        cnpj: RwSignal::new(String::new()),
        senha: RwSignal::new(String::new()),
        message: RwSignal::new(None),
    };
    let controller = SessionController::new(form, FetchClient::new(config.clone()), config);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let controller = controller.clone();
        spawn_local(async move {
            if let LoginOutcome::Redirect { to, after_ms } = controller.login().await {
                TimeoutFuture::new(after_ms).await;
                navigate_to(&to);
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Notas Fiscais"</h1>
                <h2>"Acesso da empresa"</h2>

                <form id="loginForm" on:submit=on_submit>
                    <div class="form-group">
                        <label for="cnpj">"CNPJ"</label>
                        <input
                            type="text"
                            id="cnpj"
                            placeholder="00.000.000/0000-00"
                            prop:value=move || form.cnpj.get()
                            on:input=move |ev| form.cnpj.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="senha">"Senha"</label>
                        <input
                            type="password"
                            id="senha"
                            prop:value=move || form.senha.get()
                            on:input=move |ev| form.senha.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Entrar"
                    </button>
                </form>

                <div id="mensagem">
                    <StatusMessage status=form.message />
                </div>
            </div>
        </div>
    }
}
