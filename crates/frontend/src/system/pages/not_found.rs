use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Página não encontrada"</h2>
            <a href="/">"Voltar ao início"</a>
        </div>
    }
}
