use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::usecases::u601_fiscal_chat::FiscalChatPage;
use crate::usecases::u602_process_documents::BatchUploadPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

// The server redirects to "/" when there is no session, so no client-side guard.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/chat") view=FiscalChatPage />
                <Route path=path!("/upload") view=BatchUploadPage />
            </Routes>
        </Router>
    }
}
