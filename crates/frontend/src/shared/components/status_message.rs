use leptos::prelude::*;

use crate::shared::request_cycle::StatusLine;

/// Renders an optional status line in its tone's color
#[component]
pub fn StatusMessage(#[prop(into)] status: Signal<Option<StatusLine>>) -> impl IntoView {
    view! {
        {move || {
            status
                .get()
                .map(|line| {
                    view! {
                        <div class=format!("status-message {}", line.tone.css_class())>
                            {line.text}
                        </div>
                    }
                })
        }}
    }
}
