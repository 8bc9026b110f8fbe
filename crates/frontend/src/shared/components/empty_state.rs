use leptos::prelude::*;

/// Centered message shown in place of an empty list
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__message">{message}</p>
        </div>
    }
}
