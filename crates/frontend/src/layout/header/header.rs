use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title of the screen on top, with a back button below the tab root
#[component]
pub fn Header() -> impl IntoView {
    let nav = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="app-header">
            <Show when=move || nav.can_go_back()>
                <button
                    class="app-header__back"
                    title="Back"
                    on:click=move |_| nav.go_back()
                >
                    {icon("chevron-left")}
                </button>
            </Show>
            <h1 class="app-header__title">{move || nav.title()}</h1>
        </header>
    }
}
