use leptos::prelude::*;
use thaw::Spinner;

/// Button component with variants (primary, outline, ghost)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", or "ghost"
    #[prop(optional)]
    variant: &'static str,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    /// Request in flight: shows a spinner and blocks clicks
    #[prop(optional, into)]
    loading: Option<Signal<bool>>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let class = format!("button {} {}", variant_class, class.unwrap_or_default());

    let is_loading = move || loading.map(|l| l.get()).unwrap_or(false);
    let is_disabled = move || disabled.map(|d| d.get()).unwrap_or(false) || is_loading();

    view! {
        <button
            type="button"
            class=class
            class:button--loading=is_loading
            disabled=is_disabled
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || is_loading().then(|| view! { <Spinner /> })}
            <span class="button__label">{children()}</span>
        </button>
    }
}
