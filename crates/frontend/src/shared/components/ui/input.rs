use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Virtual keyboard hint: "text" (default), "numeric", ...
    #[prop(optional, into)]
    input_mode: Option<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let input_id = id.unwrap_or_default();
    let mode = input_mode.unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=input_id.clone()>
                    {l}
                </label>
            })}
            <input
                id=input_id.clone()
                class="form__input"
                type="text"
                inputmode=mode
                prop:value=move || value.get()
                placeholder=placeholder.unwrap_or_default()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
