use crate::shared::icons::icon;
use leptos::prelude::*;

/// Modal shown while no delivery location is known.
///
/// The single action hands over to the location entry sheet.
#[component]
pub fn LocationDeniedAlert(
    #[prop(into)]
    is_visible: Signal<bool>,
    on_enter_location: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_visible.get()>
            <div class="modal-overlay">
                <div class="modal modal--dialog" role="dialog">
                    <div class="modal__icon">{icon("location-off")}</div>
                    <h3 class="modal__title">"We could not detect your location"</h3>
                    <hr class="divider" />
                    <button
                        class="modal__action"
                        on:click=move |_| on_enter_location.run(())
                    >
                        {icon("search")}
                        <span>"Enter your location"</span>
                    </button>
                    <hr class="divider" />
                </div>
            </div>
        </Show>
    }
}
