//! Shared handling of API failures that a screen does not recover itself.

use crate::shared::api_error::ApiError;
use crate::shared::icons::icon;
use crate::system::auth::AuthContext;
use leptos::prelude::*;

/// Sink for errors a component delegates instead of handling locally
pub trait ApiErrorHandler {
    fn handle_api_error(&self, error: &ApiError);
}

/// App-wide handler: logs, shows a banner, ends the session on 401.
#[derive(Clone, Copy)]
pub struct NetworkErrorHandler {
    pub message: RwSignal<Option<String>>,
    auth: AuthContext,
}

impl NetworkErrorHandler {
    pub fn new(auth: AuthContext) -> Self {
        Self {
            message: RwSignal::new(None),
            auth,
        }
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }
}

impl ApiErrorHandler for NetworkErrorHandler {
    fn handle_api_error(&self, error: &ApiError) {
        log::error!("API request failed: {}", error);
        if matches!(error, ApiError::Unauthorized) {
            self.auth.sign_out();
        }
        self.message.set(Some(error.to_string()));
    }
}

/// Dismissible banner with the last delegated error
#[component]
pub fn ErrorBanner(handler: NetworkErrorHandler) -> impl IntoView {
    view! {
        {move || handler.message.get().map(|text| view! {
            <div class="warning-box warning-box--error" role="alert">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{text}</span>
                <button
                    class="warning-box__close"
                    title="Dismiss"
                    on:click=move |_| handler.dismiss()
                >
                    {icon("x")}
                </button>
            </div>
        })}
    }
}
