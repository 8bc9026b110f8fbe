use crate::domain::a005_more::MoreOption;
use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::icons::icon;
use crate::system::auth::AuthContext;
use leptos::prelude::*;

#[component]
fn OptionCard(option: MoreOption, on_press: Callback<MoreOption>) -> impl IntoView {
    view! {
        <div class="option-card" on:click=move |_| on_press.run(option)>
            <span class="option-card__icon">{icon(option.icon())}</span>
            <span class="option-card__label">{option.label()}</span>
            <span class="option-card__chevron">{icon("chevron-right")}</span>
        </div>
        <hr class="divider" />
    }
}

#[component]
pub fn MoreMenu(auth: AuthContext) -> impl IntoView {
    let nav = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let on_press = Callback::new(move |option: MoreOption| match option {
        MoreOption::Profile => nav.navigate(Screen::Profile),
        MoreOption::LogOut => auth.sign_out(),
    });

    view! {
        <div class="more">
            {MoreOption::all()
                .iter()
                .map(|option| view! { <OptionCard option=*option on_press=on_press /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProfilePage(auth: AuthContext) -> impl IntoView {
    view! {
        <div class="profile">
            <div class="profile__avatar">{icon("user")}</div>
            {move || if auth.is_authenticated() {
                view! { <div class="profile__status">"Signed in"</div> }.into_any()
            } else {
                view! { <div class="profile__status">"Not signed in"</div> }.into_any()
            }}
        </div>
    }
}
