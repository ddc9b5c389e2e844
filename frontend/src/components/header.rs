use yew::prelude::*;

use crate::hooks::use_session;
use crate::{use_nav, Route};

/// Top navigation bar shown on protected views.
#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let nav = use_nav();

    let nav_button = |route: Route, label: &str| {
        let navigate = nav.navigate.clone();
        let class = if nav.route == route {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        };
        let onclick = Callback::from(move |_: MouseEvent| navigate.emit(route));
        html! {
            <button type="button" {class} {onclick}>{ label }</button>
        }
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let username = session
        .identity
        .as_ref()
        .map(|identity| identity.username.clone())
        .unwrap_or_default();

    html! {
        <header class="app-header">
            <div class="app-header-brand">
                <span class="app-title">{"Finance Dashboard"}</span>
                <nav class="app-nav">
                    { nav_button(Route::Dashboard, "Dashboard") }
                    { nav_button(Route::Transactions, "Transactions") }
                </nav>
            </div>
            <div class="app-header-user">
                <span class="app-username">{ username }</span>
                <button type="button" class="logout-button" onclick={on_logout}>
                    {"Log out"}
                </button>
            </div>
        </header>
    }
}
