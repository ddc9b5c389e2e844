use shared::Identity;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session::SessionState;
use crate::Route;

/// Session context value handed to consumers. `login` is a purely local
/// transition: the auth form has already completed the server exchange
/// and supplies the resulting identity. `logout` is best-effort on the
/// network side; local state clears regardless of the call's outcome.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub identity: Option<Identity>,
    pub is_loading: bool,
    pub login: Callback<Identity>,
    pub logout: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub navigate: Callback<Route>,
    pub children: Children,
}

/// Owns the session state machine and the shared [`ApiClient`].
///
/// Issues exactly one `/auth/check` on mount. The client's unauthorized
/// callback clears the session and navigates to the login view, so a 401
/// anywhere in the app funnels through the same transition.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_state(|| SessionState::Unknown);

    let api = use_memo(props.navigate.clone(), {
        let state = state.clone();
        move |navigate| {
            let navigate = navigate.clone();
            ApiClient::new(Callback::from(move |_| {
                state.set(SessionState::Anonymous);
                navigate.emit(Route::Login);
            }))
        }
    });

    // One-shot startup check; any failure means anonymous
    use_effect_with((), {
        let state = state.clone();
        let api = (*api).clone();
        move |_| {
            spawn_local(async move {
                let outcome = api.check().await;
                if let Err(e) = &outcome {
                    Logger::warn_with_component("session", &format!("auth check failed: {}", e));
                }
                state.set(SessionState::resolved(outcome));
            });
            || ()
        }
    });

    let login = {
        let state = state.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |identity: Identity| {
            state.set(SessionState::Authenticated(identity));
            navigate.emit(Route::Dashboard);
        })
    };

    let logout = {
        let state = state.clone();
        let navigate = props.navigate.clone();
        let api = (*api).clone();
        Callback::from(move |_| {
            let state = state.clone();
            let navigate = navigate.clone();
            let api = api.clone();
            spawn_local(async move {
                if let Err(e) = api.logout().await {
                    Logger::warn_with_component("session", &format!("logout call failed: {}", e));
                }
                state.set(SessionState::Anonymous);
                navigate.emit(Route::Login);
            });
        })
    };

    let handle = SessionHandle {
        identity: state.identity().cloned(),
        is_loading: state.is_loading(),
        login,
        logout,
    };

    html! {
        <ContextProvider<ApiClient> context={(*api).clone()}>
            <ContextProvider<SessionHandle> context={handle}>
                { props.children.clone() }
            </ContextProvider<SessionHandle>>
        </ContextProvider<ApiClient>>
    }
}
