mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::dashboard::DashboardPage;
use components::header::Header;
use components::login_page::LoginPage;
use components::route_guard::RequireAuth;
use components::session_provider::SessionProvider;
use components::transactions::TransactionsPage;

/// Application views. Navigation is in-memory state, not URL-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Transactions,
}

/// Navigation context: the active route plus the callback that changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct NavHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

#[hook]
pub fn use_nav() -> NavHandle {
    use_context::<NavHandle>().expect("use_nav must be called inside the app root")
}

#[function_component(App)]
fn app() -> Html {
    let route = use_state(|| Route::Dashboard);

    // Identity-stable across renders: context consumers and the session
    // provider's memoized ApiClient compare callbacks by Rc pointer
    let navigate = use_callback((), {
        let route = route.clone();
        move |next: Route, _| route.set(next)
    });

    let nav = NavHandle {
        route: *route,
        navigate: navigate.clone(),
    };

    let view = match *route {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <Header />
                <main class="app-main">
                    <DashboardPage />
                </main>
            </RequireAuth>
        },
        Route::Transactions => html! {
            <RequireAuth>
                <Header />
                <main class="app-main">
                    <TransactionsPage />
                </main>
            </RequireAuth>
        },
    };

    html! {
        <ContextProvider<NavHandle> context={nav}>
            <SessionProvider navigate={navigate}>
                { view }
            </SessionProvider>
        </ContextProvider<NavHandle>>
    }
}

fn main() {
    services::logging::Logger::info_with_component("app", "finance dashboard starting");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_handle_change_detection_needs_a_stable_callback() {
        // Callback equality is Rc identity, so only a route change should
        // make the context value compare unequal
        let navigate = Callback::from(|_: Route| ());
        let a = NavHandle {
            route: Route::Dashboard,
            navigate: navigate.clone(),
        };
        let b = NavHandle {
            route: Route::Dashboard,
            navigate: navigate.clone(),
        };
        assert_eq!(a, b);

        let c = NavHandle {
            route: Route::Transactions,
            navigate: navigate.clone(),
        };
        assert_ne!(a, c);

        // A freshly built callback is a new identity even with the same body
        assert_ne!(navigate, Callback::from(|_: Route| ()));
    }
}
