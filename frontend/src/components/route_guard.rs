use yew::prelude::*;

use crate::hooks::use_session;
use crate::{use_nav, Route};

/// What a protected view should do for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Startup check still pending: render a neutral placeholder, never
    /// redirect yet
    Wait,
    /// Resolved anonymous, send the visitor to the login view
    Redirect,
    Render,
}

pub fn guard_outcome(is_loading: bool, has_identity: bool) -> GuardOutcome {
    if is_loading {
        GuardOutcome::Wait
    } else if has_identity {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Gates protected views on the session store. Waiting out the initial
/// check avoids the flash-redirect race; the redirect itself fires from an
/// effect, exactly once per transition to anonymous.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();
    let nav = use_nav();

    let outcome = guard_outcome(session.is_loading, session.identity.is_some());

    use_effect_with(outcome == GuardOutcome::Redirect, {
        let navigate = nav.navigate.clone();
        move |should_redirect| {
            if *should_redirect {
                navigate.emit(Route::Login);
            }
            || ()
        }
    });

    match outcome {
        GuardOutcome::Wait => html! {
            <div class="session-loading">{"Checking session..."}</div>
        },
        GuardOutcome::Redirect => html! {},
        GuardOutcome::Render => html! { <>{ props.children.clone() }</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_content_never_renders_while_loading() {
        assert_eq!(guard_outcome(true, false), GuardOutcome::Wait);
        // Identity cannot exist while the check is pending, but the guard
        // must still hold back if it somehow does
        assert_eq!(guard_outcome(true, true), GuardOutcome::Wait);
    }

    #[test]
    fn test_resolved_anonymous_redirects() {
        assert_eq!(guard_outcome(false, false), GuardOutcome::Redirect);
    }

    #[test]
    fn test_authenticated_renders() {
        assert_eq!(guard_outcome(false, true), GuardOutcome::Render);
    }
}
