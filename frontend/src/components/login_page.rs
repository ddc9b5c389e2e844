use shared::{CredentialsRequest, Identity};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_api, use_session};
use crate::services::logging::Logger;

/// Combined sign-in / sign-up screen. Field presence is enforced by the
/// browser (`required` attributes); this is the only form that shows an
/// inline failure message.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_api();
    let session = use_session();

    let is_signup = use_state(|| false);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let alive = use_mut_ref(|| true);
    use_effect_with((), {
        let alive = alive.clone();
        move |_| {
            move || {
                *alive.borrow_mut() = false;
            }
        }
    });

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let api = api.clone();
        let session = session.clone();
        let is_signup = is_signup.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let alive = alive.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            submitting.set(true);

            let api = api.clone();
            let session = session.clone();
            let is_signup_state = is_signup.clone();
            let signup = *is_signup;
            let username_state = username.clone();
            let email_state = email.clone();
            let password_state = password.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let alive = alive.clone();

            let credentials = CredentialsRequest {
                username: (*username).clone(),
                email: if signup { Some((*email).clone()) } else { None },
                password: (*password).clone(),
            };

            spawn_local(async move {
                if signup {
                    match api.signup(&credentials).await {
                        Ok(()) => {
                            if *alive.borrow() {
                                // Drop back to the sign-in form with cleared fields
                                is_signup_state.set(false);
                                username_state.set(String::new());
                                email_state.set(String::new());
                                password_state.set(String::new());
                            }
                        }
                        Err(e) => {
                            Logger::error_with_component("auth", &format!("signup failed: {}", e));
                            if *alive.borrow() {
                                error.set(Some("Signup failed. Try again.".to_string()));
                            }
                        }
                    }
                } else {
                    match api.login(&credentials).await {
                        Ok(()) => {
                            // Server exchange done; hand the identity to the
                            // session store, which navigates to the dashboard
                            session.login.emit(Identity {
                                username: credentials.username.clone(),
                                email: None,
                            });
                        }
                        Err(e) => {
                            Logger::error_with_component("auth", &format!("login failed: {}", e));
                            if *alive.borrow() {
                                error.set(Some("Invalid username or password".to_string()));
                            }
                        }
                    }
                }
                if *alive.borrow() {
                    submitting.set(false);
                }
            });
        })
    };

    let toggle_mode = {
        let is_signup = is_signup.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            is_signup.set(!*is_signup);
            error.set(None);
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2 class="auth-title">
                    { if *is_signup { "Create an account" } else { "Sign in to your account" } }
                </h2>
                <form class="auth-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        class="auth-input"
                        placeholder="Username"
                        required=true
                        value={(*username).clone()}
                        oninput={on_username_input}
                    />
                    { if *is_signup {
                        html! {
                            <input
                                type="email"
                                class="auth-input"
                                placeholder="Email"
                                required=true
                                value={(*email).clone()}
                                oninput={on_email_input}
                            />
                        }
                    } else {
                        html! {}
                    }}
                    <input
                        type="password"
                        class="auth-input"
                        placeholder="Password"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />

                    { if let Some(message) = &*error {
                        html! { <p class="auth-error">{ message.clone() }</p> }
                    } else {
                        html! {}
                    }}

                    <button type="submit" class="auth-submit" disabled={*submitting}>
                        { if *submitting {
                            "Please wait..."
                        } else if *is_signup {
                            "Sign up"
                        } else {
                            "Sign in"
                        }}
                    </button>
                </form>
                <p class="auth-toggle">
                    { if *is_signup { "Already have an account?" } else { "Don't have an account?" } }
                    <button type="button" class="auth-toggle-button" onclick={toggle_mode}>
                        { if *is_signup { "Sign in" } else { "Sign up" } }
                    </button>
                </p>
            </div>
        </div>
    }
}
