use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::{
    api::{self, ApiError},
    components::toast::show_toast,
    models::LoginRequest,
    route::{LoginQuery, Route},
};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 bg-gray-700 border-gray-600 placeholder-gray-400 text-white";

/// Leaves the SPA for `redirect`, which usually points at a proxied host.
fn follow_redirect(redirect: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    match window.location().set_href(redirect) {
        Ok(()) => true,
        Err(e) => {
            warn!("redirect to {} failed: {:?}", redirect, e);
            false
        }
    }
}

#[component]
pub fn Login(query: LoginQuery) -> Element {
    let redirect = query.redirect;
    let mut username = use_signal(|| "".to_string());
    let mut password = use_signal(|| "".to_string());

    let navigator = use_navigator();

    rsx! {
        div {
            class: "flex w-screen",
            div {
                class: "min-w-sm p-6 border rounded-lg shadow-sm bg-gray-800 border-gray-700 flex-col mx-auto mt-2",
                h5 {
                    class: "mb-2 text-2xl font-bold tracking-tight text-white",
                    "Login"
                }
                form {
                    div {
                        label {
                            r#for: "username",
                            class: "block mb-2 text-sm font-medium text-white",
                            "Username"
                        }
                        input {
                            r#type: "text",
                            id: "username",
                            class: INPUT_CLASS,
                            required: 1,
                            onchange: move |evt| {
                                username.set(evt.value());
                            }
                        }
                    }
                    div {
                        label {
                            r#for: "password",
                            class: "block mb-2 text-sm font-medium text-white",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            id: "password",
                            class: INPUT_CLASS,
                            required: 1,
                            onchange: move |evt| {
                                password.set(evt.value());
                            }
                        }
                    }
                    div {
                        class: "flex justify-end",
                        button {
                            r#type: "button",
                            class: "text-white bg-blue-600 hover:bg-blue-700 focus:ring-4 focus:outline-none focus:ring-blue-800 font-medium rounded-lg text-sm px-4 py-2 text-center m-2",
                            onclick: move |_| {
                                let redirect = redirect.clone();

                                async move {
                                    let req = LoginRequest {
                                        username: username.read().clone(),
                                        password: password.read().clone(),
                                        redirect: redirect.clone(),
                                    };

                                    match api::login(&req).await {
                                        Ok(()) => {
                                            info!("logged in as {}", req.username);

                                            if redirect.is_empty() || !follow_redirect(&redirect) {
                                                navigator.replace(Route::Home);
                                            }
                                        }
                                        Err(e) if ApiError::is_unauthorized(&e) => {
                                            show_toast("Invalid credentials");
                                        }
                                        Err(e) => {
                                            warn!("{:#}", e);
                                            show_toast(format!("{:#}", e));
                                        }
                                    }
                                }
                            },
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
