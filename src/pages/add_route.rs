use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::{
    api, components::toast::show_toast, models::NewProxyRoute, pages::report, route::Route,
};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 bg-gray-700 border-gray-600 placeholder-gray-400 text-white";

pub fn AddRoute() -> Element {
    let mut domain = use_signal(|| "".to_string());
    let mut target_path = use_signal(|| "".to_string());
    let mut is_static = use_signal(|| false);
    let mut enforce_auth = use_signal(|| true);
    let mut submitting = use_signal(|| false);

    let navigator = use_navigator();

    rsx! {
        div {
            class: "flex w-screen",
            div {
                class: "min-w-sm p-6 border rounded-lg shadow-sm bg-gray-800 border-gray-700 flex-col mx-auto mt-2",
                h5 {
                    class: "mb-2 text-2xl font-bold tracking-tight text-white",
                    "Add route"
                }
                form {
                    div {
                        label {
                            r#for: "domain",
                            class: "block mb-2 text-sm font-medium text-white",
                            "Domain"
                        }
                        input {
                            r#type: "text",
                            id: "domain",
                            placeholder: "app.example.com",
                            class: INPUT_CLASS,
                            required: 1,
                            onchange: move |evt| {
                                domain.set(evt.value());
                            }
                        }
                    }
                    div {
                        label {
                            r#for: "target_path",
                            class: "block mb-2 text-sm font-medium text-white",
                            "Target"
                        }
                        input {
                            r#type: "text",
                            id: "target_path",
                            placeholder: "http://127.0.0.1:8080 or /srv/www",
                            class: INPUT_CLASS,
                            required: 1,
                            onchange: move |evt| {
                                target_path.set(evt.value());
                            }
                        }
                    }
                    div {
                        class: "flex gap-6 my-4",
                        label {
                            class: "flex items-center gap-2 text-sm text-white",
                            input {
                                r#type: "checkbox",
                                checked: is_static(),
                                onchange: move |evt| {
                                    is_static.set(evt.checked());
                                }
                            }
                            "Serve static files"
                        }
                        label {
                            class: "flex items-center gap-2 text-sm text-white",
                            input {
                                r#type: "checkbox",
                                checked: enforce_auth(),
                                onchange: move |evt| {
                                    enforce_auth.set(evt.checked());
                                }
                            }
                            "Require login"
                        }
                    }
                    div {
                        class: "flex flex-wrap justify-between gap-6 align-middle",
                        Link {
                            class: "block text-white text-sm py-2 px-4 underline",
                            to: Route::Home, "Back to routes"
                        },
                        button {
                            r#type: "button",
                            class: "text-white bg-blue-600 hover:bg-blue-700 focus:ring-4 focus:outline-none focus:ring-blue-800 font-medium rounded-lg text-sm px-4 py-2 text-center m-2",
                            disabled: submitting(),
                            onclick: move |_| async move {
                                let form = NewProxyRoute {
                                    domain: domain.read().clone(),
                                    target_path: target_path.read().clone(),
                                    is_static: is_static(),
                                    enforce_auth: enforce_auth(),
                                };

                                let route = match form.validated() {
                                    Ok(route) => route,
                                    Err(e) => {
                                        show_toast(e.to_string());
                                        return;
                                    }
                                };

                                submitting.set(true);
                                let res = api::create_route(&route).await;
                                submitting.set(false);

                                match res {
                                    Ok(()) => {
                                        info!("created route {}", route.domain);
                                        navigator.push(Route::Home);
                                    }
                                    Err(e) => report(navigator, e),
                                }
                            },
                            "Create"
                        }
                    }
                }
            }
        }
    }
}
