use dioxus::prelude::*;

use crate::models::ProxyRoute;

fn flag(on: bool) -> &'static str {
    match on {
        true => "yes",
        false => "no",
    }
}

#[component]
pub fn RouteRow(route: ProxyRoute, on_delete: EventHandler<String>) -> Element {
    let domain = route.domain.clone();

    rsx! {
        tr {
            class: "border-b border-gray-700",
            td {
                class: "px-4 py-2 text-white",
                "{route.domain}"
            }
            td {
                class: "px-4 py-2 text-gray-300 font-mono text-sm",
                "{route.target_path}"
            }
            td {
                class: "px-4 py-2 text-gray-300",
                "{flag(route.is_static)}"
            }
            td {
                class: "px-4 py-2 text-gray-300",
                "{flag(route.enforce_auth)}"
            }
            td {
                class: "px-4 py-2 text-right",
                button {
                    r#type: "button",
                    class: "text-white bg-red-600 hover:bg-red-700 font-medium rounded-lg text-sm px-3 py-1",
                    onclick: move |_| on_delete.call(domain.clone()),
                    "Delete"
                }
            }
        }
    }
}
