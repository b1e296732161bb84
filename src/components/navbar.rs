use dioxus::prelude::*;

use crate::route::Route;

fn label(route: &Route) -> &'static str {
    match route {
        Route::Home => "Routes",
        Route::AddRoute => "Add route",
        Route::Login { .. } => "Login",
        Route::PageNotFound { .. } => "",
    }
}

#[component]
pub fn NavBar() -> Element {
    let current = use_route::<Route>();

    // login is reached through redirects, not the menu
    let links = Route::declared()
        .into_iter()
        .filter(|route| !matches!(route, Route::Login { .. }))
        .map(|route| {
            let class = match route == current {
                true => "bg-gray-700",
                _ => "",
            };

            (label(&route), route, class)
        })
        .collect::<Vec<_>>();

    rsx! {
        nav {
            class: "bg-gray-800 border-b border-gray-700",
            div {
                class: "flex items-center gap-6 px-4 py-3",
                span {
                    class: "text-xl font-semibold text-white",
                    "Latios"
                }
                ul {
                    class: "flex gap-2 font-medium",
                    for (text, to, class) in links {
                        li {
                            Link {
                                class: "block p-2 rounded-lg text-white hover:bg-gray-600 {class}",
                                to: to,
                                "{text}"
                            }
                        }
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
