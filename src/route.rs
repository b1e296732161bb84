use std::fmt::{self, Display};

use dioxus::prelude::*;
use url::form_urlencoded;

use crate::{
    components::navbar::NavBar,
    pages::{add_route::AddRoute, home::Home, login::Login, not_found::PageNotFound},
};

/// Client-side route table. Variant order is matching priority, so the
/// catch-all has to stay last.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home,
        #[route("/add-route")]
        AddRoute,
        #[route("/login?:..query")]
        Login { query: LoginQuery },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

/// Query of the login page. The proxy's auth middleware sends users here with
/// `?redirect=<escaped original url>`, and that url has its own query, so the
/// raw string is split on `&` before anything is decoded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginQuery {
    pub redirect: String,
}

impl FromQuery for LoginQuery {
    fn from_query(query: &str) -> Self {
        let redirect = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == "redirect")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        Self { redirect }
    }
}

impl Display for LoginQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.redirect.is_empty() {
            return Ok(());
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("redirect", &self.redirect)
            .finish();

        write!(f, "{}", query)
    }
}

impl Route {
    /// Declared entries in table order, without the not-found fallback.
    pub fn declared() -> [Route; 3] {
        [
            Route::Home,
            Route::AddRoute,
            Route::Login {
                query: LoginQuery::default(),
            },
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::AddRoute => "addRoute",
            Route::Login { .. } => "login",
            Route::PageNotFound { .. } => "notFound",
        }
    }

    pub fn login_then(redirect: impl Into<String>) -> Self {
        Route::Login {
            query: LoginQuery {
                redirect: redirect.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn path_of(route: &Route) -> String {
        let full = route.to_string();
        full.split('?').next().unwrap_or_default().to_string()
    }

    fn resolve(path: &str) -> Option<Route> {
        path.parse::<Route>().ok()
    }

    #[test]
    fn declared_paths_resolve_to_their_views() {
        assert_eq!(resolve("/"), Some(Route::Home));
        assert_eq!(resolve("/add-route"), Some(Route::AddRoute));
        assert_eq!(
            resolve("/login"),
            Some(Route::login_then(""))
        );
    }

    #[test]
    fn every_declared_entry_resolves_to_itself() {
        for route in Route::declared() {
            let path = path_of(&route);
            let resolved = resolve(&path).map(|r| r.name());

            assert_eq!(resolved, Some(route.name()), "path {path}");
        }
    }

    #[test]
    fn declared_table_order() {
        let paths = Route::declared()
            .iter()
            .map(path_of)
            .collect::<Vec<_>>();

        assert_eq!(paths, vec!["/", "/add-route", "/login"]);
    }

    #[test]
    fn paths_and_names_are_unique() {
        let declared = Route::declared();

        let paths = declared.iter().map(path_of).collect::<HashSet<_>>();
        let names = declared.iter().map(Route::name).collect::<HashSet<_>>();

        assert_eq!(paths.len(), declared.len());
        assert_eq!(names.len(), declared.len());
        assert!(!names.contains(Route::PageNotFound { segments: vec![] }.name()));
    }

    #[test]
    fn unknown_path_falls_through_to_not_found() {
        assert_eq!(
            resolve("/unknown"),
            Some(Route::PageNotFound {
                segments: vec!["unknown".to_string()]
            })
        );

        match resolve("/settings/tls") {
            Some(Route::PageNotFound { segments }) => assert_eq!(segments, vec!["settings", "tls"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn login_keeps_redirect_query() {
        assert_eq!(
            resolve("/login?redirect=dashboard"),
            Some(Route::login_then("dashboard"))
        );
    }

    #[test]
    fn login_redirect_keeps_its_own_query() {
        // as produced by url.QueryEscape("/app?x=1&y=2") on the proxy
        assert_eq!(
            resolve("/login?redirect=%2Fapp%3Fx%3D1%26y%3D2"),
            Some(Route::login_then("/app?x=1&y=2"))
        );
        assert_eq!(
            resolve("/login?redirect=https%3A%2F%2Fgit.example.com%2Fa+b%3Fq%3D1%26r%3D2"),
            Some(Route::login_then("https://git.example.com/a b?q=1&r=2"))
        );
    }

    #[test]
    fn login_redirect_round_trips() {
        let route = Route::login_then("/app?x=1&y=2");

        assert_eq!(resolve(&route.to_string()), Some(route));
    }

    #[test]
    fn login_query_ignores_other_keys() {
        assert_eq!(
            LoginQuery::from_query("lang=en&redirect=%2Fhome"),
            LoginQuery {
                redirect: "/home".to_string()
            }
        );
        assert_eq!(LoginQuery::from_query(""), LoginQuery::default());
        assert_eq!(LoginQuery::default().to_string(), "");
    }

    #[test]
    fn resolving_twice_is_equivalent() {
        let first = ["/", "/add-route", "/login", "/nope"].map(resolve);
        let second = ["/", "/add-route", "/login", "/nope"].map(resolve);

        assert_eq!(first, second);
    }
}
