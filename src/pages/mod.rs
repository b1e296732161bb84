use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::{api::ApiError, components::toast::show_toast, route::Route};

pub mod add_route;
pub mod home;
pub mod login;
pub mod not_found;

/// Sends an expired session to the login page, surfaces everything else.
pub fn report(navigator: Navigator, err: anyhow::Error) {
    if ApiError::is_unauthorized(&err) {
        navigator.replace(Route::login_then(""));
        return;
    }

    warn!("{:#}", err);
    show_toast(format!("{:#}", err));
}
