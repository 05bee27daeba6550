use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Login window content.
#[component]
pub fn Login() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // A token restored from disk skips the login form entirely.
    if !auth().loading && auth().logged_in() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}
