use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Login page.
#[component]
pub fn Login() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // If a saved session was restored, skip straight to the dashboard.
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
