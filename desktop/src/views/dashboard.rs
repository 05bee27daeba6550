use dioxus::prelude::*;
use ui::views::DashboardView;

use crate::Route;

/// Dashboard window content. Logout or session expiry swaps back to login.
#[component]
pub fn Dashboard() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading && !auth().logged_in() {
        nav.replace(Route::Login {});
    }

    rsx! {
        DashboardView {}
    }
}
