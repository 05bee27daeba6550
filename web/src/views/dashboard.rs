use dioxus::prelude::*;
use ui::views::DashboardView;

use crate::Route;

/// Dashboard page. Logout or session expiry lands back on the login route.
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
