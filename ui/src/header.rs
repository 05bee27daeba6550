use dioxus::prelude::*;
use store::UserInfo;

use crate::state::DashboardTab;
use crate::LogoutButton;

/// Dashboard header: brand, signed-in user, logout, and the
/// Standards / How-To Guides navigation.
#[component]
pub fn AppHeader(
    user: UserInfo,
    tab: DashboardTab,
    on_select_tab: EventHandler<DashboardTab>,
) -> Element {
    let role = user.role.as_str();
    let tab_class = |t: DashboardTab| {
        if t == tab {
            "nav-tab active"
        } else {
            "nav-tab"
        }
    };

    rsx! {
        header {
            class: "app-header",
            div {
                class: "header-row",
                div {
                    class: "brand",
                    span { class: "brand-mark", "🏡" }
                    div {
                        h1 { "Lawn Care Hub" }
                        p { class: "user-line", "{user.name} • {role}" }
                    }
                }
                LogoutButton { class: "logout-btn" }
            }

            nav {
                class: "view-nav",
                button {
                    class: tab_class(DashboardTab::Standards),
                    onclick: move |_| on_select_tab.call(DashboardTab::Standards),
                    "Standards"
                }
                button {
                    class: tab_class(DashboardTab::Guides),
                    onclick: move |_| on_select_tab.call(DashboardTab::Guides),
                    "How-To Guides"
                }
            }
        }
    }
}
