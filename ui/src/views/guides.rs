//! How-to guides card grid with the two category tabs.

use dioxus::prelude::*;
use store::{filter_guides, Guide, GuideCategory};

/// List of how-to guides, filtered into the Service Work and
/// Equipment & Maintenance tabs. The filter is recomputed from the full
/// collection on every render; no filtered copy is ever stored.
#[component]
pub fn GuidesView(
    guides: Vec<Guide>,
    guide_tab: GuideCategory,
    can_manage: bool,
    on_select_tab: EventHandler<GuideCategory>,
    on_add: EventHandler<()>,
    on_edit: EventHandler<Guide>,
    on_delete: EventHandler<i64>,
    on_view: EventHandler<Guide>,
) -> Element {
    let filtered = filter_guides(&guides, guide_tab);
    let is_empty = filtered.is_empty();

    let tab_class = |t: GuideCategory| {
        if t == guide_tab {
            "filter-tab active"
        } else {
            "filter-tab"
        }
    };

    rsx! {
        div {
            class: "view-heading",
            div {
                h2 { "How-To Guides" }
                p { "Step-by-step procedures" }
            }
            if can_manage {
                button {
                    class: "primary",
                    onclick: move |_| on_add.call(()),
                    "+ Add Guide"
                }
            }
        }

        div {
            class: "filter-tabs",
            button {
                class: tab_class(GuideCategory::Service),
                onclick: move |_| on_select_tab.call(GuideCategory::Service),
                "🏡 Service Work"
            }
            button {
                class: tab_class(GuideCategory::Maintenance),
                onclick: move |_| on_select_tab.call(GuideCategory::Maintenance),
                "🔧 Equipment & Maintenance"
            }
        }

        div {
            class: "card-grid",
            for guide in filtered {
                GuideCard {
                    key: "{guide.id}",
                    guide: guide,
                    can_manage: can_manage,
                    on_edit: on_edit,
                    on_delete: on_delete,
                    on_view: on_view,
                }
            }
        }

        if is_empty {
            div {
                class: "empty-state",
                p { "No guides yet. Add your first one!" }
            }
        }
    }
}

#[component]
fn GuideCard(
    guide: Guide,
    can_manage: bool,
    on_edit: EventHandler<Guide>,
    on_delete: EventHandler<i64>,
    on_view: EventHandler<Guide>,
) -> Element {
    let id = guide.id;
    let view_item = guide.clone();
    let edit_item = guide.clone();

    rsx! {
        div {
            class: "content-card guide-card",
            onclick: move |_| on_view.call(view_item.clone()),

            div {
                class: "card-top",
                span { class: "category-badge guide-badge", "{guide.category}" }
                if can_manage {
                    div {
                        class: "card-actions",
                        button {
                            class: "icon-btn edit",
                            onclick: move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                on_edit.call(edit_item.clone());
                            },
                            "Edit"
                        }
                        button {
                            class: "icon-btn delete",
                            onclick: move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                on_delete.call(id);
                            },
                            "Delete"
                        }
                    }
                }
            }
            h3 { "{guide.title}" }
            p { class: "card-preview", "{guide.content}" }
        }
    }
}
