//! Standards & policies card grid.

use dioxus::prelude::*;
use store::Standard;

/// List of standards. Clicking a card opens the read-only detail; the
/// edit/delete controls (owners only) stop propagation so they never also
/// open it.
#[component]
pub fn StandardsView(
    standards: Vec<Standard>,
    can_manage: bool,
    on_add: EventHandler<()>,
    on_edit: EventHandler<Standard>,
    on_delete: EventHandler<i64>,
    on_view: EventHandler<Standard>,
) -> Element {
    rsx! {
        div {
            class: "view-heading",
            div {
                h2 { "Standards & Policies" }
                p { "What's expected of our team" }
            }
            if can_manage {
                button {
                    class: "primary",
                    onclick: move |_| on_add.call(()),
                    "+ Add Standard"
                }
            }
        }

        div {
            class: "card-grid",
            for standard in standards.iter().cloned() {
                StandardCard {
                    key: "{standard.id}",
                    standard: standard,
                    can_manage: can_manage,
                    on_edit: on_edit,
                    on_delete: on_delete,
                    on_view: on_view,
                }
            }
        }

        if standards.is_empty() {
            div {
                class: "empty-state",
                p { "No standards yet. Add your first one!" }
            }
        }
    }
}

#[component]
fn StandardCard(
    standard: Standard,
    can_manage: bool,
    on_edit: EventHandler<Standard>,
    on_delete: EventHandler<i64>,
    on_view: EventHandler<Standard>,
) -> Element {
    let id = standard.id;
    let view_item = standard.clone();
    let edit_item = standard.clone();

    rsx! {
        div {
            class: "content-card standard-card",
            onclick: move |_| on_view.call(view_item.clone()),

            div {
                class: "card-top",
                span { class: "category-badge standard-badge", "{standard.category}" }
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
            h3 { "{standard.title}" }
            p { class: "card-preview", "{standard.content}" }
        }
    }
}
