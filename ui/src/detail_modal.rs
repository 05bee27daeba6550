use dioxus::prelude::*;

/// Read-only detail view for one standard or guide: category badge, title,
/// and the full content preformatted. `accent` picks the header color
/// (`"standard-accent"` or `"guide-accent"`).
#[component]
pub fn DetailModal(
    title: String,
    category: String,
    content: String,
    accent: String,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-header {accent}",
            div {
                span { class: "category-badge", "{category}" }
                h3 { "{title}" }
            }
            button {
                class: "modal-close",
                onclick: move |_| on_close.call(()),
                "×"
            }
        }
        div {
            class: "modal-body",
            pre { class: "detail-content", "{content}" }
        }
    }
}
