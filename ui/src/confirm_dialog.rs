use dioxus::prelude::*;

/// Explicit confirmation step before a destructive action. The API call only
/// happens from `on_confirm`; cancelling performs nothing.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "confirm-dialog",
            p { "{message}" }
            div {
                class: "form-actions",
                button {
                    class: "danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "Deleting..." } else { "{confirm_label}" }
                }
                button {
                    class: "secondary",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
