use dioxus::prelude::*;
use store::{ItemDraft, Standard};

/// The message for the form's error slot. A fresh client-side validation
/// failure outranks the server error from an earlier submit.
pub(crate) fn form_notice<'a>(validation: Option<&'a str>, server: Option<&'a str>) -> Option<&'a str> {
    validation.or(server)
}

/// Modal form for creating or editing a standard. `standard` is the edit
/// target; `None` means "create new". The category is freeform text.
///
/// A failed save is surfaced through `error` while the form (and the user's
/// input) stays open; `saving` disables the submit button so a slow request
/// cannot be submitted twice.
#[component]
pub fn StandardForm(
    standard: Option<Standard>,
    saving: bool,
    error: Option<String>,
    on_save: EventHandler<ItemDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let editing = standard.is_some();
    let init = standard.unwrap_or_else(|| Standard {
        id: 0,
        title: String::new(),
        category: String::new(),
        content: String::new(),
    });

    let mut title = use_signal(move || init.title);
    let mut category = use_signal(move || init.category);
    let mut content = use_signal(move || init.content);
    let mut validation = use_signal(|| Option::<&'static str>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ItemDraft::new(&title(), &category(), &content());
        if let Err(msg) = draft.validate() {
            validation.set(Some(msg));
            return;
        }
        validation.set(None);
        on_save.call(draft);
    };

    let heading = if editing { "Edit Standard" } else { "Add Standard" };

    rsx! {
        div {
            class: "modal-header standard-accent",
            h3 { "{heading}" }
            button {
                class: "modal-close",
                onclick: move |_| on_close.call(()),
                "×"
            }
        }

        form {
            class: "modal-form",
            onsubmit: handle_submit,

            if let Some(msg) = form_notice(validation(), error.as_deref()) {
                div { class: "form-error", "{msg}" }
            }

            div {
                class: "form-field",
                label { r#for: "standard-title", "Title" }
                input {
                    id: "standard-title",
                    r#type: "text",
                    value: title(),
                    required: true,
                    oninput: move |evt| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "standard-category", "Category" }
                input {
                    id: "standard-category",
                    r#type: "text",
                    value: category(),
                    required: true,
                    oninput: move |evt| category.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "standard-content", "Content" }
                textarea {
                    id: "standard-content",
                    value: content(),
                    required: true,
                    oninput: move |evt| content.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving,
                    if saving { "Saving..." } else { "Save Standard" }
                }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::form_notice;

    #[test]
    fn fresh_validation_outranks_a_stale_server_error() {
        assert_eq!(
            form_notice(Some("Title is required"), Some("Title already exists")),
            Some("Title is required")
        );
    }

    #[test]
    fn server_error_shows_once_validation_passes() {
        assert_eq!(
            form_notice(None, Some("Title already exists")),
            Some("Title already exists")
        );
        assert_eq!(form_notice(None, None), None);
    }
}
