use dioxus::prelude::*;
use store::{Guide, GuideCategory, ItemDraft};

use crate::standard_form::form_notice;

/// Modal form for creating or editing a how-to guide. Unlike the standard
/// form, the category is a two-option select over the recognized
/// [`GuideCategory`] labels, defaulting to Service Work.
#[component]
pub fn GuideForm(
    guide: Option<Guide>,
    saving: bool,
    error: Option<String>,
    on_save: EventHandler<ItemDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let editing = guide.is_some();
    let init = guide.unwrap_or_else(|| Guide {
        id: 0,
        title: String::new(),
        category: GuideCategory::Service.label().to_string(),
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

    let heading = if editing { "Edit Guide" } else { "Add Guide" };

    rsx! {
        div {
            class: "modal-header guide-accent",
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
                label { r#for: "guide-title", "Title" }
                input {
                    id: "guide-title",
                    r#type: "text",
                    value: title(),
                    required: true,
                    oninput: move |evt| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "guide-category", "Category" }
                select {
                    id: "guide-category",
                    value: category(),
                    onchange: move |evt| category.set(evt.value()),
                    for label in GuideCategory::ALL.map(|cat| cat.label()) {
                        option {
                            key: "{label}",
                            value: "{label}",
                            selected: category() == label,
                            "{label}"
                        }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "guide-content", "Content" }
                textarea {
                    id: "guide-content",
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
                    if saving { "Saving..." } else { "Save Guide" }
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
