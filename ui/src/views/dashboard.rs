//! Shared dashboard view.
//!
//! Owns the content snapshots, the view-controller state, and every mutation
//! handler. Each handler awaits its own round-trip, disables its triggering
//! control while the request is outstanding, and on success re-fetches the
//! affected collection wholesale rather than splicing the snapshot locally.

use dioxus::prelude::*;

use store::{ContentStore, Guide, ItemDraft, Standard};

use super::{GuidesView, StandardsView};
use crate::client::make_client;
use crate::state::{DashboardTab, DetailState, FormState, PendingDelete, ViewState};
use crate::{AppHeader, AuthState, ConfirmDialog, DetailModal, GuideForm, ModalOverlay, StandardForm};

async fn refresh_standards(auth: Signal<AuthState>, mut standards: Signal<ContentStore<Standard>>) {
    let Some(token) = auth.peek().token.clone() else {
        return;
    };
    match make_client(Some(&token)).list_standards().await {
        Ok(items) => standards.write().replace_all(items),
        Err(err) if err.is_auth() => crate::logout(auth),
        // Keep the previous snapshot on display.
        Err(err) => tracing::error!("fetching standards: {err}"),
    }
}

async fn refresh_guides(auth: Signal<AuthState>, mut guides: Signal<ContentStore<Guide>>) {
    let Some(token) = auth.peek().token.clone() else {
        return;
    };
    match make_client(Some(&token)).list_guides().await {
        Ok(items) => guides.write().replace_all(items),
        Err(err) if err.is_auth() => crate::logout(auth),
        Err(err) => tracing::error!("fetching guides: {err}"),
    }
}

#[component]
pub fn DashboardView() -> Element {
    let auth = crate::use_auth();
    let standards = use_signal(ContentStore::<Standard>::new);
    let guides = use_signal(ContentStore::<Guide>::new);
    let mut view = use_signal(ViewState::new);
    let mut saving = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);

    // Populate both collections once the session is available.
    let _loader = use_resource(move || async move {
        if auth().token.is_none() {
            return;
        }
        refresh_standards(auth, standards).await;
        refresh_guides(auth, guides).await;
    });

    let handle_save_standard = move |draft: ItemDraft| {
        spawn(async move {
            let Some(token) = auth.peek().token.clone() else {
                return;
            };
            let target = match view.peek().form.clone() {
                FormState::Standard(target) => target,
                _ => return,
            };

            saving.set(true);
            form_error.set(None);
            let client = make_client(Some(&token));
            let result = match &target {
                Some(standard) => client.update_standard(standard.id, &draft).await.map(|_| ()),
                None => client.create_standard(&draft).await.map(|_| ()),
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    view.write().close_form();
                    refresh_standards(auth, standards).await;
                }
                Err(err) if err.is_auth() => crate::logout(auth),
                // Leave the form open so the input is not lost.
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let handle_save_guide = move |draft: ItemDraft| {
        spawn(async move {
            let Some(token) = auth.peek().token.clone() else {
                return;
            };
            let target = match view.peek().form.clone() {
                FormState::Guide(target) => target,
                _ => return,
            };

            saving.set(true);
            form_error.set(None);
            let client = make_client(Some(&token));
            let result = match &target {
                Some(guide) => client.update_guide(guide.id, &draft).await.map(|_| ()),
                None => client.create_guide(&draft).await.map(|_| ()),
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    view.write().close_form();
                    refresh_guides(auth, guides).await;
                }
                Err(err) if err.is_auth() => crate::logout(auth),
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let handle_confirm_delete = move |_| {
        spawn(async move {
            let Some(pending) = view.peek().pending_delete else {
                return;
            };
            let Some(token) = auth.peek().token.clone() else {
                return;
            };

            deleting.set(true);
            let client = make_client(Some(&token));
            let result = match pending {
                PendingDelete::Standard(id) => client.delete_standard(id).await,
                PendingDelete::Guide(id) => client.delete_guide(id).await,
            };
            deleting.set(false);
            view.write().cancel_delete();

            match result {
                Ok(()) => match pending {
                    PendingDelete::Standard(_) => refresh_standards(auth, standards).await,
                    PendingDelete::Guide(_) => refresh_guides(auth, guides).await,
                },
                Err(err) if err.is_auth() => crate::logout(auth),
                // The local collection stays as it was.
                Err(err) => view.write().set_action_error(err.to_string()),
            }
        });
    };

    let Some(user) = auth().user else {
        return rsx! {};
    };
    let can_manage = user.role.is_owner();

    let view_now = view();
    let form_key = match &view_now.form {
        FormState::Standard(Some(s)) => format!("standard-{}", s.id),
        FormState::Standard(None) => "standard-new".to_string(),
        FormState::Guide(Some(g)) => format!("guide-{}", g.id),
        FormState::Guide(None) => "guide-new".to_string(),
        FormState::Closed => String::new(),
    };
    let delete_message = match view_now.pending_delete {
        Some(PendingDelete::Standard(_)) => "Delete this standard?",
        Some(PendingDelete::Guide(_)) | None => "Delete this guide?",
    };

    rsx! {
        div {
            class: "app-shell",

            AppHeader {
                user: user.clone(),
                tab: view_now.tab,
                on_select_tab: move |tab| view.write().show(tab),
            }

            main {
                class: "app-main",

                if let Some(msg) = view_now.action_error.clone() {
                    div {
                        class: "error-banner",
                        span { "{msg}" }
                        button {
                            class: "banner-dismiss",
                            onclick: move |_| view.write().clear_action_error(),
                            "×"
                        }
                    }
                }

                if view_now.tab == DashboardTab::Standards {
                    StandardsView {
                        standards: standards().items().to_vec(),
                        can_manage: can_manage,
                        on_add: move |_| view.write().open_add_standard(),
                        on_edit: move |standard| view.write().open_edit_standard(standard),
                        on_delete: move |id| view.write().request_delete_standard(id),
                        on_view: move |standard| view.write().open_standard_detail(standard),
                    }
                } else {
                    GuidesView {
                        guides: guides().items().to_vec(),
                        guide_tab: view_now.guide_tab,
                        can_manage: can_manage,
                        on_select_tab: move |tab| view.write().set_guide_tab(tab),
                        on_add: move |_| view.write().open_add_guide(),
                        on_edit: move |guide| view.write().open_edit_guide(guide),
                        on_delete: move |id| view.write().request_delete_guide(id),
                        on_view: move |guide| view.write().open_guide_detail(guide),
                    }
                }
            }

            if let FormState::Standard(target) = view_now.form.clone() {
                ModalOverlay {
                    on_close: move |_| {
                        view.write().close_form();
                        form_error.set(None);
                    },
                    StandardForm {
                        key: "{form_key}",
                        standard: target,
                        saving: saving(),
                        error: form_error(),
                        on_save: handle_save_standard,
                        on_close: move |_| {
                            view.write().close_form();
                            form_error.set(None);
                        },
                    }
                }
            }

            if let FormState::Guide(target) = view_now.form.clone() {
                ModalOverlay {
                    on_close: move |_| {
                        view.write().close_form();
                        form_error.set(None);
                    },
                    GuideForm {
                        key: "{form_key}",
                        guide: target,
                        saving: saving(),
                        error: form_error(),
                        on_save: handle_save_guide,
                        on_close: move |_| {
                            view.write().close_form();
                            form_error.set(None);
                        },
                    }
                }
            }

            if let DetailState::Standard(item) = view_now.detail.clone() {
                ModalOverlay {
                    on_close: move |_| view.write().close_detail(),
                    DetailModal {
                        title: item.title,
                        category: item.category,
                        content: item.content,
                        accent: "standard-accent",
                        on_close: move |_| view.write().close_detail(),
                    }
                }
            }

            if let DetailState::Guide(item) = view_now.detail.clone() {
                ModalOverlay {
                    on_close: move |_| view.write().close_detail(),
                    DetailModal {
                        title: item.title,
                        category: item.category,
                        content: item.content,
                        accent: "guide-accent",
                        on_close: move |_| view.write().close_detail(),
                    }
                }
            }

            if view_now.pending_delete.is_some() {
                ModalOverlay {
                    on_close: move |_| view.write().cancel_delete(),
                    ConfirmDialog {
                        message: "{delete_message}",
                        busy: deleting(),
                        on_confirm: handle_confirm_delete,
                        on_cancel: move |_| view.write().cancel_delete(),
                    }
                }
            }
        }
    }
}
