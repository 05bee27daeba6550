//! Shared login view with an email/password form.

use dioxus::prelude::*;

use crate::use_auth;

/// Sign-in screen. On success the auth state carries the new session and
/// `on_success` lets the platform navigate to the dashboard.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match crate::login(auth, e, p).await {
                Ok(()) => on_success.call(()),
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-card",
                div {
                    class: "login-brand",
                    span { class: "brand-mark large", "🏡" }
                    h1 { "Lawn Care Hub" }
                    p { "Operations Dashboard" }
                }

                form {
                    class: "login-form",
                    onsubmit: handle_login,

                    div {
                        class: "form-field",
                        label { r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "owner@lawncare.com",
                            value: email(),
                            required: true,
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            required: true,
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    button {
                        class: "primary wide",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "login-hint",
                    "Default: owner@lawncare.com / password123"
                }
            }
        }
    }
}
