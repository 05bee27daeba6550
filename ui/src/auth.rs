//! Authentication context and hooks for the UI.

use api::ApiError;
use dioxus::prelude::*;
use store::{TokenStore, UserInfo};

use crate::client::{make_client, make_token_store};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    /// Bearer token authorizing API calls, restored from the token store.
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// The dashboard is only shown once both the token and the validated
    /// user profile are present.
    pub fn logged_in(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Whether the signed-in user may create, edit, and delete content.
    pub fn is_owner(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_owner())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore a saved session on mount: recover the persisted token, then
    // validate it against the backend.
    let _ = use_resource(move || async move {
        let tokens = make_token_store();
        let Some(token) = tokens.load() else {
            auth_state.set(AuthState {
                token: None,
                user: None,
                loading: false,
            });
            return;
        };

        match make_client(Some(&token)).fetch_current_user().await {
            Ok(user) => auth_state.set(AuthState {
                token: Some(token),
                user: Some(user),
                loading: false,
            }),
            Err(err) if err.is_auth() => {
                // The backend rejected the token: the session is over.
                tokens.clear();
                auth_state.set(AuthState {
                    token: None,
                    user: None,
                    loading: false,
                });
            }
            Err(err) => {
                // Unreachable backend is not a rejection; keep the token so
                // the session resumes once connectivity returns.
                tracing::error!("session restore: {err}");
                auth_state.set(AuthState {
                    token: Some(token),
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Exchange credentials for a session. On success the token is persisted and
/// the auth state swaps to the signed-in user; on failure prior session state
/// is left untouched.
pub async fn login(
    mut auth_state: Signal<AuthState>,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let res = make_client(None).login(&email, &password).await?;
    make_token_store().save(&res.token);
    auth_state.set(AuthState {
        token: Some(res.token),
        user: Some(res.user),
        loading: false,
    });
    Ok(())
}

/// Clear the persisted token and the session. Content collections live in
/// the dashboard view, which unmounts (dropping them) as soon as this state
/// change lands.
pub fn logout(mut auth_state: Signal<AuthState>) {
    make_token_store().clear();
    auth_state.set(AuthState {
        token: None,
        user: None,
        loading: false,
    });
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth_state = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| logout(auth_state),
            "{label}"
        }
    }
}
