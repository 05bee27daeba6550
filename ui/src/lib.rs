//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod client;
pub use client::{make_client, make_token_store};

mod auth;
pub use auth::{login, logout, use_auth, AuthProvider, AuthState, LogoutButton};

pub mod state;
pub use state::{DashboardTab, DetailState, FormState, PendingDelete, ViewState};

mod header;
pub use header::AppHeader;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod standard_form;
pub use standard_form::StandardForm;

mod guide_form;
pub use guide_form::GuideForm;

mod detail_modal;
pub use detail_modal::DetailModal;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

pub mod views;
