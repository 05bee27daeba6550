//! # Domain models and local state for Lawn Care Hub
//!
//! Everything the dashboard keeps on the client lives here:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types for users, standards, and guides, plus the pure guide filter |
//! | [`token`] | Session token persistence (filesystem, `localStorage`, in-memory) |
//! | [`content`] | Full-snapshot collections refreshed wholesale from the backend |
//!
//! The store never talks to the network; the `api` crate populates it and the
//! `ui` crate renders from it.

pub mod content;
pub mod models;
pub mod token;

pub use content::ContentStore;
pub use models::{
    filter_guides, Guide, GuideCategory, ItemDraft, Role, Standard, UserInfo,
};
pub use token::{MemoryTokenStore, TokenStore};

#[cfg(not(target_arch = "wasm32"))]
pub use token::FileTokenStore;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use token::WebTokenStore;
