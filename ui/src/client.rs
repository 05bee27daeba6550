//! Shared client and token-store constructors for all platforms.
//!
//! Returns the platform-appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::WebTokenStore`]
//! - **Desktop** (native): filesystem via [`store::FileTokenStore`]

/// Create an API client for the configured backend, carrying the session
/// token when one is available.
pub fn make_client(token: Option<&str>) -> api::Client {
    let client = api::Client::new(api::base_url());
    match token {
        Some(token) => client.with_token(token),
        None => client,
    }
}

/// Create a platform-appropriate token store.
pub fn make_token_store() -> impl store::TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebTokenStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::FileTokenStore::in_data_dir()
    }
}
