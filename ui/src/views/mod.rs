//! Shared views wired by the platform launchers.

mod dashboard;
mod guides;
mod login;
mod standards;

pub use dashboard::DashboardView;
pub use guides::GuidesView;
pub use login::LoginView;
pub use standards::StandardsView;
