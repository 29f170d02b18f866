mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod login;
pub use login::LoginView;

mod admin;
pub use admin::{AdminDashboardView, AdminTab};

mod user_dashboard;
pub use user_dashboard::UserDashboardView;
