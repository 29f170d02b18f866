mod login;
pub use login::Login;

mod require_auth;
pub use require_auth::RequireAuth;

mod dashboards;
pub use dashboards::{AdminDashboard, UserDashboard};

mod not_found;
pub use not_found::NotFound;
