//! # API crate: typed REST client for the resource planning backend
//!
//! Everything the console knows about the backend lives here: the wire models,
//! the client that calls the endpoints, and the validation rules applied to
//! forms before anything is sent.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: bearer auth, error normalisation, one method per endpoint |
//! | [`error`] | [`ApiError`]: unauthorized, server, network, decode, validation failures |
//! | [`forms`] | Form drafts, [`ValidationError`], upload limits |
//! | [`models`] | Users, projects, resource assignments, workload summaries |
//!
//! ## Endpoints
//!
//! - **Auth**: `POST /auth/login`
//! - **Admin users**: `GET /admin/users`, `POST /admin/user`, `DELETE /admin/user/{id}`
//! - **Admin projects**: `GET /admin/projects`, `POST /admin/project`,
//!   `GET /admin/project/{id}/resources`, `POST /admin/project/{id}/resource`,
//!   `PUT /admin/project/{id}/documents`
//! - **Employee**: `GET /user/projects`, `GET /user/project/{id}`,
//!   `GET /user/project/{id}/summary`

pub mod client;
pub mod error;
pub mod forms;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use forms::{
    DocumentUpload, LoginDraft, ProjectDraft, ResourceDraft, UserDraft, ValidationError,
};
pub use models::{
    NewProject, NewResource, NewUser, Project, ResourceAssignment, Role, User, WorkloadSummary,
};

pub use store::{ClientConfig, Session};
