//! Data models mirrored from the backend.

pub mod date;
mod project;
mod resource;
mod summary;
mod user;

pub use project::{document_file_name, DocumentUploadResponse, NewProject, Project};
pub use resource::{NewResource, ProjectRef, ProjectSummary, ResourceAssignment, UserRef, UserSummary};
pub use summary::WorkloadSummary;
pub use user::{LoginRequest, LoginResponse, NewUser, Role, User};
