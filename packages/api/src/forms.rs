//! # Form drafts and client-side validation
//!
//! Every form in the console edits a *draft*: plain strings bound to inputs.
//! Submitting calls `validate()`, which either produces the typed request body
//! or a [`ValidationError`] whose text is shown to the user as-is. Nothing is
//! sent to the backend unless validation passes.
//!
//! | Draft | Produces | Rules |
//! |-------|----------|-------|
//! | [`LoginDraft`] | [`LoginRequest`] | email and password present |
//! | [`UserDraft`] | [`NewUser`] | name, email, password present |
//! | [`ProjectDraft`] | [`NewProject`] | all fields present, dates parse, start not after end |
//! | [`ResourceDraft`] | [`NewResource`] | all fields present, allocation an integer in `0..=100` |
//!
//! Document uploads are checked with [`check_document`] before the file is
//! read: at most [`MAX_DOCUMENT_BYTES`], extension in
//! [`ACCEPTED_DOCUMENT_EXTENSIONS`].

use chrono::NaiveDate;

use crate::models::date::{input_value, parse_date};
use crate::models::{LoginRequest, NewProject, NewResource, NewUser, Role};

/// Largest accepted upload (5 MiB).
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// File extensions the backend accepts for project documents.
pub const ACCEPTED_DOCUMENT_EXTENSIONS: [&str; 5] = ["pdf", "doc", "docx", "jpg", "png"];

/// Value for the `accept` attribute of the upload input.
pub const DOCUMENT_ACCEPT: &str = ".pdf,.doc,.docx,.jpg,.png";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter email and password")]
    MissingCredentials,
    #[error("Please fill all user fields")]
    MissingUserFields,
    #[error("Please fill all project fields")]
    MissingProjectFields,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Start date must be before end date")]
    StartAfterEnd,
    #[error("Please fill all resource fields")]
    MissingResourceFields,
    #[error("Allocation percentage must be between 0 and 100")]
    AllocationOutOfRange,
    #[error("Please select a file")]
    MissingFile,
    #[error("File too large (max 5MB)")]
    FileTooLarge,
    #[error("Unsupported file type (allowed: .pdf, .doc, .docx, .jpg, .png)")]
    UnsupportedFileType,
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserDraft {
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        if blank(&self.name) || blank(&self.email) || self.password.is_empty() {
            return Err(ValidationError::MissingUserFields);
        }
        Ok(NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub start_date: String,
    pub end_date: String,
}

impl ProjectDraft {
    /// Empty draft whose start date is `today`.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start_date: input_value(&today),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<NewProject, ValidationError> {
        if blank(&self.name)
            || blank(&self.description)
            || blank(&self.start_date)
            || blank(&self.end_date)
        {
            return Err(ValidationError::MissingProjectFields);
        }
        let start_date = parse_date(&self.start_date)
            .ok_or_else(|| ValidationError::InvalidDate(self.start_date.clone()))?;
        let end_date = parse_date(&self.end_date)
            .ok_or_else(|| ValidationError::InvalidDate(self.end_date.clone()))?;
        if start_date > end_date {
            return Err(ValidationError::StartAfterEnd);
        }
        Ok(NewProject {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            start_date,
            end_date,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceDraft {
    pub user_id: String,
    pub designation: String,
    pub allocation_percentage: String,
}

impl ResourceDraft {
    pub fn validate(&self) -> Result<NewResource, ValidationError> {
        if blank(&self.user_id) || blank(&self.designation) || blank(&self.allocation_percentage) {
            return Err(ValidationError::MissingResourceFields);
        }
        let allocation: i64 = self
            .allocation_percentage
            .trim()
            .parse()
            .map_err(|_| ValidationError::AllocationOutOfRange)?;
        let allocation_percentage =
            u8::try_from(allocation).map_err(|_| ValidationError::AllocationOutOfRange)?;
        if allocation_percentage > 100 {
            return Err(ValidationError::AllocationOutOfRange);
        }
        Ok(NewResource {
            user_id: self.user_id.clone(),
            designation: self.designation.trim().to_string(),
            allocation_percentage,
        })
    }
}

/// Size and type gate applied before a document is read or sent.
pub fn check_document(file_name: &str, size: u64) -> Result<(), ValidationError> {
    if file_name.is_empty() {
        return Err(ValidationError::MissingFile);
    }
    if size > MAX_DOCUMENT_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ACCEPTED_DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ValidationError::UnsupportedFileType);
    }
    Ok(())
}

/// A validated file ready for `PUT /admin/project/{id}/documents`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        check_document(&file_name, bytes.len() as u64)?;
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}
