//! # Resource assignments
//!
//! An assignment links a user to a project with a designation and an
//! allocation percentage. The backend may populate the `user_id` and
//! `project_id` references with embedded documents or leave them as bare ids,
//! so both references are modelled as untagged enums. A reference to a user
//! that no longer exists comes back as `null`.

use serde::{Deserialize, Serialize};

/// Embedded user document inside an assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Populated(UserSummary),
    Id(String),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            UserRef::Populated(user) => &user.id,
            UserRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            UserRef::Populated(user) => user.name.as_deref().filter(|n| !n.is_empty()),
            UserRef::Id(_) => None,
        }
    }
}

/// Embedded project document inside an assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectRef {
    Populated(ProjectSummary),
    Id(String),
}

impl ProjectRef {
    pub fn id(&self) -> &str {
        match self {
            ProjectRef::Populated(project) => &project.id,
            ProjectRef::Id(id) => id,
        }
    }
}

/// A user's allocation on a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceAssignment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "project_id", default)]
    pub project: Option<ProjectRef>,
    #[serde(rename = "user_id", default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub designation: String,
    pub allocation_percentage: f64,
}

impl ResourceAssignment {
    /// Name shown in the resources table, "N/A" when the user is unknown.
    pub fn user_display(&self) -> &str {
        self.user.as_ref().and_then(UserRef::name).unwrap_or("N/A")
    }
}

/// Body of `POST /admin/project/{id}/resource`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewResource {
    pub user_id: String,
    pub designation: String,
    pub allocation_percentage: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_user_reference() {
        let assignment: ResourceAssignment = serde_json::from_str(
            r#"{
                "_id": "r1",
                "project_id": "p1",
                "user_id": {"_id": "u1", "name": "Ada", "email": "ada@x.io"},
                "designation": "Engineer",
                "allocation_percentage": 50
            }"#,
        )
        .unwrap();
        assert_eq!(assignment.user_display(), "Ada");
        assert_eq!(assignment.user.as_ref().map(UserRef::id), Some("u1"));
        assert_eq!(assignment.project.as_ref().map(ProjectRef::id), Some("p1"));
        assert_eq!(assignment.allocation_percentage, 50.0);
    }

    #[test]
    fn test_bare_or_missing_user_shows_na() {
        let bare: ResourceAssignment = serde_json::from_str(
            r#"{"_id":"r2","user_id":"u9","designation":"QA","allocation_percentage":20}"#,
        )
        .unwrap();
        assert_eq!(bare.user_display(), "N/A");

        let deleted: ResourceAssignment = serde_json::from_str(
            r#"{"_id":"r3","user_id":null,"designation":"QA","allocation_percentage":20}"#,
        )
        .unwrap();
        assert!(deleted.user.is_none());
        assert_eq!(deleted.user_display(), "N/A");
    }

    #[test]
    fn test_populated_user_without_name_shows_na() {
        let list: Vec<ResourceAssignment> = serde_json::from_str(
            r#"[{"_id":"r1","user_id":{"_id":"u1","email":"a@x"},"designation":"QA","allocation_percentage":10}]"#,
        )
        .unwrap();
        assert_eq!(list[0].user.as_ref().map(UserRef::id), Some("u1"));
        assert_eq!(list[0].user_display(), "N/A");
    }
}
