use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A project as returned by the admin and employee APIs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "super::date")]
    pub start_date: NaiveDate,
    #[serde(with = "super::date")]
    pub end_date: NaiveDate,
    /// URLs of uploaded documents.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Body of `POST /admin/project`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    #[serde(with = "super::date")]
    pub start_date: NaiveDate,
    #[serde(with = "super::date")]
    pub end_date: NaiveDate,
}

/// Answer of `PUT /admin/project/{id}/documents`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DocumentUploadResponse {
    pub project: Project,
}

/// Last path segment of a document URL.
pub fn document_file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_from_backend_json() {
        let project: Project = serde_json::from_str(
            r#"{
                "_id": "p1",
                "name": "Apollo",
                "description": "Moonshot",
                "start_date": "2024-01-15T00:00:00.000Z",
                "end_date": "2024-06-30",
                "documents": ["https://cdn.example.com/docs/plan.pdf"]
            }"#,
        )
        .unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(project.end_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(project.documents.len(), 1);
    }

    #[test]
    fn test_documents_default_to_empty() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p2","name":"N","start_date":"2024-01-01","end_date":"2024-01-02"}"#,
        )
        .unwrap();
        assert!(project.documents.is_empty());
        assert_eq!(project.description, "");
    }

    #[test]
    fn test_new_project_dates_serialize_as_days() {
        let body = serde_json::to_value(NewProject {
            name: "A".into(),
            description: "B".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        })
        .unwrap();
        assert_eq!(body["start_date"], "2024-02-01");
        assert_eq!(body["end_date"], "2024-02-29");
    }

    #[test]
    fn test_document_file_name() {
        assert_eq!(document_file_name("https://x.io/a/b/report.pdf"), "report.pdf");
        assert_eq!(document_file_name("plain.png"), "plain.png");
        assert_eq!(document_file_name("https://x.io/dir/"), "");
    }
}
