//! # REST client for the resource planning backend
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] together with the backend base URL
//! and the persisted [`Session`]. Every call goes through [`ApiClient::execute`],
//! which:
//!
//! 1. attaches `Authorization: Bearer <token>` when a token is stored,
//! 2. logs method, path and status,
//! 3. on `401 Unauthorized` clears the stored token and role,
//! 4. turns any other non-2xx answer into [`ApiError::Server`], carrying the
//!    `msg` field of the error body when the backend sent one.
//!
//! JSON bodies are attached with [`RequestBuilder::json`], so
//! `Content-Type: application/json` only ever accompanies requests that carry
//! JSON. GET and DELETE requests have no body; uploads are multipart.
//!
//! On `wasm32` reqwest runs on top of the browser `fetch` API, so the same
//! client serves the web and desktop builds.

use reqwest::{multipart, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{ClientConfig, Session};

use crate::error::ApiError;
use crate::forms::DocumentUpload;
use crate::models::{
    DocumentUploadResponse, LoginRequest, LoginResponse, NewProject, NewResource, NewUser,
    Project, ResourceAssignment, User, WorkloadSummary,
};

/// Error body shape used by the backend. Some routes say `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg.or(self.message).filter(|m| !m.trim().is_empty())
    }
}

/// Whether a 401 on this request means the stored session is stale.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Auth {
    Bearer,
    Anonymous,
}

/// Typed access to every endpoint the console uses.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: store::config::normalize_base_url(base_url),
            session,
        }
    }

    pub fn from_config(config: &ClientConfig, session: Session) -> Self {
        Self::new(&config.api.base_url, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, auth: Auth) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match (auth, self.session.token()) {
            (Auth::Bearer, Some(token)) => builder.bearer_auth(token),
            _ => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder, auth: Auth) -> Result<Response, ApiError> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%method, path = %path, "request failed: {e}");
                return Err(e.into());
            }
        };

        let status = response.status();
        tracing::debug!(%method, path = %path, status = status.as_u16(), "api call");
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message);

        if status == StatusCode::UNAUTHORIZED && auth == Auth::Bearer {
            tracing::info!(path = %path, "backend rejected the session, clearing token");
            self.session.sign_out();
            return Err(ApiError::Unauthorized { message });
        }

        tracing::warn!(%method, path = %path, status = status.as_u16(), ?message, "api error");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .execute(self.request(Method::GET, path, Auth::Bearer), Auth::Bearer)
            .await?;
        Ok(response.json().await?)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let builder = self.request(method, path, Auth::Bearer).json(body);
        self.execute(builder, Auth::Bearer).await
    }

    /// Exchange credentials for a token and persist it with the reported role.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/auth/login", Auth::Anonymous)
            .json(credentials);
        let response = self.execute(builder, Auth::Anonymous).await?;
        let login: LoginResponse = response.json().await?;
        self.session.sign_in(&login.token, login.role.as_str())?;
        tracing::info!(role = %login.role, "signed in");
        Ok(login)
    }

    /// Drop the stored token. The backend keeps no session state to clear.
    pub fn logout(&self) {
        self.session.sign_out();
        tracing::info!("signed out");
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/admin/users").await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/admin/user", user).await?;
        Ok(())
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let path = format!("/admin/user/{user_id}");
        self.execute(self.request(Method::DELETE, &path, Auth::Bearer), Auth::Bearer)
            .await?;
        Ok(())
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/admin/projects").await
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/admin/project", project).await?;
        Ok(())
    }

    pub async fn project_resources(
        &self,
        project_id: &str,
    ) -> Result<Vec<ResourceAssignment>, ApiError> {
        self.get_json(&format!("/admin/project/{project_id}/resources"))
            .await
    }

    pub async fn assign_resource(
        &self,
        project_id: &str,
        resource: &NewResource,
    ) -> Result<(), ApiError> {
        let path = format!("/admin/project/{project_id}/resource");
        self.send_json(Method::POST, &path, resource).await?;
        Ok(())
    }

    /// Upload one document and return the project with its updated list.
    pub async fn upload_document(
        &self,
        project_id: &str,
        upload: DocumentUpload,
    ) -> Result<Project, ApiError> {
        let mut part = multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = multipart::Form::new().part("file", part);

        let path = format!("/admin/project/{project_id}/documents");
        let builder = self.request(Method::PUT, &path, Auth::Bearer).multipart(form);
        let response = self.execute(builder, Auth::Bearer).await?;
        let body: DocumentUploadResponse = response.json().await?;
        Ok(body.project)
    }

    pub async fn my_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/user/projects").await
    }

    pub async fn my_project(&self, project_id: &str) -> Result<Project, ApiError> {
        self.get_json(&format!("/user/project/{project_id}")).await
    }

    pub async fn workload_summary(&self, project_id: &str) -> Result<WorkloadSummary, ApiError> {
        self.get_json(&format!("/user/project/{project_id}/summary"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;
    use store::MemoryTokenStore;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.base_url(), Session::new(MemoryTokenStore::new()))
    }

    fn signed_in(server: &MockServer) -> ApiClient {
        let client = client_for(server);
        client.session().sign_in("tok-123", "admin").unwrap();
        client
    }

    fn project_json(id: &str) -> serde_json::Value {
        json!({
            "_id": id,
            "name": "Apollo",
            "description": "Moonshot",
            "start_date": "2024-01-01T00:00:00.000Z",
            "end_date": "2024-12-31T00:00:00.000Z",
            "documents": []
        })
    }

    #[tokio::test]
    async fn test_login_stores_token_and_role() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/login")
                    .header("content-type", "application/json")
                    .json_body(json!({"email": "ada@x.io", "password": "pw"}));
                then.status(200)
                    .json_body(json!({"token": "tok-abc", "role": "admin"}));
            })
            .await;

        let client = client_for(&server);
        let login = client
            .login(&LoginRequest {
                email: "ada@x.io".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(login.role, Role::Admin);
        assert_eq!(client.session().token().as_deref(), Some("tok-abc"));
        assert_eq!(client.session().role().as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn test_failed_login_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(401).json_body(json!({"msg": "Invalid credentials"}));
            })
            .await;

        let client = client_for(&server);
        let err = client
            .login(&LoginRequest {
                email: "ada@x.io".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!err.is_unauthorized());
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/admin/users")
                    .header("authorization", "Bearer tok-123");
                then.status(200).json_body(json!([
                    {"_id": "u1", "name": "Ada", "email": "ada@x.io", "role": "admin"},
                    {"_id": "u2", "name": "Bob", "email": "bob@x.io", "role": "user"}
                ]));
            })
            .await;

        let users = signed_in(&server).list_users().await.unwrap();

        mock.assert_async().await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].role, Role::User);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user/projects");
                then.status(401).json_body(json!({"msg": "Token expired"}));
            })
            .await;

        let client = signed_in(&server);
        let err = client.my_projects().await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: Some("Token expired".into())
            }
        );
        assert!(client.session().token().is_none());
        assert!(client.session().role().is_none());
    }

    #[tokio::test]
    async fn test_error_body_without_msg_falls_back() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/projects");
                then.status(500).body("<html>oops</html>");
            })
            .await;

        let client = signed_in(&server);
        let err = client.list_projects().await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.to_string(), "Request failed");
        // Only a 401 signs the user out
        assert!(client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_create_user_posts_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/admin/user")
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "name": "Eve",
                        "email": "eve@x.io",
                        "password": "pw",
                        "role": "user"
                    }));
                then.status(201).json_body(json!({"msg": "User created"}));
            })
            .await;

        signed_in(&server)
            .create_user(&NewUser {
                name: "Eve".into(),
                email: "eve@x.io".into(),
                password: "pw".into(),
                role: Role::User,
            })
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_user_conflict_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/user");
                then.status(400).json_body(json!({"msg": "User already exists"}));
            })
            .await;

        let err = signed_in(&server)
            .create_user(&NewUser {
                name: "Eve".into(),
                email: "eve@x.io".into(),
                password: "pw".into(),
                role: Role::User,
            })
            .await
            .unwrap_err();

        assert_eq!(err.user_message("Failed to add user"), "User already exists");
    }

    #[tokio::test]
    async fn test_delete_user_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/admin/user/u42")
                    .header("authorization", "Bearer tok-123");
                then.status(200).json_body(json!({"msg": "deleted"}));
            })
            .await;

        signed_in(&server).delete_user("u42").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bodyless_requests_carry_no_content_type() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/admin/projects")
                    .header_missing("content-type");
                then.status(200).json_body(json!([project_json("p1")]));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/admin/user/u7")
                    .header_missing("content-type");
                then.status(200).json_body(json!({"msg": "deleted"}));
            })
            .await;
        let summary = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/user/project/p1/summary")
                    .header_missing("content-type");
                then.status(200)
                    .json_body(json!({"totalAlloc": 80, "availability": 20, "duration": 30}));
            })
            .await;

        let client = signed_in(&server);
        assert_eq!(client.list_projects().await.unwrap().len(), 1);
        client.delete_user("u7").await.unwrap();
        assert_eq!(client.workload_summary("p1").await.unwrap().availability, 20.0);

        list.assert_async().await;
        delete.assert_async().await;
        summary.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_project_sends_calendar_days() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/project").json_body(json!({
                    "name": "Apollo",
                    "description": "Moonshot",
                    "start_date": "2024-01-01",
                    "end_date": "2024-12-31"
                }));
                then.status(201).json_body(project_json("p1"));
            })
            .await;

        signed_in(&server)
            .create_project(&NewProject {
                name: "Apollo".into(),
                description: "Moonshot".into(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_resources_list_and_assign() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/project/p1/resources");
                then.status(200).json_body(json!([{
                    "_id": "r1",
                    "project_id": "p1",
                    "user_id": {"_id": "u1", "name": "Ada"},
                    "designation": "Lead",
                    "allocation_percentage": 60
                }]));
            })
            .await;
        let assign = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/admin/project/p1/resource")
                    .json_body(json!({
                        "user_id": "u2",
                        "designation": "QA",
                        "allocation_percentage": 40
                    }));
                then.status(201).json_body(json!({"msg": "assigned"}));
            })
            .await;

        let client = signed_in(&server);
        let resources = client.project_resources("p1").await.unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].user_display(), "Ada");

        client
            .assign_resource(
                "p1",
                &NewResource {
                    user_id: "u2".into(),
                    designation: "QA".into(),
                    allocation_percentage: 40,
                },
            )
            .await
            .unwrap();

        list.assert_async().await;
        assign.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_document_returns_updated_project() {
        let server = MockServer::start_async().await;
        let mut updated = project_json("p1");
        updated["documents"] = json!(["https://files.example.com/p1/plan.pdf"]);
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/admin/project/p1/documents")
                    .header("authorization", "Bearer tok-123")
                    .header_matches("content-type", "^multipart/form-data; boundary=");
                then.status(200)
                    .json_body(json!({"msg": "uploaded", "project": updated.clone()}));
            })
            .await;

        let upload = DocumentUpload::new(
            "plan.pdf",
            Some("application/pdf".into()),
            b"%PDF-1.4".to_vec(),
        )
        .unwrap();
        let project = signed_in(&server)
            .upload_document("p1", upload)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(project.documents, vec!["https://files.example.com/p1/plan.pdf"]);
    }

    #[tokio::test]
    async fn test_employee_project_and_summary() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/project/p7");
                then.status(200).json_body(project_json("p7"));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/project/p7/summary");
                then.status(200)
                    .json_body(json!({"totalAlloc": 75, "availability": 25, "duration": 365}));
            })
            .await;

        // Base URLs with a path prefix and a trailing slash are normalised
        let client = ApiClient::new(
            &format!("{}/api/", server.base_url()),
            Session::new(MemoryTokenStore::new()),
        );
        client.session().sign_in("tok", "user").unwrap();

        let project = client.my_project("p7").await.unwrap();
        let summary = client.workload_summary("p7").await.unwrap();

        assert_eq!(project.id, "p7");
        assert_eq!(summary.total_alloc, 75.0);
        assert_eq!(summary.availability, 25.0);
        assert_eq!(summary.duration, 365.0);
    }

    #[tokio::test]
    async fn test_network_failure() {
        let client = ApiClient::new("http://127.0.0.1:9", Session::new(MemoryTokenStore::new()));
        let err = client.my_projects().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
