//! reqwest-backed implementation of the API traits.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use counsel_auth::token_cache::TokenCache;
use counsel_core::config::api::ApiConfig;
use counsel_core::error::{AppError, ErrorKind};
use counsel_core::result::AppResult;
use counsel_core::types::{CounselId, DepartmentId, FacultyId, SearchQuery, StudentId};
use counsel_entity::counsel::{Counsel, Participant};
use counsel_entity::department::Department;
use counsel_entity::stats::{DashboardStats, RecentActivity};
use counsel_entity::user::{Faculty, Student};

use crate::api::{AdminApi, CounselApi};
use crate::dto::request::{
    CreateCounselRequest, CreateDepartmentRequest, CreateFacultyRequest, CreateStudentRequest,
    LoginRequest, UpdateStudentRequest,
};
use crate::dto::response::ApiMessage;
use crate::dto::validation_error;

/// HTTP client for the counseling backend.
///
/// Every request carries the cached bearer token when one exists. A 401
/// response clears the token cache before surfacing an authentication
/// error, which forces the next command through `login`. There is no
/// retry, backoff, or request timeout; calls are one-shot.
#[derive(Debug, Clone)]
pub struct HttpCounselApi {
    /// Underlying reqwest client.
    http: reqwest::Client,
    /// Backend base URL without a trailing slash.
    base_url: String,
    /// Persistent bearer-token storage.
    tokens: TokenCache,
}

impl HttpCounselApi {
    /// Creates a client against the configured backend.
    pub fn new(config: &ApiConfig, tokens: TokenCache) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Returns the token cache this client clears on 401.
    pub fn token_cache(&self) -> &TokenCache {
        &self.tokens
    }

    /// Authenticates against the backend and caches the returned token.
    ///
    /// The backend answers with the raw token string; a JSON-quoted
    /// string is unwrapped for good measure.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<String> {
        request.validate().map_err(validation_error)?;

        let response = self
            .execute(self.http.post(self.url("/login")).json(request))
            .await?;
        let body = response
            .text()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Network, "Failed to read login response", e))?;

        let token = body.trim();
        let token = if token.starts_with('"') {
            serde_json::from_str::<String>(token)?
        } else {
            token.to_string()
        };
        if token.is_empty() {
            return Err(AppError::api("Login succeeded but returned no token"));
        }

        self.tokens.store(&token)?;
        tracing::debug!("stored bearer token for '{}'", request.username);
        Ok(token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the cached bearer token, when present.
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.load() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and maps every failure into [`AppError`].
    async fn execute(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await.map_err(|e| {
            AppError::with_source(ErrorKind::Network, format!("Request failed: {e}"), e)
        })?;

        if response.status().is_success() {
            return Ok(response);
        }
        Err(self.error_from(response).await)
    }

    /// Builds an error from a non-success response.
    ///
    /// 401 additionally clears the token cache: the stored token is
    /// dead and keeping it would loop every future command into the
    /// same failure.
    async fn error_from(&self, response: Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<ApiMessage>()
            .await
            .ok()
            .and_then(|body| body.message);

        if status == StatusCode::UNAUTHORIZED {
            if let Err(e) = self.tokens.clear() {
                tracing::warn!("failed to clear token cache after 401: {e}");
            }
            return AppError::authentication(
                message.unwrap_or_else(|| "Session expired. Please log in again".to_string()),
            );
        }

        let fallback = || format!("Request failed with status {status}");
        match status {
            StatusCode::FORBIDDEN => AppError::authorization(message.unwrap_or_else(fallback)),
            StatusCode::NOT_FOUND => AppError::not_found(message.unwrap_or_else(fallback)),
            StatusCode::CONFLICT => AppError::conflict(message.unwrap_or_else(fallback)),
            _ => AppError::api(message.unwrap_or_else(fallback)),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self
            .execute(self.authorized(self.http.get(self.url(path))))
            .await?;
        Self::read_json(response).await
    }

    async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> AppResult<T> {
        let response = self
            .execute(self.authorized(self.http.get(self.url(path)).query(query)))
            .await?;
        Self::read_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .execute(self.authorized(self.http.post(self.url(path)).json(body)))
            .await?;
        Self::read_json(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .execute(self.authorized(self.http.put(self.url(path)).json(body)))
            .await?;
        Self::read_json(response).await
    }

    /// POST with an empty JSON object body, discarding the response.
    async fn post_empty(&self, path: &str) -> AppResult<()> {
        self.execute(self.authorized(
            self.http.post(self.url(path)).json(&serde_json::json!({})),
        ))
        .await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        self.execute(self.authorized(self.http.delete(self.url(path))))
            .await?;
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Invalid response body: {e}"),
                e,
            )
        })
    }
}

#[async_trait]
impl CounselApi for HttpCounselApi {
    async fn available_counsels(&self) -> AppResult<Vec<Counsel>> {
        self.get_json("/reserve-counsels/all").await
    }

    async fn faculty_counsels(&self, faculty_id: FacultyId) -> AppResult<Vec<Counsel>> {
        self.get_json(&format!("/reserve-counsels/faculty/{faculty_id}"))
            .await
    }

    async fn registered_counsels(&self, student_id: StudentId) -> AppResult<Vec<Counsel>> {
        self.get_json(&format!("/reserve-counsels/registered/student/{student_id}"))
            .await
    }

    async fn counsel_participants(&self, counsel_id: CounselId) -> AppResult<Vec<Participant>> {
        self.get_json(&format!("/reserve-counsels/{counsel_id}/participants"))
            .await
    }

    async fn create_counsel(
        &self,
        faculty_id: FacultyId,
        request: &CreateCounselRequest,
    ) -> AppResult<Counsel> {
        request.validate().map_err(validation_error)?;
        self.post_json(&format!("/reserve-counsels/faculty/{faculty_id}"), request)
            .await
    }

    async fn delete_counsel(&self, counsel_id: CounselId, faculty_id: FacultyId) -> AppResult<()> {
        self.delete(&format!("/reserve-counsels/{counsel_id}/faculty/{faculty_id}"))
            .await
    }

    async fn register_participant(
        &self,
        counsel_id: CounselId,
        student_id: StudentId,
    ) -> AppResult<()> {
        self.post_empty(&format!(
            "/reservecounselparticipant/{counsel_id}/register/{student_id}"
        ))
        .await
    }

    async fn cancel_registration(
        &self,
        counsel_id: CounselId,
        student_id: StudentId,
    ) -> AppResult<()> {
        self.delete(&format!(
            "/reservecounselparticipant/cancelreg/{counsel_id}/{student_id}"
        ))
        .await
    }
}

#[async_trait]
impl AdminApi for HttpCounselApi {
    async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        self.get_json("/admin/dashboard/stats").await
    }

    async fn recent_activities(&self, limit: u32) -> AppResult<Vec<RecentActivity>> {
        self.get_json_with_query("/admin/recent-activities", &[("limit", limit.to_string())])
            .await
    }

    async fn all_students(&self) -> AppResult<Vec<Student>> {
        self.get_json("/admin/allstudents").await
    }

    async fn student(&self, id: StudentId) -> AppResult<Student> {
        self.get_json(&format!("/admin/students/{id}")).await
    }

    async fn create_student(&self, request: &CreateStudentRequest) -> AppResult<Student> {
        request.validate().map_err(validation_error)?;
        self.post_json("/admin/createstudent", request).await
    }

    async fn update_student(
        &self,
        id: StudentId,
        request: &UpdateStudentRequest,
    ) -> AppResult<Student> {
        request.validate().map_err(validation_error)?;
        self.put_json(&format!("/admin/students/{id}"), request)
            .await
    }

    async fn delete_student(&self, id: StudentId) -> AppResult<()> {
        self.delete(&format!("/admin/{id}/deletestudentbyid")).await
    }

    async fn update_user_status(&self, user_id: i64, status: &str) -> AppResult<()> {
        self.execute(self.authorized(
            self.http
                .patch(self.url(&format!("/admin/users/{user_id}/status")))
                .json(&serde_json::json!({ "status": status })),
        ))
        .await?;
        Ok(())
    }

    async fn all_faculty(&self) -> AppResult<Vec<Faculty>> {
        self.get_json("/admin/allfaculties").await
    }

    async fn search_faculty(&self, query: &SearchQuery) -> AppResult<Vec<Faculty>> {
        self.get_json_with_query("/admin/faculty", &query.as_pairs())
            .await
    }

    async fn create_faculty(&self, request: &CreateFacultyRequest) -> AppResult<Faculty> {
        request.validate().map_err(validation_error)?;
        self.post_json("/admin/createfaculty", request).await
    }

    async fn delete_faculty(&self, id: FacultyId) -> AppResult<()> {
        self.delete(&format!("/admin/{id}/deletefaculty")).await
    }

    async fn departments(&self) -> AppResult<Vec<Department>> {
        self.get_json("/department/departmentlist").await
    }

    async fn create_department(&self, request: &CreateDepartmentRequest) -> AppResult<Department> {
        request.validate().map_err(validation_error)?;
        self.post_json("/admin/departments", request).await
    }

    async fn delete_department(&self, id: DepartmentId) -> AppResult<()> {
        self.delete(&format!("/admin/departments/{id}")).await
    }

    async fn department_faculty(&self, id: DepartmentId) -> AppResult<Vec<Faculty>> {
        self.get_json(&format!("/{id}/faculties")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_with_cache(name: &str) -> (HttpCounselApi, TokenCache) {
        let path = std::env::temp_dir()
            .join(format!("counselhub-client-test-{}", std::process::id()))
            .join(name);
        let cache = TokenCache::new(path);
        let _ = cache.clear();
        let config = ApiConfig {
            base_url: "http://localhost:8080".to_string(),
        };
        (HttpCounselApi::new(&config, cache.clone()), cache)
    }

    fn response(status: u16, body: &'static str) -> Response {
        Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .expect("response"),
        )
    }

    #[tokio::test]
    async fn test_401_clears_token_cache() {
        let (api, cache) = api_with_cache("unauthorized");
        cache.store("stale-token").expect("store");

        let err = api
            .error_from(response(401, r#"{"message": "Token expired"}"#))
            .await;

        assert!(err.requires_login());
        assert_eq!(err.message, "Token expired");
        assert_eq!(cache.load(), None);
    }

    #[tokio::test]
    async fn test_conflict_keeps_token_and_server_message() {
        let (api, cache) = api_with_cache("conflict");
        cache.store("live-token").expect("store");

        let err = api
            .error_from(response(409, r#"{"message": "Session is full"}"#))
            .await;

        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Session is full");
        assert_eq!(cache.load().as_deref(), Some("live-token"));
    }

    #[tokio::test]
    async fn test_unreadable_error_body_falls_back_to_status() {
        let (api, _cache) = api_with_cache("fallback");

        let err = api.error_from(response(500, "not json")).await;

        assert_eq!(err.kind, ErrorKind::Api);
        assert!(err.message.contains("500"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/".to_string(),
        };
        let api = HttpCounselApi::new(&config, TokenCache::new("/tmp/unused-token"));
        assert_eq!(api.url("/login"), "http://localhost:8080/login");
    }
}
