//! User-management API client.
//!
//! Every function performs network IO and is meant to be awaited from a
//! `Command`; callers map results into compute updates.

use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::http::{Client, RequestBuilder, Response};
use crate::{
    BusinessConfig, CreateUserRequest, Department, ResetPasswordRequest, UpdateUserRequest, User,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text worth showing to the operator.
    ///
    /// `None` only for a status error whose body carried no explanation.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Transport(message) | Self::Decode(message) | Self::Encode(message) => {
                Some(message.as_str()).filter(|message| !message.trim().is_empty())
            }
        }
    }

    fn from_response(response: &Response) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
            detail: Option<String>,
            error: Option<String>,
        }

        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message.or(body.detail).or(body.error))
            .filter(|message| !message.trim().is_empty());

        Self::Status {
            status: response.status,
            message,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn url(config: &BusinessConfig, path: &str) -> String {
    format!("{}{path}", config.api_url())
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.message))?;

    if response.is_success() {
        Ok(response)
    } else {
        debug!("API error response: status {}", response.status);
        Err(ApiError::from_response(&response))
    }
}

fn decode<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    response.json().map_err(|e| ApiError::Decode(e.to_string()))
}

fn with_body<T: serde::Serialize>(request: RequestBuilder, body: &T) -> ApiResult<RequestBuilder> {
    request.json(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// GET `/api/users`
pub async fn get_users(config: &BusinessConfig) -> ApiResult<Vec<User>> {
    let request = Client::get(url(config, "/users")).bearer(config.token());
    decode(&send(request).await?)
}

/// GET `/api/departments`
pub async fn get_departments(config: &BusinessConfig) -> ApiResult<Vec<Department>> {
    let request = Client::get(url(config, "/departments")).bearer(config.token());
    decode(&send(request).await?)
}

/// POST `/api/users`
pub async fn create_user(config: &BusinessConfig, body: &CreateUserRequest) -> ApiResult<()> {
    let request = with_body(
        Client::post(url(config, "/users")).bearer(config.token()),
        body,
    )?;
    send(request).await.map(drop)
}

/// PUT `/api/users/{user_id}`
pub async fn update_user(
    config: &BusinessConfig,
    user_id: i64,
    body: &UpdateUserRequest,
) -> ApiResult<()> {
    let request = with_body(
        Client::put(url(config, &format!("/users/{user_id}"))).bearer(config.token()),
        body,
    )?;
    send(request).await.map(drop)
}

/// POST `/api/users/{user_id}/reset-password`
pub async fn reset_password(
    config: &BusinessConfig,
    user_id: i64,
    body: &ResetPasswordRequest,
) -> ApiResult<()> {
    let request = with_body(
        Client::post(url(config, &format!("/users/{user_id}/reset-password")))
            .bearer(config.token()),
        body,
    )?;
    send(request).await.map(drop)
}

/// DELETE `/api/users/{user_id}`
pub async fn delete_user(config: &BusinessConfig, user_id: i64) -> ApiResult<()> {
    let request =
        Client::delete(url(config, &format!("/users/{user_id}"))).bearer(config.token());
    send(request).await.map(drop)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::Role;

    fn error_response(status: u16, body: serde_json::Value) -> Response {
        Response {
            status,
            headers: HashMap::new(),
            body: serde_json::to_vec(&body).expect("serializable"),
        }
    }

    #[test]
    fn status_message_prefers_message_then_detail_then_error() {
        let err = ApiError::from_response(&error_response(
            409,
            serde_json::json!({ "message": "duplicate", "error": "Conflict" }),
        ));
        assert_eq!(err.user_message(), Some("duplicate"));

        let err = ApiError::from_response(&error_response(
            422,
            serde_json::json!({ "detail": "emp_no is taken" }),
        ));
        assert_eq!(err.user_message(), Some("emp_no is taken"));

        let err = ApiError::from_response(&error_response(
            500,
            serde_json::json!({ "error": "Internal Server Error" }),
        ));
        assert_eq!(err.user_message(), Some("Internal Server Error"));
    }

    #[test]
    fn status_without_usable_body_has_no_message() {
        let err = ApiError::from_response(&Response {
            status: 502,
            headers: HashMap::new(),
            body: b"<html>bad gateway</html>".to_vec(),
        });
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: None
            }
        );
        assert_eq!(err.user_message(), None);
    }

    #[test]
    fn transport_and_decode_errors_keep_their_text() {
        assert_eq!(
            ApiError::Transport("connection refused".into()).user_message(),
            Some("connection refused")
        );
        assert_eq!(
            ApiError::Decode("expected value at line 1".into()).user_message(),
            Some("expected value at line 1")
        );
        assert_eq!(ApiError::Transport("  ".into()).user_message(), None);
    }

    #[tokio::test]
    async fn get_users_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(header("authorization", "Bearer t0ken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "user_id": 1,
                    "emp_no": "E001",
                    "name": "Kim Min",
                    "dept": null,
                    "user_role": "user",
                    "activation": true
                }
            ])))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri()).with_token(Some("t0ken".into()));
        let users = get_users(&config).await.expect("users load");

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Kim Min");
    }

    #[tokio::test]
    async fn update_user_puts_the_body_to_the_user_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/7"))
            .and(body_json(serde_json::json!({
                "name": "Park Ji",
                "dept_id": 2,
                "user_role": "admin",
                "activation": false
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let body = UpdateUserRequest {
            name: "Park Ji".into(),
            dept_id: Some(2),
            user_role: Role::Admin,
            activation: false,
        };

        update_user(&config, 7, &body).await.expect("update succeeds");
    }

    #[tokio::test]
    async fn delete_user_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/3"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(serde_json::json!({ "message": "Cannot delete yourself" })),
            )
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let err = delete_user(&config, 3).await.expect_err("forbidden");

        assert_eq!(err.user_message(), Some("Cannot delete yourself"));
    }

    #[tokio::test]
    async fn malformed_list_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/departments"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let err = get_departments(&config).await.expect_err("invalid body");

        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.user_message().is_some());
    }
}
