//! HTTP implementation of [`StudentGateway`] speaking the `/students` wire
//! contract.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use roster_core::student::{State, Student, StudentInput};
use roster_core::types::DbId;
use roster_core::validation::StudentField;
use serde::Deserialize;

use crate::gateway::{GatewayError, StudentGateway};

/// Gateway client over HTTP.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

/// Error envelope produced by the API: `{ "error", "code", "field"? }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
    field: Option<String>,
}

impl HttpGateway {
    /// Create a gateway against a base URL such as `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a non-success response into the matching [`GatewayError`].
    async fn into_error(response: Response) -> GatewayError {
        let status = response.status();
        let body: Option<ErrorBody> = response.json().await.ok();

        match (status, body) {
            (StatusCode::NOT_FOUND, body) => GatewayError::NotFound(
                body.map(|b| b.error).unwrap_or_else(|| "not found".into()),
            ),
            (StatusCode::BAD_REQUEST, Some(body)) if body.code == "VALIDATION_ERROR" => {
                let field = body
                    .field
                    .as_deref()
                    .and_then(|f| f.parse().ok())
                    .unwrap_or(StudentField::Name);
                GatewayError::Validation {
                    field,
                    message: body.error,
                }
            }
            (status, body) => GatewayError::Unexpected {
                status: status.as_u16(),
                message: body
                    .map(|b| b.error)
                    .unwrap_or_else(|| status.to_string()),
            },
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, GatewayError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::into_error(response).await)
        }
    }
}

#[async_trait]
impl StudentGateway for HttpGateway {
    async fn list_states(&self) -> Result<Vec<State>, GatewayError> {
        let response = self.client.get(self.url("/students/states")).send().await?;
        Self::decode(response).await
    }

    async fn list_students(&self, state_id: Option<DbId>) -> Result<Vec<Student>, GatewayError> {
        let mut request = self.client.get(self.url("/students"));
        if let Some(id) = state_id {
            request = request.query(&[("stateId", id)]);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn create_student(&self, input: &StudentInput) -> Result<Student, GatewayError> {
        let response = self
            .client
            .post(self.url("/students"))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_student(
        &self,
        id: DbId,
        input: &StudentInput,
    ) -> Result<Student, GatewayError> {
        let response = self
            .client
            .put(self.url(&format!("/students/{id}")))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_student(&self, id: DbId) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(self.url(&format!("/students/{id}")))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::into_error(response).await)
        }
    }
}
