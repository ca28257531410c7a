//! Outbound access to the muebleria backend REST API.
//!
//! [`Backend`] is the seam used by the service layer: a single JSON exchange
//! that [`client::ApiClient`] performs over HTTP. The typed verbs services
//! call live on [`BackendExt`], implemented for every backend. Every call
//! resolves to an [`ApiResult`] so callers can treat any failure uniformly as
//! "the operation did not happen".

use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub mod client;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use client::ApiClient;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not encode request body: {0}")]
    Encode(String),

    #[error("could not decode backend response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl Display for ApiMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ApiMethod::Get => "GET",
            ApiMethod::Post => "POST",
            ApiMethod::Put => "PUT",
            ApiMethod::Delete => "DELETE",
        })
    }
}

/// One call to the backend. `token` is sent as a bearer credential.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    pub endpoint: String,
    pub body: Option<Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: ApiMethod, endpoint: &str, token: Option<&str>) -> Self {
        Self {
            method,
            endpoint: endpoint.to_string(),
            body: None,
            token: token.map(str::to_string),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// JSON-over-HTTP exchange with the backend.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Performs `request`. A 2xx response with an empty body yields
    /// `Value::Null`; anything else that is not 2xx is an error.
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}

fn decode<T: DeserializeOwned>(request: &ApiRequest, value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| {
        log::error!(
            "API error decoding {} {}: {e}",
            request.method,
            request.endpoint
        );
        ApiError::Decode(e.to_string())
    })
}

fn encode<P: Serialize + ?Sized>(body: &P) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Typed verbs over [`Backend::send`].
#[allow(async_fn_in_trait)]
pub trait BackendExt: Backend {
    async fn get<T>(&self, endpoint: &str, token: Option<&str>) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(ApiMethod::Get, endpoint, token);
        let value = self.send(request.clone()).await?;
        decode(&request, value)
    }

    async fn post<P, T>(&self, endpoint: &str, body: &P, token: Option<&str>) -> ApiResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(ApiMethod::Post, endpoint, token).with_body(encode(body)?);
        let value = self.send(request.clone()).await?;
        decode(&request, value)
    }

    async fn put<P, T>(&self, endpoint: &str, body: &P, token: Option<&str>) -> ApiResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(ApiMethod::Put, endpoint, token).with_body(encode(body)?);
        let value = self.send(request.clone()).await?;
        decode(&request, value)
    }

    /// Deletes `endpoint`; whatever the backend answers is discarded.
    async fn delete(&self, endpoint: &str, token: Option<&str>) -> ApiResult<()> {
        self.send(ApiRequest::new(ApiMethod::Delete, endpoint, token))
            .await
            .map(|_| ())
    }
}

impl<B: Backend + ?Sized> BackendExt for B {}

/// Backend paths used by the services.
pub mod endpoints {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const MUEBLES: &str = "/muebles";
    pub const VARIANTES: &str = "/variantes";
    pub const ORDENES: &str = "/ordenes";
    pub const USUARIOS: &str = "/usuarios";

    pub fn mueble(id: i32) -> String {
        format!("{MUEBLES}/{id}")
    }

    pub fn variante(id: i32) -> String {
        format!("{VARIANTES}/{id}")
    }

    pub fn orden(id: i32) -> String {
        format!("{ORDENES}/{id}")
    }

    pub fn confirmar_orden(id: i32) -> String {
        format!("{ORDENES}/{id}/confirmar")
    }

    pub fn cancelar_orden(id: i32) -> String {
        format!("{ORDENES}/{id}/cancelar")
    }

    pub fn detalle_orden(orden_id: i32, detalle_id: i32) -> String {
        format!("{ORDENES}/{orden_id}/detalles/{detalle_id}")
    }

    pub fn rol_usuario(id: i64) -> String {
        format!("{USUARIOS}/{id}/rol")
    }

    pub fn activar_usuario(id: i64) -> String {
        format!("{USUARIOS}/{id}/activar")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::mock::MockBackend;

    #[actix_web::test]
    async fn typed_post_encodes_body_and_token() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| {
                req.method == ApiMethod::Post
                    && req.endpoint == "/ordenes/3/confirmar"
                    && req.body == Some(json!({}))
                    && req.token.as_deref() == Some("jwt")
            })
            .times(1)
            .returning(|_| Ok(json!({"idOrden": 3})));

        let value: Value = api
            .post("/ordenes/3/confirmar", &json!({}), Some("jwt"))
            .await
            .unwrap();

        assert_eq!(value["idOrden"], 3);
    }

    #[actix_web::test]
    async fn undecodable_response_is_decode_error() {
        let mut api = MockBackend::new();
        api.expect_send().returning(|_| Ok(json!({"unexpected": true})));

        let result: ApiResult<Vec<Value>> = api.get("/muebles", None).await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[actix_web::test]
    async fn delete_ignores_empty_body() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Delete && req.body.is_none())
            .returning(|_| Ok(Value::Null));

        assert!(api.delete("/variantes/4", Some("jwt")).await.is_ok());
    }
}
