//! Mock backend for isolating services in tests.

use mockall::mock;
use serde_json::Value;

use crate::api::{ApiError, ApiRequest, ApiResult, Backend};

mock! {
    pub Backend {}

    impl Backend for Backend {
        async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
    }
}

/// Error returned by mocks standing in for a refusing backend.
pub fn backend_failure() -> ApiError {
    ApiError::Status {
        status: 500,
        body: String::new(),
    }
}
